use statrs::stats_tests::fisher::FishersExactTestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Mapping table has no '{0}' column to group by")]
    MissingColumn(String),

    #[error("Invalid gene bin '{0}'. Expected 'n', 'n+' or 'lo-hi'")]
    InvalidBin(String),

    #[error("Fisher's exact test failed for bin '{bin}'")]
    FisherTest {
        bin: String,
        #[source]
        source: FishersExactTestError,
    },
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;
