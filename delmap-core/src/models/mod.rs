pub mod chromosome;
pub mod counts;
pub mod gene;
pub mod interval;
pub mod policy;
pub mod segment;

// re-export for cleaner imports
pub use self::chromosome::Chromosome;
pub use self::counts::{GeneAnnotation, GeneDeletionCount, SampleDeletionCount};
pub use self::gene::{GeneId, GeneInterval};
pub use self::interval::Interval;
pub use self::policy::{OverlapPolicy, OverlapperType};
pub use self::segment::{MappedSegment, MappingTable, Segment, SegmentTable};
