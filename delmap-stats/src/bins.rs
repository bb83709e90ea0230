use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::StatsError;

///
/// A range of deletion counts used to stratify genes.
///
/// Textual forms: `"n"` (exactly n), `"n+"` (at least n) and `"lo-hi"` (both
/// ends inclusive).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneBin {
    Exact(u64),
    AtLeast(u64),
    Range(u64, u64),
}

impl GeneBin {
    pub fn contains(&self, n_del: u64) -> bool {
        match *self {
            GeneBin::Exact(n) => n_del == n,
            GeneBin::AtLeast(n) => n_del >= n,
            GeneBin::Range(lo, hi) => n_del >= lo && n_del <= hi,
        }
    }
}

impl FromStr for GeneBin {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StatsError::InvalidBin(s.to_string());
        let number = |v: &str| v.trim().parse::<u64>().map_err(|_| invalid());

        let s_trim = s.trim();
        if let Some(lower) = s_trim.strip_suffix('+') {
            return Ok(GeneBin::AtLeast(number(lower)?));
        }
        if let Some((lo, hi)) = s_trim.split_once('-') {
            let (lo, hi) = (number(lo)?, number(hi)?);
            if lo > hi {
                return Err(invalid());
            }
            return Ok(GeneBin::Range(lo, hi));
        }
        Ok(GeneBin::Exact(number(s_trim)?))
    }
}

impl Display for GeneBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneBin::Exact(n) => write!(f, "{n}"),
            GeneBin::AtLeast(n) => write!(f, "{n}+"),
            GeneBin::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

impl Serialize for GeneBin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// Parse a list of bin specifications, e.g. `["0", "1+", "3-5"]`.
///
pub fn parse_bins<S: AsRef<str>>(bins: &[S]) -> Result<Vec<GeneBin>, StatsError> {
    bins.iter().map(|b| b.as_ref().parse()).collect()
}
