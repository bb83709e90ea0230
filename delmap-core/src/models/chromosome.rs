use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ChromosomeError;

/// Number of autosomes in the supported (human) karyotype.
pub const N_AUTOSOMES: u8 = 22;

///
/// Chromosome identifier for the supported karyotype: autosomes 1-22 plus X and Y.
///
/// Numeric placeholders used by some segment callers are accepted on input:
/// `23` is read as X and `24` as Y. Ordering is numeric for autosomes, then X, then Y.
///
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone, Copy)]
pub enum Chromosome {
    Autosome(u8),
    X,
    Y,
}

impl Chromosome {
    ///
    /// Build a chromosome from its numeric code.
    ///
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=N_AUTOSOMES => Some(Chromosome::Autosome(code)),
            23 => Some(Chromosome::X),
            24 => Some(Chromosome::Y),
            _ => None,
        }
    }
}

impl FromStr for Chromosome {
    type Err = ChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed
            .strip_prefix("chr")
            .or_else(|| trimmed.strip_prefix("Chr"))
            .or_else(|| trimmed.strip_prefix("CHR"))
            .unwrap_or(trimmed);

        match name {
            "X" | "x" => Ok(Chromosome::X),
            "Y" | "y" => Ok(Chromosome::Y),
            _ => name
                .parse::<u8>()
                .ok()
                .and_then(Chromosome::from_code)
                .ok_or_else(|| ChromosomeError::Unsupported(s.to_string())),
        }
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chromosome::Autosome(n) => write!(f, "{}", n),
            Chromosome::X => write!(f, "X"),
            Chromosome::Y => write!(f, "Y"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1", Chromosome::Autosome(1))]
    #[case("22", Chromosome::Autosome(22))]
    #[case("chr7", Chromosome::Autosome(7))]
    #[case("X", Chromosome::X)]
    #[case("chrx", Chromosome::X)]
    #[case("Y", Chromosome::Y)]
    #[case("23", Chromosome::X)]
    #[case("24", Chromosome::Y)]
    fn test_parse_supported(#[case] raw: &str, #[case] expected: Chromosome) {
        assert_eq!(raw.parse::<Chromosome>().unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("25")]
    #[case("MT")]
    #[case("chrUn_gl000220")]
    #[case("")]
    fn test_parse_unsupported(#[case] raw: &str) {
        assert!(raw.parse::<Chromosome>().is_err());
    }

    #[rstest]
    fn test_ordering() {
        let mut chroms = vec![
            Chromosome::Y,
            Chromosome::Autosome(10),
            Chromosome::X,
            Chromosome::Autosome(2),
        ];
        chroms.sort();
        assert_eq!(
            chroms,
            vec![
                Chromosome::Autosome(2),
                Chromosome::Autosome(10),
                Chromosome::X,
                Chromosome::Y
            ]
        );
    }

    #[rstest]
    fn test_code_round_trip() {
        for code in 1..=24u8 {
            let chrom = Chromosome::from_code(code).unwrap();
            assert_eq!(code.to_string().parse::<Chromosome>().unwrap(), chrom);
            assert_eq!(chrom.to_string().parse::<Chromosome>().unwrap(), chrom);
        }
        assert_eq!(Chromosome::from_code(0), None);
        assert_eq!(Chromosome::from_code(25), None);
    }
}
