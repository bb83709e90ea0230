use num_traits::{PrimInt, Unsigned};

use super::Overlapper;
use delmap_core::models::Interval;

///
/// Brute-force overlapper: keeps the intervals in insertion order and tests each
/// one per query. It serves as the reference against which the indexed structures
/// are checked and is fast enough for the few thousand genes of a chromosome.
///
#[derive(Debug, Clone)]
pub struct LinearScan<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    intervals: Vec<Interval<I, T>>,
}

impl<I, T> Overlapper<I, T> for LinearScan<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        LinearScan { intervals }
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(
            self.intervals
                .iter()
                .filter(move |iv| iv.touches(start, end)),
        )
    }

    fn len(&self) -> usize {
        self.intervals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AIList;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, vec![])]
    #[case(0, 10, vec![0])]
    #[case(10, 10, vec![0])]
    #[case(20, 25, vec![0, 1])]
    #[case(21, 29, vec![1])]
    #[case(41, 100, vec![])]
    fn test_linear_scan_keeps_insertion_order(
        #[case] start: u32,
        #[case] end: u32,
        #[case] expected: Vec<usize>,
    ) {
        let scan = LinearScan::build(vec![
            Interval { start: 10u32, end: 20, val: 0usize },
            Interval { start: 25, end: 40, val: 1 },
        ]);
        let hits: Vec<usize> = scan.find_iter(start, end).map(|iv| iv.val).collect();
        assert_eq!(hits, expected);
    }

    #[rstest]
    fn test_linear_scan_agrees_with_ailist() {
        // deterministic pseudo-random layout with nested and abutting intervals
        let intervals: Vec<Interval<u32, usize>> = (0..200u32)
            .map(|i| {
                let start = (i * 7919) % 5_000;
                let width = (i * 104_729) % 700;
                Interval {
                    start,
                    end: start + width,
                    val: i as usize,
                }
            })
            .collect();

        let scan = LinearScan::build(intervals.clone());
        let ailist = AIList::build(intervals);

        for q in 0..100u32 {
            let start = (q * 4_099) % 5_500;
            let end = start + (q * 31) % 400;

            let mut expected: Vec<usize> = scan.find_iter(start, end).map(|iv| iv.val).collect();
            let mut found: Vec<usize> = ailist.find_iter(start, end).map(|iv| iv.val).collect();
            expected.sort();
            found.sort();

            assert_eq!(found, expected, "query [{start}, {end}]");
        }
    }
}
