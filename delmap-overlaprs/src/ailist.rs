use std::mem::swap;

use num_traits::{PrimInt, Unsigned};

use super::Overlapper;
use delmap_core::models::Interval;

/// Number of following intervals an interval must contain before it is moved
/// into a separate component.
const MIN_COVERAGE: usize = 10;

/// An Augmented Interval List over closed intervals.
///
/// From the following article: <https://academic.oup.com/bioinformatics/article/35/23/4907/5509521>
///
/// Intervals are sorted by start and split into components so that long
/// intervals covering many short ones do not break the running `max_end`
/// early-exit. Each component stores a prefix maximum of the ends; a query walks
/// backwards from the last start `<= end` and stops once that maximum falls
/// below the query start.
///
/// # Examples
///
/// ```
/// use delmap_overlaprs::{AIList, Overlapper, Interval};
///
/// let genes = vec![
///     Interval { start: 1000u32, end: 2000, val: 0usize },
///     Interval { start: 1500, end: 2500, val: 1 },
///     Interval { start: 5000, end: 6000, val: 2 },
/// ];
///
/// let ailist = AIList::build(genes);
///
/// // closed coordinates: a query ending at 1000 still touches the first gene
/// assert_eq!(ailist.find(0, 1000).len(), 1);
/// assert_eq!(ailist.find(1800, 2200).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    starts: Vec<I>,
    ends: Vec<I>,
    max_ends: Vec<I>,
    /// Offset of each component inside the flat vectors.
    components: Vec<usize>,
    stored_intervals: Vec<Interval<I, T>>,
}

/// Scratch space for one [`AIList::decompose`] pass.
#[derive(Debug, Default)]
struct Component<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    starts: Vec<I>,
    ends: Vec<I>,
    max_ends: Vec<I>,
    stored_intervals: Vec<Interval<I, T>>,
    /// Intervals deferred to the next component.
    rest: Vec<Interval<I, T>>,
}

impl<I, T> Component<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn with_capacity(cap: usize) -> Self {
        Self {
            starts: Vec::with_capacity(cap),
            ends: Vec::with_capacity(cap),
            max_ends: Vec::with_capacity(cap),
            stored_intervals: Vec::with_capacity(cap),
            rest: Vec::with_capacity(cap),
        }
    }

    fn clear(&mut self) {
        self.starts.clear();
        self.ends.clear();
        self.max_ends.clear();
        self.stored_intervals.clear();
        self.rest.clear();
    }
}

impl<I, T> Overlapper<I, T> for AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(mut intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        intervals.sort_by_key(|iv| iv.start);

        let mut starts = Vec::with_capacity(intervals.len());
        let mut ends = Vec::with_capacity(intervals.len());
        let mut max_ends = Vec::with_capacity(intervals.len());
        let mut stored_intervals = Vec::with_capacity(intervals.len());

        // the scratch component is drained after every pass, its capacity is reused
        let mut scratch = Component::with_capacity(intervals.len());
        let mut components = vec![0];

        loop {
            Self::decompose(&intervals, &mut scratch);

            starts.append(&mut scratch.starts);
            ends.append(&mut scratch.ends);
            max_ends.append(&mut scratch.max_ends);
            stored_intervals.append(&mut scratch.stored_intervals);
            swap(&mut intervals, &mut scratch.rest);

            if intervals.is_empty() {
                break;
            }
            components.push(starts.len());
        }

        AIList {
            starts,
            ends,
            max_ends,
            components,
            stored_intervals,
        }
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(IterFind {
            inner: self,
            component: 0,
            cursor: None,
            start,
            end,
        })
    }

    fn len(&self) -> usize {
        self.starts.len()
    }
}

impl<I, T> AIList<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn decompose(intervals: &[Interval<I, T>], scratch: &mut Component<I, T>) {
        scratch.clear();

        for (index, interval) in intervals.iter().enumerate() {
            let covered = intervals
                .iter()
                .skip(index + 1)
                .take(MIN_COVERAGE * 2 - 1)
                .filter(|next| interval.end > next.end)
                .count();

            if covered >= MIN_COVERAGE {
                scratch.rest.push(interval.clone());
            } else {
                scratch.starts.push(interval.start);
                scratch.ends.push(interval.end);
                scratch.stored_intervals.push(interval.clone());
            }
        }

        let mut max = I::zero();
        for end in scratch.ends.iter() {
            max = max.max(*end);
            scratch.max_ends.push(max);
        }
    }

    fn component_range(&self, component: usize) -> std::ops::Range<usize> {
        let first = self.components[component];
        let last = self
            .components
            .get(component + 1)
            .copied()
            .unwrap_or(self.starts.len());
        first..last
    }

    /// Number of components the intervals were split into.
    pub fn n_components(&self) -> usize {
        self.components.len()
    }
}

/// Lazily walks every component of an [`AIList`] for one query.
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    inner: &'a AIList<I, T>,
    component: usize,
    /// Position inside the current component, counting down.
    cursor: Option<usize>,
    start: I,
    end: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync + 'a,
{
    type Item = &'a Interval<I, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.component < self.inner.components.len() {
            let range = self.inner.component_range(self.component);
            let starts = &self.inner.starts[range.clone()];
            let ends = &self.inner.ends[range.clone()];
            let max_ends = &self.inner.max_ends[range.clone()];
            let stored = &self.inner.stored_intervals[range];

            let end = self.end;
            let i = self
                .cursor
                .get_or_insert_with(|| starts.partition_point(|&x| x <= end));

            while *i > 0 {
                *i -= 1;
                if ends[*i] >= self.start {
                    return Some(&stored[*i]);
                }
                // nothing left of this point reaches the query start
                if max_ends[*i] < self.start {
                    break;
                }
            }
            self.cursor = None;
            self.component += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn intervals() -> Vec<Interval<u32, &'static str>> {
        vec![
            Interval { start: 1, end: 5, val: "a" },
            Interval { start: 3, end: 7, val: "b" },
            Interval { start: 6, end: 10, val: "c" },
            Interval { start: 8, end: 12, val: "d" },
        ]
    }

    fn vals(hits: Vec<Interval<u32, &'static str>>) -> Vec<&'static str> {
        let mut vals: Vec<&str> = hits.iter().map(|i| i.val).collect();
        vals.sort();
        vals
    }

    #[rstest]
    fn test_build_and_len(intervals: Vec<Interval<u32, &'static str>>) {
        let ailist = AIList::build(intervals.clone());
        assert_eq!(ailist.len(), intervals.len());
        assert!(!ailist.is_empty());
        assert_eq!(ailist.n_components(), 1);
    }

    #[rstest]
    fn test_find_overlapping(intervals: Vec<Interval<u32, &'static str>>) {
        let ailist = AIList::build(intervals);
        assert_eq!(vals(ailist.find(2, 4)), vec!["a", "b"]);
        assert_eq!(vals(ailist.find(9, 11)), vec!["c", "d"]);
    }

    #[rstest]
    fn test_boundaries_are_inclusive(intervals: Vec<Interval<u32, &'static str>>) {
        let ailist = AIList::build(intervals);
        // touches the end of "d" only
        assert_eq!(vals(ailist.find(12, 20)), vec!["d"]);
        // touches the start of "a" only
        assert_eq!(vals(ailist.find(0, 1)), vec!["a"]);
        assert_eq!(vals(ailist.find(5, 6)), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_find_no_overlap(intervals: Vec<Interval<u32, &'static str>>) {
        let ailist = AIList::build(intervals);
        assert!(ailist.find(13, 15).is_empty());
    }

    #[rstest]
    fn test_empty_ailist() {
        let ailist: AIList<u32, &str> = AIList::build(vec![]);
        assert!(ailist.is_empty());
        assert!(ailist.find(1, 2).is_empty());
    }

    #[rstest]
    fn test_long_intervals_are_decomposed() {
        let iv = |start: u32, end: u32| Interval { start, end, val: () };
        let mut intervals = vec![iv(0, 1_000)];
        intervals.extend((0..30).map(|i| iv(i * 10 + 1, i * 10 + 5)));
        intervals.push(iv(500, 600));

        let ailist = AIList::build(intervals);
        assert_eq!(ailist.n_components(), 2);

        // the long interval must still be found far from its start
        assert_eq!(ailist.find(950, 960).len(), 1);
        assert_eq!(ailist.find(550, 550).len(), 2);
        assert_eq!(ailist.find(11, 12).len(), 2);
        assert!(ailist.find(1_001, 2_000).is_empty());
    }
}
