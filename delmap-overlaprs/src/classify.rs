use delmap_core::models::{GeneId, GeneInterval, OverlapPolicy, Segment};

///
/// Check whether `gene` overlaps `segment` at all: the gene starts inside the
/// segment, ends inside it, or spans it entirely.
///
#[inline]
pub fn overlaps_partially(segment: &Segment, gene: &GeneInterval) -> bool {
    let starts_inside = gene.start >= segment.start && gene.start <= segment.end;
    let ends_inside = gene.end >= segment.start && gene.end <= segment.end;
    let spans_segment = gene.start <= segment.start && gene.end >= segment.end;

    starts_inside || ends_inside || spans_segment
}

///
/// Check whether `gene` lies entirely inside `segment`.
///
#[inline]
pub fn overlaps_fully(segment: &Segment, gene: &GeneInterval) -> bool {
    gene.to_interval(()).within(segment.start, segment.end)
}

///
/// Number of positions shared by the gene and the segment, computed as
/// `min(end) - max(start)` and floored at zero.
///
#[inline]
pub fn overlap_length(segment: &Segment, gene: &GeneInterval) -> u32 {
    gene.to_interval(()).intersect(segment.start, segment.end)
}

///
/// Check whether the overlap covers at least `percent` of the gene span.
/// Zero-span genes never pass a non-zero threshold.
///
#[inline]
pub fn meets_threshold(segment: &Segment, gene: &GeneInterval, percent: f64) -> bool {
    if percent == 0.0 {
        return true;
    }
    let span = gene.span();
    if span == 0 {
        return false;
    }
    overlap_length(segment, gene) as f64 >= percent * span as f64
}

///
/// Genes hit by `segment` under the partial policy.
///
/// Every gene that overlaps the segment is returned when `percent` is zero; otherwise
/// only genes whose overlap is at least `percent` of their span. Ids are returned in
/// the order of `genes`.
///
/// # Arguments
///
/// - segment: the query segment
/// - genes: candidate gene intervals on the segment's chromosome
/// - percent: minimal fraction of the gene span that must be covered, in `[0, 1]`
///
pub fn map_segment_partial<'a, G>(segment: &Segment, genes: G, percent: f64) -> Vec<GeneId>
where
    G: IntoIterator<Item = &'a GeneInterval>,
{
    genes
        .into_iter()
        .filter(|gene| overlaps_partially(segment, gene))
        .filter(|gene| meets_threshold(segment, gene, percent))
        .map(|gene| gene.gene_id)
        .collect()
}

///
/// Genes lying completely inside `segment`, in the order of `genes`.
///
pub fn map_segment_full<'a, G>(segment: &Segment, genes: G) -> Vec<GeneId>
where
    G: IntoIterator<Item = &'a GeneInterval>,
{
    genes
        .into_iter()
        .filter(|gene| overlaps_fully(segment, gene))
        .map(|gene| gene.gene_id)
        .collect()
}

/// Dispatch to the classifier for `policy`. `percent` is ignored by [`OverlapPolicy::Full`].
pub fn map_segment<'a, G>(
    policy: OverlapPolicy,
    segment: &Segment,
    genes: G,
    percent: f64,
) -> Vec<GeneId>
where
    G: IntoIterator<Item = &'a GeneInterval>,
{
    match policy {
        OverlapPolicy::Partial => map_segment_partial(segment, genes, percent),
        OverlapPolicy::Full => map_segment_full(segment, genes),
    }
}
