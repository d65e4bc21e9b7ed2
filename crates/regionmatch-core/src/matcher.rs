// crates/regionmatch-core/src/matcher.rs
//! Nearest-K matching on a single numeric field.
//!
//! The K candidates closest to the source by `|field(candidate) - field(source)|`
//! are selected with a stable sort, so equal distances keep their input order.
//! The source is then added back and the row is re-sorted by the raw field
//! value, which places the source among its neighbours.
use crate::dataset::Dataset;
use crate::model::{Field, Region, RegionId};
use std::cmp::Ordering;

/// Default number of candidates shown next to the source.
pub const DEFAULT_CANDIDATES: usize = 7;

#[inline]
fn by_value(a: f64, b: f64) -> Ordering {
    // total_cmp keeps the sort well defined; NaN sorts after every number.
    a.total_cmp(&b)
}

/// Core routine over arbitrary items, given a field reader.
///
/// Returns `min(k, pool.len()) + 1` items: the `k` nearest candidates plus
/// `source`, ordered ascending by value.
pub fn nearest_by<T, F>(source: T, pool: impl IntoIterator<Item = T>, k: usize, value: F) -> Vec<T>
where
    T: Copy,
    F: Fn(T) -> f64,
{
    let origin = value(source);

    let mut scored: Vec<(f64, T)> = pool
        .into_iter()
        .map(|item| ((value(item) - origin).abs(), item))
        .collect();
    // Stable: ties keep pool order.
    scored.sort_by(|a, b| by_value(a.0, b.0));

    let mut out: Vec<T> = Vec::with_capacity(k.min(scored.len()) + 1);
    out.extend(scored.into_iter().take(k).map(|(_, item)| item));
    out.push(source);
    out.sort_by(|a, b| by_value(value(*a), value(*b)));
    out
}

/// Finds the `k` regions of `pool` nearest to `source` on `field`.
///
/// `pool` must not contain `source`. An empty pool yields `[source]`.
///
/// ```
/// use regionmatch_core::matcher::nearest;
/// use regionmatch_core::{Field, Region, RegionGroup};
///
/// let src = Region::new(RegionGroup::Domestic, "X", 100.0, 1.0, 10.0, 0.9);
/// let pool = [
///     Region::new(RegionGroup::Foreign, "A", 80.0, 1.0, 10.0, 0.9),
///     Region::new(RegionGroup::Foreign, "B", 130.0, 1.0, 10.0, 0.9),
///     Region::new(RegionGroup::Foreign, "C", 200.0, 1.0, 10.0, 0.9),
/// ];
/// let row: Vec<f64> = nearest(&src, Field::Gdp, &pool, 2).iter().map(|r| r.gdp).collect();
/// assert_eq!(row, [80.0, 100.0, 130.0]);
/// ```
pub fn nearest<'a>(
    source: &'a Region,
    field: Field,
    pool: impl IntoIterator<Item = &'a Region>,
    k: usize,
) -> Vec<&'a Region> {
    nearest_by(source, pool, k, |r: &Region| field.value(r))
}

/// Same as [`nearest`], over ids resolved through `dataset`.
///
/// Ids that do not resolve are skipped.
pub fn nearest_ids(
    dataset: &Dataset,
    source: RegionId,
    field: Field,
    pool: impl IntoIterator<Item = RegionId>,
    k: usize,
) -> Vec<RegionId> {
    let value = |id: RegionId| dataset.get(id).map_or(f64::NAN, |r| field.value(r));
    let pool = pool.into_iter().filter(|id| dataset.get(*id).is_some());
    nearest_by(source, pool, k, value)
}
