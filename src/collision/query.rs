//! Probe-vs-obstacles queries

use super::Aabb;

/// Index of the first obstacle the probe box overlaps, if any
pub fn first_overlap<I>(probe: &Aabb, obstacles: I) -> Option<usize>
where
    I: IntoIterator<Item = Aabb>,
{
    obstacles
        .into_iter()
        .position(|obstacle| probe.overlaps(&obstacle))
}
