use tracing::debug;

use crate::{
    error::{Result, SelectionError},
    geom::{Point, Polygon},
    select::{gonzalez::Picks, LazyOracle, Oracle, PointOracle, Selection},
};

/// Per-group selections plus the round-robin order in which they were made.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSelection {
    groups: Vec<Selection>,
    order: Vec<(usize, usize)>, // (group, index within group), one pick per group per round
}

impl GroupSelection {
    /// Get the selection for every group, in group order.
    #[inline] pub fn groups(&self) -> &[Selection] { &self.groups }

    /// Get the selection for a single group.
    #[inline] pub fn group(&self, group: usize) -> &Selection { &self.groups[group] }

    /// Consume the result, returning the per-group selections.
    #[inline] pub fn into_groups(self) -> Vec<Selection> { self.groups }

    /// Get the interleaved `(group, index)` pick order.
    #[inline] pub fn order(&self) -> &[(usize, usize)] { &self.order }

    /// Get the number of groups.
    #[inline] pub fn len(&self) -> usize { self.groups.len() }

    /// Check if there are no groups.
    #[inline] pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Flag each group that had fewer candidates than requested.
    pub fn undersupplied(&self) -> Vec<bool> {
        self.groups.iter().map(Selection::is_undersupplied).collect()
    }

    /// Number of unsatisfied picks for each group.
    pub fn shortfalls(&self) -> Vec<usize> {
        self.groups.iter().map(Selection::shortfall).collect()
    }
}

/// Select up to `k` candidates from each oracle's set.
///
/// Groups take turns, one pick per group per round, until every group has its
/// quota. Each group's result equals an independent
/// [`super::select_k_center_with`] call on that group; groups share nothing
/// but `k`. An empty group with `k > 0` fails the whole call.
pub fn select_k_per_group_with<O: Oracle>(oracles: &[O], k: usize) -> Result<GroupSelection> {
    let mut sources = oracles.iter().enumerate()
        .map(|(group, oracle)| Picks::new(oracle, k)
            .map_err(|_| SelectionError::EmptyGroup { group }))
        .collect::<Result<Vec<_>>>()?;

    let mut picks = oracles.iter()
        .map(|oracle| Vec::with_capacity(k.min(oracle.len())))
        .collect::<Vec<_>>();
    let mut order = Vec::with_capacity(picks.iter().map(Vec::capacity).sum());

    loop {
        let mut progressed = false;
        for (group, source) in sources.iter_mut().enumerate() {
            let Some(index) = source.next() else { continue };
            picks[group].push(index);
            order.push((group, index));
            progressed = true;
        }
        if !progressed { break }
    }

    let groups = picks.into_iter()
        .map(|indices| Selection::new(indices, k))
        .collect::<Vec<_>>();
    debug!(groups = groups.len(), k, picks = order.len(), "round-robin selection");

    Ok(GroupSelection { groups, order })
}

/// Select up to `k` well-spread polygons from each group.
pub fn select_k_per_group<G: AsRef<[Polygon]>>(groups: &[G], k: usize) -> Result<GroupSelection> {
    let oracles = groups.iter()
        .map(|group| LazyOracle::new(group.as_ref()))
        .collect::<Vec<_>>();
    select_k_per_group_with(&oracles, k)
}

/// Select up to `k` well-spread points from each group.
pub fn select_k_per_group_points<G: AsRef<[Point]>>(groups: &[G], k: usize) -> Result<GroupSelection> {
    let oracles = groups.iter()
        .map(|group| PointOracle::new(group.as_ref()))
        .collect::<Vec<_>>();
    select_k_per_group_with(&oracles, k)
}
