use ahash::AHashSet;
use rand::{rngs::StdRng, seq::index, SeedableRng};
use tracing::{info, warn};

use crate::{
    error::Result,
    geom::Polygon,
    region::{active_shapes, label_groups, region_groups, Group},
    select::{min_pairwise_distance, select_k_per_group_with, Selection, SubsetOracle},
};

/// A candidate cell: its boundary and an optional categorical label.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub polygon: Polygon,
    pub label: Option<String>,
}

impl Shape {
    pub fn new(polygon: Polygon) -> Self { Self { polygon, label: None } }

    pub fn with_label(polygon: Polygon, label: impl Into<String>) -> Self {
        Self { polygon, label: Some(label.into()) }
    }
}

impl AsRef<Polygon> for Shape {
    fn as_ref(&self) -> &Polygon { &self.polygon }
}

/// How active shapes are split into groups before selecting k per group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One group: every shape inside any active region.
    #[default]
    UnionOfRegions,
    /// One group per active region.
    PerRegion,
    /// One group per label, optionally restricted to the given labels.
    PerLabel { labels: Option<Vec<String>> },
    /// Uniform random sample over the union of regions.
    Random { seed: u64 },
}

/// One group's selection, mapped back to shape indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedGroup {
    group: Group,
    selection: Selection, // Indices into group.members
}

impl PickedGroup {
    /// Get the group name.
    #[inline] pub fn name(&self) -> &str { &self.group.name }

    /// Get the candidate shape indices of this group.
    #[inline] pub fn members(&self) -> &[usize] { &self.group.members }

    /// Get the raw selection over the group's members.
    #[inline] pub fn selection(&self) -> &Selection { &self.selection }

    /// Selected shape indices in selection order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection.indices().iter().map(|&i| self.group.members[i])
    }

    /// Check if the group had fewer shapes than requested.
    #[inline] pub fn is_undersupplied(&self) -> bool { self.selection.is_undersupplied() }
}

/// The outcome of a selection over a shape list.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    groups: Vec<PickedGroup>,
    min_distance: f64,
}

impl Pick {
    /// Get every group's result, in group order.
    #[inline] pub fn groups(&self) -> &[PickedGroup] { &self.groups }

    /// Iterate over groups that could not supply k shapes.
    pub fn undersupplied(&self) -> impl Iterator<Item = &PickedGroup> + '_ {
        self.groups.iter().filter(|group| group.is_undersupplied())
    }

    /// Union of selected shape indices, in group order then selection order.
    pub fn selected(&self) -> Vec<usize> {
        let mut seen = AHashSet::new();
        self.groups.iter()
            .flat_map(PickedGroup::selected)
            .filter(|&i| seen.insert(i))
            .collect()
    }

    /// Minimum pairwise distance among the selected shapes (`+inf` for fewer than two).
    #[inline] pub fn min_distance(&self) -> f64 { self.min_distance }

    /// Check if the selection likely holds touching or overlapping cells.
    #[inline] pub fn is_possibly_contiguous(&self, threshold: f64) -> bool { self.min_distance < threshold }
}

/// Select `k` shapes per group from the shapes inside `regions`.
///
/// With no regions every shape is a candidate. Empty groups are reported as
/// undersupplied rather than failing; label filters naming unknown labels fail.
pub fn pick(shapes: &[Shape], regions: &[Polygon], mode: &SelectionMode, k: usize) -> Result<Pick> {
    let groups = match mode {
        SelectionMode::UnionOfRegions | SelectionMode::Random { .. } => {
            vec![Group::new("union", active_shapes(shapes, regions))]
        }
        SelectionMode::PerRegion if regions.is_empty() => {
            vec![Group::new("all", (0..shapes.len()).collect())]
        }
        SelectionMode::PerRegion => region_groups(shapes, regions),
        SelectionMode::PerLabel { labels } => {
            let shape_labels = shapes.iter().map(|shape| shape.label.as_deref()).collect::<Vec<_>>();
            label_groups(&shape_labels, &active_shapes(shapes, regions), labels.as_deref())?
        }
    };

    let selections = match mode {
        SelectionMode::Random { seed } => sample_groups(&groups, k, *seed),
        _ => spread_groups(shapes, &groups, k)?,
    };

    let groups = groups.into_iter().zip(selections)
        .map(|(group, selection)| PickedGroup { group, selection })
        .collect::<Vec<_>>();

    for group in groups.iter().filter(|group| group.is_undersupplied()) {
        warn!(group = group.name(), available = group.members().len(), k, "fewer shapes than requested");
    }

    let mut pick = Pick { groups, min_distance: f64::INFINITY };
    let chosen = pick.selected().into_iter().map(|i| &shapes[i].polygon).collect::<Vec<_>>();
    pick.min_distance = min_pairwise_distance(&chosen);
    info!(mode = ?mode, groups = pick.groups.len(), selected = chosen.len(), min_distance = pick.min_distance, "pick complete");

    Ok(pick)
}

/// Greedy k-center within each non-empty group; empty groups get an empty selection.
fn spread_groups(shapes: &[Shape], groups: &[Group], k: usize) -> Result<Vec<Selection>> {
    let oracles = groups.iter()
        .filter(|group| !group.is_empty())
        .map(|group| SubsetOracle::new(shapes, &group.members))
        .collect::<Vec<_>>();
    let mut spread = select_k_per_group_with(&oracles, k)?.into_groups().into_iter();

    Ok(groups.iter()
        .map(|group| if group.is_empty() {
            Selection::new(vec![], k)
        } else {
            spread.next().unwrap_or_default()
        })
        .collect())
}

/// Seeded uniform sample of up to `k` members per group.
fn sample_groups(groups: &[Group], k: usize, seed: u64) -> Vec<Selection> {
    let mut rng = StdRng::seed_from_u64(seed);
    groups.iter()
        .map(|group| {
            let amount = k.min(group.len());
            Selection::new(index::sample(&mut rng, group.len(), amount).into_vec(), k)
        })
        .collect()
}
