use ahash::{AHashMap, AHashSet};

use crate::error::{Result, SelectionError};

use super::Group;

/// Group `members` by categorical label.
///
/// `labels` is indexed by shape; unlabeled shapes are skipped. Without a
/// filter, one group per label present among the members, sorted by label.
/// With a filter, one group per filter label in filter order (possibly empty);
/// a filter label that no shape carries fails with `UnknownLabel`.
pub fn label_groups(labels: &[Option<&str>], members: &[usize], filter: Option<&[String]>) -> Result<Vec<Group>> {
    let mut by_label: AHashMap<&str, Vec<usize>> = AHashMap::new();
    for &member in members {
        if let Some(label) = labels[member] {
            by_label.entry(label).or_default().push(member);
        }
    }

    let Some(filter) = filter else {
        let mut groups = by_label.into_iter()
            .map(|(label, members)| Group::new(label, members))
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        return Ok(groups)
    };

    let known = labels.iter().flatten().copied().collect::<AHashSet<&str>>();
    if let Some(unknown) = filter.iter().find(|label| !known.contains(label.as_str())) {
        return Err(SelectionError::UnknownLabel(unknown.clone()));
    }

    let mut seen = AHashSet::new();
    Ok(filter.iter()
        .filter(|label| seen.insert(label.as_str()))
        .map(|label| Group::new(label.as_str(), by_label.remove(label.as_str()).unwrap_or_default()))
        .collect())
}
