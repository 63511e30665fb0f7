/// Indices chosen from one candidate set, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    indices: Vec<usize>, // Indices into the candidate set, most important first
    requested: usize,    // The k that was asked for
}

impl Selection {
    pub(crate) fn new(indices: Vec<usize>, requested: usize) -> Self {
        Self { indices, requested }
    }

    /// Get the chosen indices in the order they were selected.
    #[inline] pub fn indices(&self) -> &[usize] { &self.indices }

    /// Consume the selection, returning the chosen indices.
    #[inline] pub fn into_indices(self) -> Vec<usize> { self.indices }

    /// Get the number of chosen indices.
    #[inline] pub fn len(&self) -> usize { self.indices.len() }

    /// Check if nothing was chosen.
    #[inline] pub fn is_empty(&self) -> bool { self.indices.is_empty() }

    /// Get the requested count k.
    #[inline] pub fn requested(&self) -> usize { self.requested }

    /// Number of requested picks that could not be satisfied.
    #[inline] pub fn shortfall(&self) -> usize { self.requested.saturating_sub(self.indices.len()) }

    /// Check if fewer candidates existed than were requested.
    #[inline] pub fn is_undersupplied(&self) -> bool { self.shortfall() > 0 }

    /// Check if `index` was chosen.
    #[inline] pub fn contains(&self, index: usize) -> bool { self.indices.contains(&index) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfall_counts_missing_picks() {
        let selection = Selection::new(vec![0, 2, 1], 5);
        assert_eq!(selection.shortfall(), 2);
        assert!(selection.is_undersupplied());
    }

    #[test]
    fn exact_count_is_not_undersupplied() {
        let selection = Selection::new(vec![0, 1], 2);
        assert_eq!(selection.shortfall(), 0);
        assert!(!selection.is_undersupplied());
    }

    #[test]
    fn contains_and_order() {
        let selection = Selection::new(vec![3, 0], 2);
        assert!(selection.contains(3));
        assert!(!selection.contains(1));
        assert_eq!(selection.into_indices(), vec![3, 0]);
    }
}
