mod active;
mod labels;

pub use active::{active_shapes, region_groups};
pub use labels::label_groups;

/// A named set of candidate shapes, as indices into the full shape list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub members: Vec<usize>,
}

impl Group {
    pub fn new(name: impl Into<String>, members: Vec<usize>) -> Self {
        Self { name: name.into(), members }
    }

    /// Get the number of member shapes.
    #[inline] pub fn len(&self) -> usize { self.members.len() }

    /// Check if the group has no members.
    #[inline] pub fn is_empty(&self) -> bool { self.members.is_empty() }
}
