//! Stable indexing between station labels and compact vertex ids.
//!
//! Ids are handed out in first-seen order, so iterating the index also
//! iterates the vertex set in insertion order.

use std::collections::HashMap;

use rn_core::VertexId;

/// Bidirectional label <-> [`VertexId`] map.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    /// Contiguous list of labels (index -> label).
    labels: Vec<String>,

    /// Reverse lookup: label -> id.
    ids: HashMap<String, VertexId>,
}

impl VertexIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `label`, assigning the next free one if unseen.
    pub fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = VertexId::from_index(self.labels.len() as u32);
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }

    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Resolve an id back to its label (None if the id was never issued).
    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.labels.get(id.slot()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over (id, label) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (VertexId::from_index(i as u32), label.as_str()))
    }

    /// All ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len() as u32).map(VertexId::from_index)
    }
}
