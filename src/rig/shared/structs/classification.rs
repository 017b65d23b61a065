use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Partition of a skeleton's joints produced by the classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Vertex-group names carrying a positive weight on a bound mesh.
    /// May name groups that have no joint in the skeleton.
    pub weighted: BTreeSet<String>,
    pub essential: BTreeSet<String>,
    pub unused: BTreeSet<String>,
}

impl Classification {
    pub fn is_essential(&self, name: &str) -> bool {
        self.essential.contains(name)
    }

    pub fn is_unused(&self, name: &str) -> bool {
        self.unused.contains(name)
    }

    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }
}
