use std::sync::{Arc, PoisonError, RwLock};

use crate::descriptor::OperationDescriptor;

/// The current set of invocable operations.
///
/// Readers take a snapshot; a rebuild swaps in a whole new list, so a snapshot never mixes
/// descriptors from two registration passes.
pub struct Registry {
    current: RwLock<Arc<[OperationDescriptor]>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::from(Vec::new())),
        }
    }

    pub fn snapshot(&self) -> Arc<[OperationDescriptor]> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, descriptors: Vec<OperationDescriptor>) {
        let next: Arc<[OperationDescriptor]> = Arc::from(descriptors);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Looks up by fully-qualified name.
    pub fn get(&self, fully_qualified_name: &str) -> Option<OperationDescriptor> {
        self.snapshot()
            .iter()
            .find(|d| d.fully_qualified_name == fully_qualified_name)
            .cloned()
    }

    /// Looks up by fully-qualified name, falling back to a unique endpoint name (`GetUsersById`).
    pub fn find(&self, name: &str) -> Option<OperationDescriptor> {
        let snapshot = self.snapshot();
        if let Some(d) = snapshot.iter().find(|d| d.fully_qualified_name == name) {
            return Some(d.clone());
        }
        let mut matches = snapshot.iter().filter(|d| d.name == name);
        match (matches.next(), matches.next()) {
            (Some(d), None) => Some(d.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
