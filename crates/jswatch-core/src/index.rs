//! Per-capture lookup from identity to resource.

use std::collections::HashMap;

use crate::resource::Resource;

/// Identity-keyed resources of one capture, iterated in first-insertion order.
///
/// When two resources share an identity the later one replaces the earlier,
/// keeping the earlier one's position. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    slots: Vec<Resource>,
    by_identity: HashMap<String, usize>,
}

impl ResourceIndex {
    pub fn build<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = Resource>,
    {
        let mut index = Self::default();
        for resource in resources {
            match index.by_identity.get(&resource.identity) {
                Some(&slot) => {
                    tracing::debug!("identity collision on {}; keeping later", resource.identity);
                    index.slots[slot] = resource;
                }
                None => {
                    index
                        .by_identity
                        .insert(resource.identity.clone(), index.slots.len());
                    index.slots.push(resource);
                }
            }
        }
        index
    }

    pub fn get(&self, identity: &str) -> Option<&Resource> {
        self.by_identity.get(identity).map(|&i| &self.slots[i])
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.by_identity.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.slots.iter()
    }
}

impl FromIterator<Resource> for ResourceIndex {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<'a> IntoIterator for &'a ResourceIndex {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
