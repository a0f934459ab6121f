use std::collections::HashMap;

use crate::api::{Privilege, ResourceRef, Role};

/// Anything identified by a uuid. Roles, privileges and references compare
/// equal when their keys match, regardless of the other fields.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Role {
    fn key(&self) -> &str {
        &self.uuid
    }
}

impl Keyed for Privilege {
    fn key(&self) -> &str {
        &self.uuid
    }
}

impl Keyed for ResourceRef {
    fn key(&self) -> &str {
        &self.uuid
    }
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for str {
    fn key(&self) -> &str {
        self
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// Insertion-ordered set keyed by uuid. The first item with a given key wins.
#[derive(Debug, Clone)]
pub struct KeyedSet<T> {
    index: HashMap<String, usize>,
    items: Vec<T>,
}

impl<T> Default for KeyedSet<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            items: Vec::new(),
        }
    }
}

impl<T: Keyed> KeyedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when an item with the same key is already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.index.contains_key(item.key()) {
            return false;
        }
        self.index.insert(item.key().to_string(), self.items.len());
        self.items.push(item);
        true
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn contains<K: Keyed + ?Sized>(&self, other: &K) -> bool {
        self.contains_key(other.key())
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Keyed> FromIterator<T> for KeyedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<T: Keyed> Extend<T> for KeyedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a KeyedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Uuid-only references for a set of keyed items, in order.
pub fn refs<'a, T, I>(items: I) -> Vec<ResourceRef>
where
    T: Keyed + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|i| ResourceRef::new(i.key())).collect()
}
