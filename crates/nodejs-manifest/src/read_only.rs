//! Read-only string map used for the manifest's collection fields
//!
//! `ReadOnlyMap` is a snapshot of one JSON object from the manifest
//! (`dependencies`, `devDependencies`, `scripts`). It exposes lookup and
//! iteration only. The mutation-shaped methods exist so that misuse is loud:
//! every one of them panics, whether the map came from a decoded file, from
//! `Default`, or from cloning another map.

use ahash::AHashMap;
use serde::Deserialize;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

/// Immutable name -> value view over a manifest section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ReadOnlyMap {
    inner: AHashMap<Arc<str>, Arc<str>>,
}

impl ReadOnlyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`. A missing key is `None`, never a panic.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(AsRef::as_ref)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(AsRef::as_ref)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.values().map(AsRef::as_ref)
    }

    /// Always panics: manifest collections cannot be written to.
    pub fn insert(&mut self, key: &str, _value: &str) -> Option<String> {
        self.read_only_violation("insert", Some(key))
    }

    /// Always panics: manifest collections cannot be written to.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.read_only_violation("remove", Some(key))
    }

    /// Always panics: manifest collections cannot be written to.
    pub fn clear(&mut self) {
        self.read_only_violation("clear", None)
    }

    #[cold]
    #[track_caller]
    fn read_only_violation(&self, op: &str, key: Option<&str>) -> ! {
        match key {
            Some(key) => panic!(
                "manifest maps are read-only: attempted {op} of key {key:?} ({} entries)",
                self.len()
            ),
            None => panic!(
                "manifest maps are read-only: attempted {op} ({} entries)",
                self.len()
            ),
        }
    }
}

#[cold]
#[track_caller]
fn missing_key(key: &str) -> ! {
    panic!("key {key:?} not present in manifest map")
}

impl Index<&str> for ReadOnlyMap {
    type Output = str;

    /// Panics when `key` is missing, like `HashMap`. Prefer [`ReadOnlyMap::get`].
    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => missing_key(key),
        }
    }
}

impl IndexMut<&str> for ReadOnlyMap {
    fn index_mut(&mut self, key: &str) -> &mut str {
        self.read_only_violation("index_mut", Some(key))
    }
}

impl<K, V> Extend<(K, V)> for ReadOnlyMap
where
    K: Into<Arc<str>>,
    V: Into<Arc<str>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, _iter: I) {
        self.read_only_violation("extend", None)
    }
}

impl<K, V> FromIterator<(K, V)> for ReadOnlyMap
where
    K: Into<Arc<str>>,
    V: Into<Arc<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ReadOnlyMap {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Borrowing iterator over a [`ReadOnlyMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::collections::hash_map::Iter<'a, Arc<str>, Arc<str>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ReadOnlyMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
