//! Core data model: digests, snapshots and diff results.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Lowercase hexadecimal digest of a file's content.
///
/// Digests carry no record of the algorithm that produced them; comparing
/// digests from two different algorithms always reports a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    pub fn new(hex: impl Into<String>) -> Self {
        Digest(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Digest {
    fn from(value: String) -> Self {
        Digest(value)
    }
}

impl From<&str> for Digest {
    fn from(value: &str) -> Self {
        Digest(value.to_string())
    }
}

/// State of a directory tree at one point in time: path -> digest.
///
/// Backed by a `BTreeMap` so the serialized form is stable between saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, Digest>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a digest for `path`, returning the previous digest if any.
    pub fn insert(&mut self, path: impl Into<String>, digest: Digest) -> Option<Digest> {
        self.entries.insert(path.into(), digest)
    }

    pub fn remove(&mut self, path: &str) -> Option<Digest> {
        self.entries.remove(path)
    }

    pub fn get(&self, path: &str) -> Option<&Digest> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Digest> {
        self.entries.iter()
    }
}

impl FromIterator<(String, Digest)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Digest)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a Digest);
    type IntoIter = btree_map::Iter<'a, String, Digest>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// How a path differs between a baseline and a current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
}

/// Classification of every known path relative to a baseline.
///
/// The three sets are pairwise disjoint. Paths present in both snapshots
/// with equal digests are only counted in `unchanged`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub added: BTreeSet<String>,
    pub removed: BTreeSet<String>,
    pub changed: BTreeSet<String>,
    pub unchanged: usize,
}

impl DiffResult {
    /// True when nothing was added, removed or changed.
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Number of paths that differ from the baseline.
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    /// Every differing path with its classification: added, then removed, then changed.
    pub fn changes(&self) -> impl Iterator<Item = (&str, ChangeKind)> + '_ {
        tagged(&self.added, ChangeKind::Added)
            .chain(tagged(&self.removed, ChangeKind::Removed))
            .chain(tagged(&self.changed, ChangeKind::Changed))
    }
}

fn tagged(
    paths: &BTreeSet<String>,
    kind: ChangeKind,
) -> impl Iterator<Item = (&str, ChangeKind)> + '_ {
    paths.iter().map(move |path| (path.as_str(), kind))
}
