//! Texture set and base name types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::role::Role;

/// Files of one texture set, at most one per role
///
/// A filled slot is never overwritten: the first file offered for a role
/// keeps it. Iteration follows role layout order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureSet {
    slots: BTreeMap<Role, PathBuf>,
}

impl TextureSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Path assigned to `role`
    pub fn get(&self, role: Role) -> Option<&Path> {
        self.slots.get(&role).map(PathBuf::as_path)
    }

    /// Whether `role` is filled
    pub fn contains_role(&self, role: Role) -> bool {
        self.slots.contains_key(&role)
    }

    /// Assign `path` to `role` unless the slot is already filled
    ///
    /// Returns `true` when the path was stored.
    pub fn insert_if_vacant(&mut self, role: Role, path: impl Into<PathBuf>) -> bool {
        if self.slots.contains_key(&role) {
            return false;
        }
        self.slots.insert(role, path.into());
        true
    }

    /// Whether any slot holds `path`, compared after lexical normalization
    pub fn contains_path(&self, path: &Path) -> bool {
        let wanted = normalize_path(path);
        self.slots.values().any(|p| normalize_path(p) == wanted)
    }

    /// Role and path pairs in layout order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Path)> + '_ {
        self.slots.iter().map(|(role, path)| (*role, path.as_path()))
    }

    /// Filled roles in layout order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.slots.keys().copied()
    }

    /// Number of filled roles
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no role is filled
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<'a> IntoIterator for &'a TextureSet {
    type Item = (Role, &'a Path);
    type IntoIter = Box<dyn Iterator<Item = (Role, &'a Path)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Common stem shared by the files of a texture set
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseName(String);

impl BaseName {
    /// Wrap a derived base name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Raw base name as derived from the filename
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the base name is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable material name
    ///
    /// Underscores and hyphens become spaces, surrounding whitespace is
    /// trimmed, and each word is title-cased. An empty result falls back to
    /// `default_label`, title-cased the same way.
    pub fn material_label(&self, default_label: &str) -> String {
        let spaced = self.0.replace(['_', '-'], " ");
        let trimmed = spaced.trim();
        if trimmed.is_empty() {
            title_case(default_label)
        } else {
            title_case(trimmed)
        }
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BaseName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BaseName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Lexically normalize a path without touching the filesystem
///
/// `.` components are dropped and `..` cancels the preceding normal
/// component. Leading `..` components are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}
