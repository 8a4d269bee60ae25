//! Owning container for scene colliders
//!
//! Holds named colliders, answers "what does this probe touch" queries and
//! moves colliders picked up by a dragging probe. Every query is a plain loop
//! of narrow-phase tests; there is no spatial partitioning.

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use super::collision::{Collider, ColliderError};
use crate::config::{ConfigError, SceneConfig};
use crate::foundation::math::Vec2;

new_key_type! {
    /// Stable handle to a collider in a [`ColliderSet`]
    pub struct ColliderKey;
}

/// Scene construction errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene description could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A described collider failed validation
    #[error("Invalid collider '{name}': {source}")]
    InvalidCollider {
        /// Name of the offending entry
        name: String,
        /// Factory error
        #[source]
        source: ColliderError,
    },

    /// The described probe failed validation
    #[error("Invalid probe: {0}")]
    InvalidProbe(#[source] ColliderError),
}

/// Pair of colliders that overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// First collider (smaller key)
    pub a: ColliderKey,
    /// Second collider (larger key)
    pub b: ColliderKey,
}

impl CollisionPair {
    /// Create a new collision pair (always stores the smaller key first for consistency)
    pub fn new(a: ColliderKey, b: ColliderKey) -> Self {
        if a < b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Whether the pair involves `key`
    pub fn contains(&self, key: ColliderKey) -> bool {
        self.a == key || self.b == key
    }
}

/// Collider data stored by the set
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    collider: Collider,
    dragging: bool,
}

/// Named colliders with probe queries and drag handling
#[derive(Debug, Default)]
pub struct ColliderSet {
    entries: SlotMap<ColliderKey, Entry>,

    /// Keys in insertion order
    order: Vec<ColliderKey>,

    /// Cursor position of the last drag step, while a drag is active
    drag_anchor: Option<Vec2>,
}

impl ColliderSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every collider described by a scene
    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        let mut set = Self::new();
        for named in &config.colliders {
            let collider = named.shape.build().map_err(|source| SceneError::InvalidCollider {
                name: named.name.clone(),
                source,
            })?;
            set.insert(named.name.clone(), collider);
        }

        log::info!("Built collider set with {} colliders", set.len());
        Ok(set)
    }

    /// Add a collider, returning its key
    pub fn insert(&mut self, name: impl Into<String>, collider: Collider) -> ColliderKey {
        let name = name.into();
        log::debug!("Inserting {:?} collider '{}'", collider.kind(), name);

        let key = self.entries.insert(Entry {
            name,
            collider,
            dragging: false,
        });
        self.order.push(key);
        key
    }

    /// Remove a collider
    pub fn remove(&mut self, key: ColliderKey) -> Option<Collider> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|&existing| existing != key);
        log::debug!("Removed collider '{}'", entry.name);
        Some(entry.collider)
    }

    /// Get a collider
    pub fn get(&self, key: ColliderKey) -> Option<&Collider> {
        self.entries.get(key).map(|entry| &entry.collider)
    }

    /// Get a collider for repositioning
    pub fn get_mut(&mut self, key: ColliderKey) -> Option<&mut Collider> {
        self.entries.get_mut(key).map(|entry| &mut entry.collider)
    }

    /// Name a collider was inserted with
    pub fn name(&self, key: ColliderKey) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.name.as_str())
    }

    /// Key of the first collider with the given name
    pub fn find(&self, name: &str) -> Option<ColliderKey> {
        self.order
            .iter()
            .copied()
            .find(|&key| self.entries[key].name == name)
    }

    /// Number of colliders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no colliders
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, name, collider)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ColliderKey, &str, &Collider)> + '_ {
        self.order.iter().map(move |&key| {
            let entry = &self.entries[key];
            (key, entry.name.as_str(), &entry.collider)
        })
    }

    /// Keys of colliders overlapping `probe`, in insertion order
    pub fn hits(&self, probe: &Collider) -> Vec<ColliderKey> {
        self.iter()
            .filter(|(_, _, collider)| collider.collides_with(probe))
            .map(|(key, _, _)| key)
            .collect()
    }

    /// Every distinct pair of colliders that currently overlap
    pub fn overlapping_pairs(&self) -> Vec<CollisionPair> {
        let mut pairs = Vec::new();
        for (i, &key_a) in self.order.iter().enumerate() {
            let collider_a = &self.entries[key_a].collider;
            for &key_b in &self.order[i + 1..] {
                if collider_a.collides_with(&self.entries[key_b].collider) {
                    pairs.push(CollisionPair::new(key_a, key_b));
                }
            }
        }
        pairs
    }

    /// Pick up every collider the probe overlaps
    ///
    /// Returns the number of colliders picked up. Colliders already being
    /// dragged stay picked up.
    pub fn begin_drag(&mut self, probe: &Collider, cursor: Vec2) -> usize {
        let hits = self.hits(probe);
        for &key in &hits {
            self.entries[key].dragging = true;
        }
        self.drag_anchor = Some(cursor);

        log::debug!("Drag started at ({}, {}) with {} colliders", cursor.x, cursor.y, hits.len());
        hits.len()
    }

    /// Move dragged colliders by the cursor movement since the last drag step
    ///
    /// Lines move both endpoints. Does nothing without an active drag.
    pub fn drag_to(&mut self, cursor: Vec2) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };

        let delta = cursor - anchor;
        for entry in self.entries.values_mut().filter(|entry| entry.dragging) {
            entry.collider.translate(delta);
        }
        self.drag_anchor = Some(cursor);
    }

    /// Release all dragged colliders, returning how many were released
    pub fn end_drag(&mut self) -> usize {
        self.drag_anchor = None;

        let mut released = 0;
        for entry in self.entries.values_mut().filter(|entry| entry.dragging) {
            entry.dragging = false;
            released += 1;
        }

        if released > 0 {
            log::debug!("Drag ended, released {released} colliders");
        }
        released
    }

    /// Whether a collider is currently being dragged
    pub fn is_dragging(&self, key: ColliderKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.dragging)
    }

    /// Keys of dragged colliders, in insertion order
    pub fn dragged(&self) -> Vec<ColliderKey> {
        self.order
            .iter()
            .copied()
            .filter(|&key| self.entries[key].dragging)
            .collect()
    }
}
