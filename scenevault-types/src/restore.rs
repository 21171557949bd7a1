//! Element restoration.
//!
//! Scenes read back from storage may have been written by older or foreign
//! clients. Restoration normalizes them into the canonical element shape
//! before they are handed to the application.

use crate::scene::{Scene, SceneElement};

/// Normalizes loaded elements into their canonical shape.
pub trait ElementRestorer: Send + Sync {
    /// Restores a list of loaded elements.
    fn restore(&self, elements: Vec<SceneElement>) -> Vec<SceneElement>;

    /// Restores a whole scene.
    fn restore_scene(&self, scene: Scene) -> Scene {
        Scene::from_elements(self.restore(scene.into_elements()))
    }
}

/// Restorer applying [`restore_elements`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRestorer;

impl ElementRestorer for DefaultRestorer {
    fn restore(&self, elements: Vec<SceneElement>) -> Vec<SceneElement> {
        restore_elements(elements)
    }
}

/// Applies per-element defaults.
///
/// - elements without an id or a kind are dropped
/// - a zero version becomes 1, since every persisted element has been created
/// - duplicate ids keep the first occurrence
pub fn restore_elements(elements: Vec<SceneElement>) -> Vec<SceneElement> {
    let mut seen = std::collections::HashSet::new();
    elements
        .into_iter()
        .filter(|el| !el.id.is_empty() && !el.kind.is_empty())
        .filter(|el| seen.insert(el.id.clone()))
        .map(|mut el| {
            if el.version == 0 {
                el.version = 1;
            }
            el
        })
        .collect()
}
