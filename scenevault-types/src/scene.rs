//! Scene model.
//!
//! A scene is the ordered list of drawable elements of one whiteboard. The
//! persistence layer only looks at a handful of bookkeeping fields; every
//! other element property is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneElement {
    /// Element id, unique within a scene.
    pub id: String,
    /// Element kind (`rectangle`, `arrow`, `text`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Edit counter, bumped on every change to the element.
    #[serde(default)]
    pub version: u64,
    /// Random nonce regenerated on every change, used to break version ties.
    #[serde(default)]
    pub version_nonce: u64,
    /// Soft-deletion flag. Deleted elements still count towards the scene version.
    #[serde(default)]
    pub is_deleted: bool,
    /// All remaining element properties (geometry, style, text, ...).
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl SceneElement {
    /// Creates a bare element of the given kind at version 1.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            version: 1,
            version_nonce: 0,
            is_deleted: false,
            properties: Map::new(),
        }
    }

    /// Sets an extra property, returning the element.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Sets the version, returning the element.
    #[must_use]
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Records an edit: bumps the version and replaces the nonce.
    pub fn bump_version(&mut self, nonce: u64) {
        self.version = self.version.saturating_add(1);
        self.version_nonce = nonce;
    }
}

/// The full element list of one whiteboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    elements: Vec<SceneElement>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene from elements.
    pub fn from_elements(elements: Vec<SceneElement>) -> Self {
        Self { elements }
    }

    /// Returns the elements in order.
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Returns mutable access to the elements.
    pub fn elements_mut(&mut self) -> &mut Vec<SceneElement> {
        &mut self.elements
    }

    /// Consumes the scene, returning its elements.
    pub fn into_elements(self) -> Vec<SceneElement> {
        self.elements
    }

    /// Appends an element.
    pub fn push(&mut self, element: SceneElement) {
        self.elements.push(element);
    }

    /// Returns the number of elements, deleted ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the scene has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the scene version: the sum of all element versions.
    ///
    /// Any edit bumps at least one element version, so the value grows with
    /// every content change and is stable while content is unchanged.
    pub fn version(&self) -> u64 {
        self.elements
            .iter()
            .fold(0u64, |acc, el| acc.saturating_add(el.version))
    }

    /// Serializes the scene to JSON bytes.
    pub fn to_json_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parses a scene from JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl FromIterator<SceneElement> for Scene {
    fn from_iter<I: IntoIterator<Item = SceneElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
