use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scenevault_types::{
    restore_elements, DefaultRestorer, ElementRestorer, Scene, SceneElement,
};
use serde_json::json;

fn rect(id: &str, version: u64) -> SceneElement {
    SceneElement::new(id, "rectangle")
        .with_version(version)
        .with_property("x", 10)
        .with_property("y", 20)
}

// ── Scene version ────────────────────────────────────────────────

#[test]
fn empty_scene_has_version_zero() {
    assert_eq!(Scene::new().version(), 0);
}

#[test]
fn version_sums_element_versions() {
    let scene = Scene::from_elements(vec![rect("a", 3), rect("b", 4)]);
    assert_eq!(scene.version(), 7);
}

#[test]
fn deleted_elements_count_towards_version() {
    let mut deleted = rect("b", 2);
    deleted.is_deleted = true;
    let scene = Scene::from_elements(vec![rect("a", 1), deleted]);
    assert_eq!(scene.version(), 3);
}

#[test]
fn bump_version_increases_scene_version() {
    let mut scene = Scene::from_elements(vec![rect("a", 1)]);
    let before = scene.version();
    scene.elements_mut()[0].bump_version(42);
    assert!(scene.version() > before);
    assert_eq!(scene.elements()[0].version_nonce, 42);
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn element_uses_camel_case_wire_names() {
    let el = rect("a", 2);
    let value = serde_json::to_value(&el).unwrap();
    assert_eq!(value["type"], "rectangle");
    assert_eq!(value["version"], 2);
    assert_eq!(value["versionNonce"], 0);
    assert_eq!(value["isDeleted"], false);
    assert_eq!(value["x"], 10);
}

#[test]
fn unknown_properties_survive_roundtrip() {
    let raw = json!([{
        "id": "t1",
        "type": "text",
        "version": 5,
        "versionNonce": 99,
        "isDeleted": false,
        "text": "hello",
        "fontSize": 20,
        "groupIds": ["g1"]
    }]);
    let scene: Scene = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(scene.elements()[0].properties["text"], "hello");
    assert_eq!(serde_json::to_value(&scene).unwrap(), raw);
}

#[test]
fn missing_bookkeeping_fields_default() {
    let scene: Scene = serde_json::from_value(json!([{ "id": "a", "type": "line" }])).unwrap();
    let el = &scene.elements()[0];
    assert_eq!(el.version, 0);
    assert_eq!(el.version_nonce, 0);
    assert!(!el.is_deleted);
}

#[test]
fn json_bytes_roundtrip() {
    let scene = Scene::from_elements(vec![rect("a", 1), rect("b", 2)]);
    let bytes = scene.to_json_bytes().unwrap();
    assert_eq!(Scene::from_json_bytes(&bytes).unwrap(), scene);
}

#[test]
fn invalid_json_is_rejected() {
    assert!(Scene::from_json_bytes(b"{not json").is_err());
    assert!(Scene::from_json_bytes(b"{\"id\":\"a\"}").is_err());
}

// ── Restoration ──────────────────────────────────────────────────

#[test]
fn restore_drops_elements_without_id_or_kind() {
    let restored = restore_elements(vec![
        SceneElement::new("", "rectangle"),
        SceneElement::new("a", ""),
        rect("b", 1),
    ]);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].id, "b");
}

#[test]
fn restore_fills_zero_version() {
    let restored = restore_elements(vec![rect("a", 0)]);
    assert_eq!(restored[0].version, 1);
}

#[test]
fn restore_keeps_first_duplicate() {
    let restored = restore_elements(vec![rect("a", 5), rect("a", 9)]);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].version, 5);
}

#[test]
fn default_restorer_restores_scene() {
    let scene = Scene::from_elements(vec![rect("a", 0), SceneElement::new("", "x")]);
    let restored = DefaultRestorer.restore_scene(scene);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.version(), 1);
}

proptest! {
    /// Bumping any single element strictly increases the scene version.
    #[test]
    fn any_edit_increases_version(
        versions in prop::collection::vec(1u64..1000, 1..50),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut scene: Scene = versions
            .iter()
            .enumerate()
            .map(|(i, v)| rect(&format!("e{i}"), *v))
            .collect();
        let before = scene.version();
        let idx = pick.index(scene.len());
        scene.elements_mut()[idx].bump_version(7);
        prop_assert!(scene.version() > before);
    }

    /// Recomputing the version of unchanged content yields the same value.
    #[test]
    fn version_is_stable(versions in prop::collection::vec(0u64..1000, 0..50)) {
        let scene: Scene = versions
            .iter()
            .enumerate()
            .map(|(i, v)| rect(&format!("e{i}"), *v))
            .collect();
        let reparsed = Scene::from_json_bytes(&scene.to_json_bytes().unwrap()).unwrap();
        prop_assert_eq!(scene.version(), reparsed.version());
    }
}
