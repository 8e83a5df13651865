//! glTF Loader Tests
//!
//! Tests for:
//! - Skin joints becoming bones, parented through non-joint nodes
//! - Rest pose and baked translation channels
//! - Mesh placement for skinned and static meshes
//! - Animations without a skin, and missing files

use std::path::PathBuf;

use glam::{Quat, Vec3};
use rigview::animation::FRAME_TIME_MS;
use rigview::errors::ViewerError;
use rigview::scene::skeleton::NO_PARENT;
use rigview::{AssetLoader, GltfLoader, ViewerSession};
use serde_json::{Value, json};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

/// Little-endian floats: three triangle corners, two keyframe times
/// (0 and 1 s) and two translations ((1,0,0) then (3,0,0)).
const BUFFER: &str = "data:application/octet-stream;base64,\
    AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAAAAAAAgD8AAIA/\
    AAAAAAAAAAAAAEBAAAAAAAAAAAA=";

/// Armature -> root (joint) -> offset -> hand (joint), plus a skinned
/// triangle and a clip sliding the hand from x=1 to x=3 over one second.
fn arm_document() -> Value {
    json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0, 4] }],
        "nodes": [
            { "name": "Armature", "children": [1] },
            { "name": "root", "translation": [0.0, 1.0, 0.0], "children": [2] },
            { "name": "offset", "children": [3] },
            { "name": "hand", "translation": [1.0, 0.0, 0.0] },
            { "name": "body", "mesh": 0, "skin": 0, "translation": [0.0, 0.0, 5.0] }
        ],
        "skins": [{ "name": "arm", "joints": [1, 3] }],
        "meshes": [{ "name": "sleeve", "primitives": [{ "attributes": { "POSITION": 0 } }] }],
        "animations": [{
            "channels": [{ "sampler": 0, "target": { "node": 3, "path": "translation" } }],
            "samplers": [{ "input": 1, "output": 2, "interpolation": "LINEAR" }]
        }],
        "accessors": [
            {
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            },
            {
                "bufferView": 1, "componentType": 5126, "count": 2, "type": "SCALAR",
                "min": [0.0], "max": [1.0]
            },
            {
                "bufferView": 2, "componentType": 5126, "count": 2, "type": "VEC3",
                "min": [1.0, 0.0, 0.0], "max": [3.0, 0.0, 0.0]
            }
        ],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 8 },
            { "buffer": 0, "byteOffset": 44, "byteLength": 24 }
        ],
        "buffers": [{ "byteLength": 68, "uri": BUFFER }]
    })
}

/// The same document with the skin removed.
fn unskinned_document() -> Value {
    let mut doc = arm_document();
    if let Some(root) = doc.as_object_mut() {
        root.remove("skins");
    }
    if let Some(body) = doc["nodes"][4].as_object_mut() {
        body.remove("skin");
    }
    doc
}

fn write_document(name: &str, doc: &Value) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rigview_{}_{name}.gltf", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
    path
}

// ============================================================================
// Skin
// ============================================================================

#[test]
fn skin_joints_become_bones() {
    let path = write_document("bones", &arm_document());
    let model = GltfLoader::new().load_model(&path).unwrap();

    let skeleton = &model.skeleton;
    assert_eq!(skeleton.name, "arm");
    assert_eq!(skeleton.bone_count(), 2);
    assert_eq!(skeleton.bones[0].name, "root");
    assert_eq!(skeleton.bones[0].parent, NO_PARENT);
    // "offset" is not a joint, so the hand hangs off the root.
    assert_eq!(skeleton.bones[1].name, "hand");
    assert_eq!(skeleton.bones[1].parent, 0);
    assert_eq!(model.name, format!("rigview_{}_bones", std::process::id()));

    std::fs::remove_file(path).ok();
}

#[test]
fn skinned_mesh_keeps_bind_positions() {
    let path = write_document("skinned_mesh", &arm_document());
    let model = GltfLoader::new().load_model(&path).unwrap();

    assert_eq!(model.meshes.len(), 1);
    assert_eq!(model.meshes[0].name, "sleeve_0");
    assert_eq!(model.triangle_count(), 1);
    assert_eq!(model.meshes[0].positions, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);

    std::fs::remove_file(path).ok();
}

// ============================================================================
// Animation
// ============================================================================

#[test]
fn translation_channel_is_baked_in_model_space() {
    let path = write_document("clip", &arm_document());
    let clips = GltfLoader::new().load_animations(&path).unwrap();

    assert_eq!(clips.len(), 1);
    let clip = &clips[0];
    assert_eq!(clip.name, "Animation_0");
    assert_eq!(clip.frame_count(), 1000 / FRAME_TIME_MS as usize + 1);

    // Untracked root keeps its rest pose.
    let root = clip.pose(0, 0).unwrap();
    assert!(vec3_approx(root.translation, Vec3::new(0.0, 1.0, 0.0)));
    assert!(root.rotation.angle_between(Quat::IDENTITY) < EPSILON);

    // Hand local x runs 1 -> 3, offset by the root.
    assert!(vec3_approx(clip.pose(0, 1).unwrap().translation, Vec3::new(1.0, 1.0, 0.0)));
    let frame = 30;
    let t = (frame * FRAME_TIME_MS as usize) as f32 / 1000.0;
    let hand = clip.pose(frame, 1).unwrap().translation;
    assert!(vec3_approx(hand, Vec3::new(1.0 + 2.0 * t, 1.0, 0.0)), "{hand}");

    std::fs::remove_file(path).ok();
}

#[test]
fn session_loads_gltf_clips() {
    let path = write_document("session", &arm_document());
    let mut session = ViewerSession::default();
    session.load_model(&path, &GltfLoader::new()).unwrap();

    assert_eq!(session.clip_options(), vec![("Animation_0", 0)]);
    let pose = session.current_pose().unwrap().unwrap();
    assert_eq!(pose.joints.len(), 2);

    std::fs::remove_file(path).ok();
}

// ============================================================================
// Without a Skin
// ============================================================================

#[test]
fn animations_without_skin_are_dropped_on_load() {
    let path = write_document("unskinned", &unskinned_document());
    let loader = GltfLoader::new();

    let loaded = loader.load(&path).unwrap();
    assert!(loaded.clips.is_empty());
    assert_eq!(loaded.model.bone_count(), 0);
    // Static meshes are placed by their node transform.
    assert_eq!(loaded.model.meshes[0].positions[0], Vec3::new(0.0, 0.0, 5.0));

    let err = loader.load_animations(&path).unwrap_err();
    assert!(matches!(err, ViewerError::MissingSkin(_)));

    std::fs::remove_file(path).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("rigview_does_not_exist.gltf");
    let err = GltfLoader::new().load(&path).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)));
}
