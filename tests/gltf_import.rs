use rig_cleaner_rs::rig::shared::enums::{ObjectKind, ReportLevel};
use rig_cleaner_rs::rig::shared::structs::Report;
use rig_cleaner_rs::rig::shared::traits::{Operator, OperatorResult, SceneHost};
use rig_cleaner_rs::rig::shared::util::load_scene;
use rig_cleaner_rs::rig::{classify_armature, RemoveUnusedBones};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a small rig: Hips > Spine > UpperArm > Hand > (Socket) > Finger, and
/// Hips > Tail. The body mesh weights Hand, UpperArm and Hips; Finger only has
/// a zero weight and Tail none at all.
fn write_rig(dir: &Path) -> PathBuf {
    let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let joints: [[u16; 4]; 3] = [[3, 0, 0, 0], [3, 2, 0, 0], [0, 5, 0, 0]];
    let weights: [[f32; 4]; 3] = [
        [1.0, 0.0, 0.0, 0.0],
        [0.5, 0.5, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ];

    let mut bytes = Vec::new();
    for position in positions.iter() {
        for value in position.iter() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
    for joint in joints.iter() {
        for value in joint.iter() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
    for weight in weights.iter() {
        for value in weight.iter() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
    }
    assert_eq!(bytes.len(), 108);
    fs::write(dir.join("rig.bin"), &bytes).unwrap();

    let document = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [
            { "name": "Armature", "children": [1, 6] },
            { "name": "Hips", "translation": [0.0, 1.0, 0.0], "children": [2, 5] },
            { "name": "Spine", "children": [3] },
            { "name": "UpperArm", "children": [4] },
            { "name": "Hand", "children": [7] },
            { "name": "Tail" },
            { "name": "Body", "mesh": 0, "skin": 0 },
            { "name": "Socket", "translation": [0.0, 0.0, 0.5], "children": [8] },
            { "name": "Finger", "translation": [0.0, 0.0, 0.25] }
        ],
        "skins": [{ "name": "Rig", "joints": [1, 2, 3, 4, 5, 8] }],
        "meshes": [{
            "name": "BodyMesh",
            "primitives": [{
                "attributes": { "POSITION": 0, "JOINTS_0": 1, "WEIGHTS_0": 2 }
            }]
        }],
        "accessors": [
            {
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            },
            { "bufferView": 1, "componentType": 5123, "count": 3, "type": "VEC4" },
            { "bufferView": 2, "componentType": 5126, "count": 3, "type": "VEC4" }
        ],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 24 },
            { "buffer": 0, "byteOffset": 60, "byteLength": 48 }
        ],
        "buffers": [{ "uri": "rig.bin", "byteLength": 108 }]
    });
    let path = dir.join("rig.gltf");
    fs::write(&path, serde_json::to_vec_pretty(&document).unwrap()).unwrap();
    path
}

#[test]
fn skins_become_armatures_with_bound_meshes() {
    let dir = tempfile::tempdir().unwrap();
    let scene = load_scene(&write_rig(dir.path())).unwrap();

    let armature = scene.active_object().unwrap();
    assert_eq!(scene.object_kind(armature), Some(ObjectKind::Armature));
    assert_eq!(scene.object_name(armature), Some("Rig"));

    let skeleton = scene.skeleton(armature).unwrap();
    let names: Vec<&str> = skeleton.joint_names().collect();
    assert_eq!(names, vec!["Hips", "Spine", "Tail", "UpperArm", "Hand", "Finger"]);
    let finger = skeleton.get("Finger").unwrap();
    assert_eq!(skeleton.joint(finger.parent().unwrap()).unwrap().name(), "Hand");
    assert_eq!(finger.local_transform.w_axis.z, 0.75);
    assert_eq!(skeleton.get("Hips").unwrap().local_transform.w_axis.y, 1.0);

    let meshes = scene.mesh_objects();
    assert_eq!(meshes.len(), 1);
    assert!(scene.modifiers(meshes[0])[0].targets(armature));
    let mesh = scene.mesh(meshes[0]).unwrap();
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.vertex_groups.len(), 6);
}

#[test]
fn loaded_rig_classifies_by_weights() {
    let dir = tempfile::tempdir().unwrap();
    let scene = load_scene(&write_rig(dir.path())).unwrap();
    let armature = scene.active_object().unwrap();

    let classification = classify_armature(&scene, armature, &mut Vec::<Report>::new()).unwrap();
    let weighted: Vec<&str> = classification.weighted.iter().map(|s| s.as_str()).collect();
    assert_eq!(weighted, vec!["Hand", "Hips", "UpperArm"]);
    let unused: Vec<&str> = classification.unused.iter().map(|s| s.as_str()).collect();
    assert_eq!(unused, vec!["Finger", "Tail"]);
}

#[test]
fn remove_on_loaded_rig() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = load_scene(&write_rig(dir.path())).unwrap();
    let armature = scene.active_object().unwrap();

    let mut reports: Vec<Report> = Vec::new();
    let result = RemoveUnusedBones.execute(&mut scene, &mut reports);
    assert_eq!(result, OperatorResult::Finished { count: 2 });
    let names: Vec<&str> = scene.skeleton(armature).unwrap().joint_names().collect();
    assert_eq!(names, vec!["Hips", "Spine", "UpperArm", "Hand"]);
}

#[test]
fn plain_nodes_become_empties() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = load_scene(&write_rig(dir.path())).unwrap();
    assert_eq!(scene.object_count(), 4);
    assert!(scene.find_object("Hips").is_none());

    let socket = scene.find_object("Socket").unwrap();
    assert_eq!(scene.object_kind(socket), Some(ObjectKind::Empty));
    let root = scene.find_object("Armature").unwrap();
    assert_eq!(scene.object_kind(root), Some(ObjectKind::Empty));

    scene.set_active(Some(socket)).unwrap();
    let mut reports: Vec<Report> = Vec::new();
    assert_eq!(
        RemoveUnusedBones.execute(&mut scene, &mut reports),
        OperatorResult::Cancelled
    );
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].level, ReportLevel::Error);
    assert_eq!(reports[0].message, "Active object must be an armature");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_scene(&dir.path().join("missing.gltf")).is_err());
}
