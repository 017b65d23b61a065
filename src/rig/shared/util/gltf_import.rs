use anyhow::Context;
use glam::Mat4;
use gltf::{Document, Node};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::rig::shared::scene::Scene;
use crate::rig::shared::structs::{Mesh, Modifier, ObjectData, SceneObject, Skeleton};
use crate::rig::shared::types::ObjectKey;

pub fn read_raw_data(file_name: &Path) -> anyhow::Result<(Document, Vec<gltf::buffer::Data>)> {
    let (document, buffers, _) = gltf::import(file_name)
        .with_context(|| format!("Failed to import rig from glTF: {}", file_name.display()))?;
    Ok((document, buffers))
}

/// Loads a glTF file into a scene. Every skin becomes an armature, every
/// skinned mesh node a mesh bound to that armature, and every other node that
/// is not a joint an empty. The first armature is made active.
pub fn load_scene(file_name: &Path) -> anyhow::Result<Scene> {
    let (document, buffers) = read_raw_data(file_name)?;
    build_scene(&document, &buffers)
}

pub fn build_scene(document: &Document, buffers: &[gltf::buffer::Data]) -> anyhow::Result<Scene> {
    let parents = node_parents(document);
    let nodes: Vec<Node> = document.nodes().collect();
    let mut scene = Scene::new();
    let mut armatures: HashMap<usize, (ObjectKey, Vec<String>)> = HashMap::new();
    let mut joint_nodes = HashSet::new();

    for skin in document.skins() {
        let name = skin
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Armature{}", skin.index()));
        let joints: Vec<Node> = skin.joints().collect();
        joint_nodes.extend(joints.iter().map(|node| node.index()));
        let (skeleton, joint_names) = process_skeleton(&joints, &nodes, &parents)
            .with_context(|| format!("Failed to build skeleton for skin '{}'.", name))?;
        log::info!("Armature '{}' joint count: {}", &name, skeleton.len());
        let key = scene.add_armature(&name, skeleton);
        armatures.insert(skin.index(), (key, joint_names));
    }

    for node in nodes.iter() {
        let mesh = match node.mesh() {
            Some(mesh) => mesh,
            None => {
                if !joint_nodes.contains(&node.index()) {
                    let name = node
                        .name()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("Empty{}", node.index()));
                    scene.add_object(SceneObject::new(&name, ObjectData::Empty));
                }
                continue;
            }
        };
        let name = node
            .name()
            .or_else(|| mesh.name())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Mesh{}", node.index()));
        let binding = node
            .skin()
            .and_then(|skin| armatures.get(&skin.index()));
        let object = match binding {
            Some((armature, joint_names)) => {
                let data = process_skinned_mesh(&mesh, buffers, joint_names);
                log::info!(
                    "Skinned mesh '{}' vertex count: {}",
                    &name,
                    data.vertices.len()
                );
                let mut object = SceneObject::new(&name, ObjectData::Mesh(data));
                object
                    .modifiers
                    .push(Modifier::armature("Armature", Some(*armature)));
                object
            }
            None => {
                let data = process_skinned_mesh(&mesh, buffers, &[]);
                SceneObject::new(&name, ObjectData::Mesh(data))
            }
        };
        scene.add_object(object);
    }

    if let Some(first) = scene.armatures().first().copied() {
        scene.set_active(Some(first))?;
    }
    log::info!("Scene object count: {}", scene.object_count());
    Ok(scene)
}

fn node_parents(document: &Document) -> Vec<Option<usize>> {
    let mut parents = vec![None; document.nodes().count()];
    for node in document.nodes() {
        for child in node.children() {
            parents[child.index()] = Some(node.index());
        }
    }
    parents
}

fn node_depth(index: usize, parents: &[Option<usize>]) -> anyhow::Result<usize> {
    let mut depth = 0;
    let mut current = parents[index];
    while let Some(parent) = current {
        depth += 1;
        if depth > parents.len() {
            anyhow::bail!("Node {} is part of a cycle in the node hierarchy.", index);
        }
        current = parents[parent];
    }
    Ok(depth)
}

fn local_matrix(node: &Node) -> Mat4 {
    Mat4::from_cols_array_2d(&node.transform().matrix())
}

fn unique_name(used: &mut HashSet<String>, base: &str) -> String {
    let mut name = base.to_string();
    let mut suffix = 1;
    while used.contains(&name) {
        name = format!("{}.{:03}", base, suffix);
        suffix += 1;
    }
    used.insert(name.clone());
    name
}

/// Builds the skeleton for a skin's joint list. Returns the skeleton and the
/// joint names in skin order, which is the order `JOINTS_n` indices refer to.
fn process_skeleton(
    joints: &[Node],
    nodes: &[Node],
    parents: &[Option<usize>],
) -> anyhow::Result<(Skeleton, Vec<String>)> {
    let node_to_joint: HashMap<usize, usize> = joints
        .iter()
        .enumerate()
        .map(|(position, node)| (node.index(), position))
        .collect();

    let mut order = Vec::with_capacity(joints.len());
    for (position, node) in joints.iter().enumerate() {
        order.push((node_depth(node.index(), parents)?, position));
    }
    order.sort();

    let mut used = HashSet::new();
    let mut names: Vec<Option<String>> = vec![None; joints.len()];
    let mut skeleton = Skeleton::new();
    for (_, position) in order {
        let node = &joints[position];
        let mut transform = local_matrix(node);
        let mut parent_joint = None;
        let mut current = parents[node.index()];
        while let Some(parent) = current {
            if let Some(joint) = node_to_joint.get(&parent) {
                parent_joint = Some(*joint);
                break;
            }
            transform = local_matrix(&nodes[parent]) * transform;
            current = parents[parent];
        }

        let base = node
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Joint{}", node.index()));
        let name = unique_name(&mut used, &base);
        let parent_name = parent_joint.and_then(|joint| names[joint].as_deref());
        skeleton.add_joint(&name, parent_name, transform)?;
        names[position] = Some(name);
    }

    let names = names.into_iter().flatten().collect();
    Ok((skeleton, names))
}

/// Reads every primitive of `mesh` into one vertex list. Joint indices of
/// `JOINTS_n` map to the vertex group with the same position in `joint_names`.
fn process_skinned_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    joint_names: &[String],
) -> Mesh {
    let mut data = Mesh::new();
    for name in joint_names {
        data.add_vertex_group(name);
    }

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| {
            buffers
                .get(buffer.index())
                .map(|buffer_data| buffer_data.0.as_slice())
        });
        let count = reader
            .read_positions()
            .map(|positions| positions.count())
            .unwrap_or(0);
        let first = data.vertices.len();
        for _ in 0..count {
            data.add_vertex();
        }
        if joint_names.is_empty() {
            continue;
        }

        let mut set = 0;
        while let (Some(joints), Some(weights)) = (reader.read_joints(set), reader.read_weights(set)) {
            for (offset, (joints, weights)) in joints
                .into_u16()
                .zip(weights.into_f32())
                .take(count)
                .enumerate()
            {
                for (joint, weight) in joints.iter().zip(weights.iter()) {
                    let group = *joint as usize;
                    if group >= joint_names.len() {
                        log::warn!(
                            "Vertex {} references joint {} outside the skin.",
                            first + offset,
                            group
                        );
                        continue;
                    }
                    data.add_weight(first + offset, group, *weight);
                }
            }
            set += 1;
        }
    }
    data
}
