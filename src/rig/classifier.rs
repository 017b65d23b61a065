use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::rig::shared::structs::{Classification, Mesh, Skeleton};
use crate::rig::shared::traits::SceneHost;
use crate::rig::shared::types::ObjectKey;

/// Joints whose lowercased names contain one of these words are always kept.
pub const KEEP_WORDS: [&str; 11] = [
    "root", "spine", "torso", "head", "neck", "face", "eye", "jaw", "beak", "pelvis", "hips",
];

static KEEP_WORDS_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = KEEP_WORDS.join("|");
    Regex::new(&pattern).expect("Failed to initialize regular expression.")
});

pub fn is_protected_name(name: &str) -> bool {
    KEEP_WORDS_REGEX.is_match(&name.to_lowercase())
}

/// Mesh objects with an armature modifier targeting `armature`.
pub fn find_bound_meshes<H: SceneHost + ?Sized>(host: &H, armature: ObjectKey) -> Vec<ObjectKey> {
    host.mesh_objects()
        .into_iter()
        .filter(|mesh| {
            host.modifiers(*mesh)
                .iter()
                .any(|modifier| modifier.targets(armature))
        })
        .collect()
}

/// Names of vertex groups that have at least one vertex with a positive weight
/// on any of `meshes`.
pub fn find_weighted_joints<'a, I>(meshes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Mesh>,
{
    let mut weighted = BTreeSet::new();
    for mesh in meshes {
        for name in mesh.weighted_group_names() {
            weighted.insert(name.to_string());
        }
    }
    weighted
}

/// Splits the joints of `skeleton` into essential and unused ones.
///
/// A joint is essential when a bound mesh weights it, when it is an ancestor
/// of such a joint, or when its name contains one of [`KEEP_WORDS`].
pub fn classify<'a, I>(skeleton: &Skeleton, meshes: I) -> Classification
where
    I: IntoIterator<Item = &'a Mesh>,
{
    let weighted = find_weighted_joints(meshes);
    let mut essential = BTreeSet::new();

    for name in weighted.iter() {
        let index = match skeleton.index_of(name) {
            Some(index) => index,
            None => {
                log::trace!("Vertex group '{}' has no matching joint.", name);
                continue;
            }
        };
        essential.insert(name.clone());
        for ancestor in skeleton.ancestors(index) {
            let ancestor = skeleton.joint(ancestor).map(|joint| joint.name());
            if let Some(ancestor) = ancestor {
                if !essential.insert(ancestor.to_string()) {
                    // The rest of the chain was added by an earlier walk.
                    break;
                }
            }
        }
    }

    for name in skeleton.joint_names() {
        if is_protected_name(name) {
            essential.insert(name.to_string());
        }
    }

    let unused = skeleton
        .joint_names()
        .filter(|name| !essential.contains(*name))
        .map(|name| name.to_string())
        .collect();

    Classification {
        weighted,
        essential,
        unused,
    }
}

/// Selects exactly the joints named in `unused` and returns how many were selected.
pub fn apply_selection(skeleton: &mut Skeleton, unused: &BTreeSet<String>) -> usize {
    let mut count = 0;
    for joint in skeleton.iter_mut() {
        let selected = unused.contains(joint.name());
        joint.set_selected(selected);
        if selected {
            count += 1;
        }
    }
    count
}
