use glam::Mat4;
use std::collections::HashMap;

use crate::rig::shared::errors::RigError;
use crate::rig::shared::structs::Joint;

/// Joint hierarchy of an armature.
///
/// Joints are stored in insertion order and a parent is always inserted before
/// its children, so every parent index is smaller than the index of the joint
/// referring to it. The hierarchy can therefore never contain a cycle.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    joints: Vec<Joint>,
    lookup: HashMap<String, usize>,
}

impl Skeleton {
    pub fn new() -> Self {
        Skeleton {
            joints: vec![],
            lookup: HashMap::new(),
        }
    }

    /// Builds a skeleton from `(name, parent)` pairs with identity rest transforms.
    pub fn from_hierarchy<'a, I>(entries: I) -> Result<Self, RigError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut skeleton = Skeleton::new();
        for (name, parent) in entries {
            skeleton.add_joint(name, parent, Mat4::IDENTITY)?;
        }
        Ok(skeleton)
    }

    pub fn add_joint(
        &mut self,
        name: &str,
        parent: Option<&str>,
        local_transform: Mat4,
    ) -> Result<usize, RigError> {
        if self.lookup.contains_key(name) {
            return Err(RigError::DuplicateJoint(name.to_string()));
        }
        let parent = match parent {
            Some(parent_name) => Some(
                self.index_of(parent_name)
                    .ok_or_else(|| RigError::MissingParent(parent_name.to_string()))?,
            ),
            None => None,
        };
        let index = self.joints.len();
        self.joints.push(Joint::new(name, parent, local_transform));
        self.lookup.insert(name.to_string(), index);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Joint> {
        self.joints.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Joint> {
        self.joints.iter_mut()
    }

    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&Joint> {
        self.index_of(name).map(|index| &self.joints[index])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Joint> {
        let index = self.index_of(name)?;
        self.joints.get_mut(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn joint_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.joints.iter().map(|joint| joint.name())
    }

    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.joints
            .iter()
            .enumerate()
            .filter(|(_, joint)| joint.parent().is_none())
            .map(|(index, _)| index)
    }

    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.joints
            .iter()
            .enumerate()
            .filter(move |(_, joint)| joint.parent() == Some(index))
            .map(|(child, _)| child)
    }

    /// Walks the parent chain of `index` upwards, excluding the joint itself.
    pub fn ancestors(&self, index: usize) -> Ancestors<'_> {
        Ancestors {
            skeleton: self,
            next: self.joints.get(index).and_then(|joint| joint.parent()),
        }
    }

    /// Rest transform of a joint in armature space.
    pub fn world_transform(&self, index: usize) -> Mat4 {
        let mut transform = match self.joints.get(index) {
            Some(joint) => joint.local_transform,
            None => return Mat4::IDENTITY,
        };
        for ancestor in self.ancestors(index) {
            transform = self.joints[ancestor].local_transform * transform;
        }
        transform
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.joints
            .iter()
            .filter(|joint| joint.is_selected())
            .map(|joint| joint.name().to_string())
            .collect()
    }

    /// Deletes every selected joint and returns how many were removed.
    ///
    /// Children of a deleted joint are attached to their nearest surviving
    /// ancestor (or become roots). Their local transforms absorb the deleted
    /// chain so that armature-space rest poses stay where they were.
    pub fn delete_selected(&mut self) -> usize {
        let keep: Vec<bool> = self.joints.iter().map(|joint| !joint.is_selected()).collect();
        if keep.iter().all(|k| *k) {
            return 0;
        }

        let mut new_indices = vec![None; self.joints.len()];
        let mut next = 0;
        for (index, kept) in keep.iter().enumerate() {
            if *kept {
                new_indices[index] = Some(next);
                next += 1;
            }
        }

        let mut survivors = Vec::with_capacity(next);
        for (index, joint) in self.joints.iter().enumerate() {
            if !keep[index] {
                continue;
            }
            let mut transform = joint.local_transform;
            let mut parent = joint.parent();
            while let Some(parent_index) = parent {
                if keep[parent_index] {
                    break;
                }
                let removed = &self.joints[parent_index];
                transform = removed.local_transform * transform;
                parent = removed.parent();
            }
            let mut survivor = joint.clone();
            survivor.set_parent(parent.and_then(|p| new_indices[p]));
            survivor.local_transform = transform;
            survivors.push(survivor);
        }

        let removed = self.joints.len() - survivors.len();
        self.joints = survivors;
        self.lookup = self
            .joints
            .iter()
            .enumerate()
            .map(|(index, joint)| (joint.name().to_string(), index))
            .collect();
        log::debug!("Deleted {} joints, {} remain.", removed, self.joints.len());
        removed
    }
}

pub struct Ancestors<'a> {
    skeleton: &'a Skeleton,
    next: Option<usize>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self
            .skeleton
            .joints
            .get(current)
            .and_then(|joint| joint.parent());
        Some(current)
    }
}
