use slotmap::SlotMap;

use crate::rig::shared::enums::{ObjectKind, ObjectMode};
use crate::rig::shared::errors::RigError;
use crate::rig::shared::structs::{Mesh, Modifier, ObjectData, SceneObject, Skeleton};
use crate::rig::shared::traits::SceneHost;
use crate::rig::shared::types::ObjectKey;

/// In-memory scene graph that owns armatures and meshes.
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
    order: Vec<ObjectKey>,
    active: Option<ObjectKey>,
    mode: ObjectMode,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            objects: SlotMap::with_key(),
            order: vec![],
            active: None,
            mode: ObjectMode::Object,
        }
    }

    pub fn add_object(&mut self, object: SceneObject) -> ObjectKey {
        let key = self.objects.insert(object);
        self.order.push(key);
        key
    }

    pub fn add_armature(&mut self, name: &str, skeleton: Skeleton) -> ObjectKey {
        self.add_object(SceneObject::new(name, ObjectData::Armature(skeleton)))
    }

    /// Adds a mesh deformed by `armature` through an armature modifier.
    pub fn add_bound_mesh(&mut self, name: &str, mesh: Mesh, armature: ObjectKey) -> ObjectKey {
        let mut object = SceneObject::new(name, ObjectData::Mesh(mesh));
        object
            .modifiers
            .push(Modifier::armature("Armature", Some(armature)));
        self.add_object(object)
    }

    pub fn find_object(&self, name: &str) -> Option<ObjectKey> {
        self.order
            .iter()
            .copied()
            .find(|key| self.objects[*key].name == name)
    }

    pub fn armatures(&self) -> Vec<ObjectKey> {
        self.keys_of_kind(ObjectKind::Armature)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Makes `key` the active object. Only allowed in object mode, as the
    /// active object defines what the other modes edit.
    pub fn set_active(&mut self, key: Option<ObjectKey>) -> Result<(), RigError> {
        if self.mode != ObjectMode::Object {
            return Err(RigError::WrongMode {
                expected: ObjectMode::Object,
                actual: self.mode,
            });
        }
        if let Some(key) = key {
            if !self.objects.contains_key(key) {
                return Err(RigError::MissingObject);
            }
        }
        self.active = key;
        Ok(())
    }

    fn keys_of_kind(&self, kind: ObjectKind) -> Vec<ObjectKey> {
        self.order
            .iter()
            .copied()
            .filter(|key| self.objects[*key].kind() == kind)
            .collect()
    }

    fn required_kind(mode: ObjectMode) -> Option<ObjectKind> {
        match mode {
            ObjectMode::Object => None,
            ObjectMode::EditArmature | ObjectMode::Pose => Some(ObjectKind::Armature),
            ObjectMode::EditMesh | ObjectMode::WeightPaint => Some(ObjectKind::Mesh),
        }
    }
}

impl SceneHost for Scene {
    fn active_object(&self) -> Option<ObjectKey> {
        self.active
    }

    fn object_name(&self, object: ObjectKey) -> Option<&str> {
        self.objects.get(object).map(|o| o.name.as_str())
    }

    fn object_kind(&self, object: ObjectKey) -> Option<ObjectKind> {
        self.objects.get(object).map(|o| o.kind())
    }

    fn mesh_objects(&self) -> Vec<ObjectKey> {
        self.keys_of_kind(ObjectKind::Mesh)
    }

    fn modifiers(&self, object: ObjectKey) -> &[Modifier] {
        self.objects
            .get(object)
            .map(|o| o.modifiers.as_slice())
            .unwrap_or(&[])
    }

    fn mesh(&self, object: ObjectKey) -> Option<&Mesh> {
        match self.objects.get(object).map(|o| &o.data) {
            Some(ObjectData::Mesh(mesh)) => Some(mesh),
            _ => None,
        }
    }

    fn skeleton(&self, object: ObjectKey) -> Option<&Skeleton> {
        match self.objects.get(object).map(|o| &o.data) {
            Some(ObjectData::Armature(skeleton)) => Some(skeleton),
            _ => None,
        }
    }

    fn skeleton_mut(&mut self, object: ObjectKey) -> Option<&mut Skeleton> {
        match self.objects.get_mut(object).map(|o| &mut o.data) {
            Some(ObjectData::Armature(skeleton)) => Some(skeleton),
            _ => None,
        }
    }

    fn mode(&self) -> ObjectMode {
        self.mode
    }

    fn set_mode(&mut self, mode: ObjectMode) -> Result<(), RigError> {
        if let Some(required) = Self::required_kind(mode) {
            let active = self.active.and_then(|key| self.objects.get(key));
            match active {
                Some(object) if object.kind() == required => (),
                Some(object) => {
                    return Err(RigError::ModeChange {
                        from: self.mode,
                        to: mode,
                        reason: format!(
                            "active object '{}' is not of type {}",
                            object.name,
                            required.to_string()
                        ),
                    })
                }
                None => {
                    return Err(RigError::ModeChange {
                        from: self.mode,
                        to: mode,
                        reason: "no active object".to_string(),
                    })
                }
            }
        }
        self.mode = mode;
        Ok(())
    }

    fn delete_selected_joints(&mut self, armature: ObjectKey) -> Result<usize, RigError> {
        if self.mode != ObjectMode::EditArmature {
            return Err(RigError::WrongMode {
                expected: ObjectMode::EditArmature,
                actual: self.mode,
            });
        }
        let skeleton = self
            .skeleton_mut(armature)
            .ok_or(RigError::MissingObject)?;
        Ok(skeleton.delete_selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_mode_requires_an_active_armature() {
        let mut scene = Scene::new();
        assert!(scene.set_mode(ObjectMode::EditArmature).is_err());

        let mesh = scene.add_object(SceneObject::new("Body", ObjectData::Mesh(Mesh::new())));
        scene.set_active(Some(mesh)).unwrap();
        assert!(scene.set_mode(ObjectMode::EditArmature).is_err());
        assert_eq!(scene.mode(), ObjectMode::Object);

        let armature = scene.add_armature("Rig", Skeleton::new());
        scene.set_active(Some(armature)).unwrap();
        scene.set_mode(ObjectMode::EditArmature).unwrap();
        assert_eq!(scene.mode(), ObjectMode::EditArmature);
        assert!(scene.set_active(Some(mesh)).is_err());
    }

    #[test]
    fn deletion_requires_edit_mode() {
        let mut scene = Scene::new();
        let skeleton = Skeleton::from_hierarchy(vec![("root", None), ("tail", Some("root"))]).unwrap();
        let armature = scene.add_armature("Rig", skeleton);
        scene.set_active(Some(armature)).unwrap();
        scene
            .skeleton_mut(armature)
            .unwrap()
            .get_mut("tail")
            .unwrap()
            .set_selected(true);
        assert_eq!(
            scene.delete_selected_joints(armature),
            Err(RigError::WrongMode {
                expected: ObjectMode::EditArmature,
                actual: ObjectMode::Object,
            })
        );
        scene.set_mode(ObjectMode::EditArmature).unwrap();
        assert_eq!(scene.delete_selected_joints(armature), Ok(1));
        assert_eq!(scene.skeleton(armature).unwrap().len(), 1);
    }

    #[test]
    fn mesh_objects_keep_insertion_order() {
        let mut scene = Scene::new();
        let armature = scene.add_armature("Rig", Skeleton::new());
        let a = scene.add_bound_mesh("A", Mesh::new(), armature);
        let b = scene.add_object(SceneObject::new("B", ObjectData::Mesh(Mesh::new())));
        assert_eq!(scene.mesh_objects(), vec![a, b]);
        assert_eq!(scene.find_object("B"), Some(b));
        assert!(scene.modifiers(a)[0].targets(armature));
        assert!(scene.modifiers(b).is_empty());
    }
}
