use crate::rig::shared::enums::{ObjectKind, ObjectMode};
use crate::rig::shared::errors::RigError;
use crate::rig::shared::structs::{Mesh, Modifier, Skeleton};
use crate::rig::shared::types::ObjectKey;

/// The editing application the operators act on.
///
/// Implementors own every object; operators only read meshes, write joint
/// selection and request joint deletion for the duration of one call.
pub trait SceneHost {
    fn active_object(&self) -> Option<ObjectKey>;
    fn object_name(&self, object: ObjectKey) -> Option<&str>;
    fn object_kind(&self, object: ObjectKey) -> Option<ObjectKind>;
    /// Every mesh object in the scene, in a stable order.
    fn mesh_objects(&self) -> Vec<ObjectKey>;
    fn modifiers(&self, object: ObjectKey) -> &[Modifier];
    fn mesh(&self, object: ObjectKey) -> Option<&Mesh>;
    fn skeleton(&self, object: ObjectKey) -> Option<&Skeleton>;
    fn skeleton_mut(&mut self, object: ObjectKey) -> Option<&mut Skeleton>;
    fn mode(&self) -> ObjectMode;
    fn set_mode(&mut self, mode: ObjectMode) -> Result<(), RigError>;
    /// Deletes the selected joints of `armature`, reparenting their children to
    /// the nearest surviving ancestor. Returns the number of joints removed.
    fn delete_selected_joints(&mut self, armature: ObjectKey) -> Result<usize, RigError>;
}
