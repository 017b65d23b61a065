use thiserror::Error;

use crate::rig::shared::enums::{ObjectKind, ObjectMode};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RigError {
    #[error("Active object must be an armature (got {kind:?} '{name}').")]
    InvalidTarget { name: String, kind: ObjectKind },

    #[error("There is no active object.")]
    NoActiveObject,

    #[error("Object no longer exists in the scene.")]
    MissingObject,

    #[error("A joint named '{0}' already exists in this skeleton.")]
    DuplicateJoint(String),

    #[error("Parent joint '{0}' does not exist in this skeleton.")]
    MissingParent(String),

    #[error("Cannot switch from {from:?} to {to:?}: {reason}")]
    ModeChange {
        from: ObjectMode,
        to: ObjectMode,
        reason: String,
    },

    #[error("Operation requires {expected:?} mode but the scene is in {actual:?} mode.")]
    WrongMode {
        expected: ObjectMode,
        actual: ObjectMode,
    },
}
