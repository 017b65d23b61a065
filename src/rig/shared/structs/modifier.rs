use crate::rig::shared::types::ObjectKey;

#[derive(Clone, Debug, PartialEq)]
pub enum ModifierKind {
    /// Deforms the owning mesh with the referenced armature object.
    Armature { object: Option<ObjectKey> },
    Other(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    pub name: String,
    pub kind: ModifierKind,
}

impl Modifier {
    pub fn armature(name: &str, object: Option<ObjectKey>) -> Self {
        Modifier {
            name: name.to_string(),
            kind: ModifierKind::Armature { object },
        }
    }

    pub fn other(name: &str, kind: &str) -> Self {
        Modifier {
            name: name.to_string(),
            kind: ModifierKind::Other(kind.to_string()),
        }
    }

    pub fn targets(&self, armature: ObjectKey) -> bool {
        matches!(self.kind, ModifierKind::Armature { object: Some(target) } if target == armature)
    }
}
