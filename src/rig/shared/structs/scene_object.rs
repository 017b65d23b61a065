use crate::rig::shared::enums::ObjectKind;
use crate::rig::shared::structs::{Mesh, Modifier, Skeleton};

#[derive(Clone, Debug)]
pub enum ObjectData {
    Armature(Skeleton),
    Mesh(Mesh),
    Empty,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub data: ObjectData,
    pub modifiers: Vec<Modifier>,
}

impl SceneObject {
    pub fn new(name: &str, data: ObjectData) -> Self {
        SceneObject {
            name: name.to_string(),
            data,
            modifiers: vec![],
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self.data {
            ObjectData::Armature(_) => ObjectKind::Armature,
            ObjectData::Mesh(_) => ObjectKind::Mesh,
            ObjectData::Empty => ObjectKind::Empty,
        }
    }
}
