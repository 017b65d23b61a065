#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum ObjectKind {
    Armature,
    Mesh,
    Empty,
}

impl ToString for ObjectKind {
    fn to_string(&self) -> String {
        match self {
            ObjectKind::Armature => "ARMATURE".to_string(),
            ObjectKind::Mesh => "MESH".to_string(),
            ObjectKind::Empty => "EMPTY".to_string(),
        }
    }
}
