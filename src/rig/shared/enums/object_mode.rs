/// Interaction mode of the scene.<br />
/// Joint selection and deletion are only available in `EditArmature`.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum ObjectMode {
    Object,
    EditArmature,
    Pose,
    EditMesh,
    WeightPaint,
}

impl Default for ObjectMode {
    fn default() -> Self {
        ObjectMode::Object
    }
}

impl ToString for ObjectMode {
    fn to_string(&self) -> String {
        match self {
            ObjectMode::Object => "OBJECT".to_string(),
            ObjectMode::EditArmature => "EDIT_ARMATURE".to_string(),
            ObjectMode::Pose => "POSE".to_string(),
            ObjectMode::EditMesh => "EDIT_MESH".to_string(),
            ObjectMode::WeightPaint => "PAINT_WEIGHT".to_string(),
        }
    }
}
