use slotmap::new_key_type;

new_key_type! {
    /// Handle to an object owned by a scene.
    pub struct ObjectKey;
}
