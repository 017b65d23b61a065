use glam::Mat4;

/// Edit-mode representation of a single bone.
#[derive(Clone, Debug)]
pub struct Joint {
    name: String,
    parent: Option<usize>,
    /// Rest transform relative to the parent joint, or armature space for roots.
    pub local_transform: Mat4,
    pub select: bool,
    pub select_head: bool,
    pub select_tail: bool,
}

impl Joint {
    pub(crate) fn new(name: &str, parent: Option<usize>, local_transform: Mat4) -> Self {
        Joint {
            name: name.to_string(),
            parent,
            local_transform,
            select: false,
            select_head: false,
            select_tail: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    pub fn is_selected(&self) -> bool {
        self.select
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.select = selected;
        self.select_head = selected;
        self.select_tail = selected;
    }
}
