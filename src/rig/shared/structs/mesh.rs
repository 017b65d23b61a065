/// Named weight bucket on a mesh, conventionally named after the joint it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexGroup {
    pub index: usize,
    pub name: String,
}

/// Membership of a vertex in a vertex group.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexGroupElement {
    pub group: usize,
    pub weight: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub groups: Vec<VertexGroupElement>,
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertex_groups: Vec<VertexGroup>,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh {
            vertex_groups: vec![],
            vertices: vec![],
        }
    }

    /// Returns the index of the group called `name`, creating it if needed.
    pub fn add_vertex_group(&mut self, name: &str) -> usize {
        if let Some(group) = self.vertex_group(name) {
            return group.index;
        }
        let index = self.vertex_groups.len();
        self.vertex_groups.push(VertexGroup {
            index,
            name: name.to_string(),
        });
        index
    }

    pub fn vertex_group(&self, name: &str) -> Option<&VertexGroup> {
        self.vertex_groups.iter().find(|group| group.name == name)
    }

    pub fn add_vertex(&mut self) -> usize {
        self.vertices.push(Vertex::default());
        self.vertices.len() - 1
    }

    /// Records `weight` for `vertex` in `group`, replacing any previous value.
    /// Returns `false` when the vertex does not exist.
    pub fn assign(&mut self, vertex: usize, group: usize, weight: f32) -> bool {
        let vertex = match self.vertices.get_mut(vertex) {
            Some(v) => v,
            None => return false,
        };
        match vertex.groups.iter_mut().find(|element| element.group == group) {
            Some(element) => element.weight = weight,
            None => vertex.groups.push(VertexGroupElement { group, weight }),
        }
        true
    }

    /// Adds `weight` to the membership of `vertex` in `group`, creating it if needed.
    pub fn add_weight(&mut self, vertex: usize, group: usize, weight: f32) -> bool {
        let vertex = match self.vertices.get_mut(vertex) {
            Some(v) => v,
            None => return false,
        };
        match vertex.groups.iter_mut().find(|element| element.group == group) {
            Some(element) => element.weight += weight,
            None => vertex.groups.push(VertexGroupElement { group, weight }),
        }
        true
    }

    /// Whether any vertex carries a strictly positive weight for `group`.
    /// Stops at the first such vertex.
    pub fn group_has_weight(&self, group: usize) -> bool {
        self.vertices.iter().any(|vertex| {
            vertex
                .groups
                .iter()
                .any(|element| element.group == group && element.weight > 0.0)
        })
    }

    pub fn weighted_group_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertex_groups
            .iter()
            .filter(move |group| self.group_has_weight(group.index))
            .map(|group| group.name.as_str())
    }
}
