use bmesh_topology::{Mesh, Vertex, VertexId};
use rustc_hash::FxHashMap;

/// Absorbing the content of another mesh.
pub trait MergeFrom {
    /// Copies `other`'s attribute registries, vertices, edges, and faces
    /// into `self`, leaving `other` untouched.
    ///
    /// Positions, scratch `id`s, and attribute values all come along; the
    /// handles of the copies are fresh and tracked through a side table, so
    /// the two meshes stay independent. Registry collisions follow
    /// [`Mesh::add_vertex_attribute`]: a definition `self` already has wins.
    /// # Examples
    /// ```
    /// use bmesh_operators::MergeFrom;
    /// use bmesh_topology::Mesh;
    ///
    /// let mut a = Mesh::new();
    /// let u0 = a.add_vertex((0.0, 0.0, 0.0));
    /// let u1 = a.add_vertex((1.0, 0.0, 0.0));
    /// a.add_edge(u0, u1);
    ///
    /// let mut b = Mesh::new();
    /// let w: Vec<_> = [(0.0, 1.0, 0.0), (1.0, 1.0, 0.0), (1.0, 1.0, 1.0)]
    ///     .into_iter()
    ///     .map(|p| b.add_vertex(p))
    ///     .collect();
    /// b.add_face(&w).unwrap();
    ///
    /// a.merge_from(&b);
    /// assert_eq!(a.vertex_count(), 5);
    /// assert_eq!(a.edge_count(), 4);
    /// assert_eq!(a.face_count(), 1);
    /// assert_eq!(b.vertex_count(), 3);
    /// ```
    fn merge_from(&mut self, other: &Mesh);
}

impl MergeFrom for Mesh {
    fn merge_from(&mut self, other: &Mesh) {
        for def in other.vertex_attributes() {
            self.add_vertex_attribute(def.clone());
        }
        for def in other.edge_attributes() {
            self.add_edge_attribute(def.clone());
        }
        for def in other.loop_attributes() {
            self.add_loop_attribute(def.clone());
        }
        for def in other.face_attributes() {
            self.add_face_attribute(def.clone());
        }

        let mut vertex_map: FxHashMap<VertexId, VertexId> = FxHashMap::default();
        for (v, vertex) in other.vertex_iter() {
            let mut copy = Vertex::new(vertex.position);
            copy.id = vertex.id;
            copy.attributes = vertex.attributes.clone();
            vertex_map.insert(v, self.insert_vertex(copy));
        }

        for (_, edge) in other.edge_iter() {
            let (a, b) = edge.ends();
            let new_edge = self.add_edge(vertex_map[&a], vertex_map[&b]);
            self[new_edge].id = edge.id;
            for (name, value) in &edge.attributes {
                self[new_edge].attributes.insert(name.clone(), value.clone());
            }
        }

        for (f, face) in other.face_iter() {
            let ring: Vec<VertexId> = other.face_vertices(f).map(|v| vertex_map[&v]).collect();
            let new_face = match self.add_face(&ring) {
                Some(new_face) => new_face,
                None => continue,
            };
            self[new_face].id = face.id;
            for (name, value) in &face.attributes {
                self[new_face].attributes.insert(name.clone(), value.clone());
            }
            // The new cycle is the old one rotated by one: both anchors are
            // the last corner handed to add_face, and `ring` starts at the
            // source anchor.
            let source_loops: Vec<_> = other.face_loops(f).collect();
            let new_loops: Vec<_> = self.face_loops(new_face).collect();
            let n = source_loops.len();
            for (i, &sl) in source_loops.iter().enumerate() {
                let nl = new_loops[(i + 1) % n];
                for (name, value) in &other[sl].attributes {
                    self[nl].attributes.insert(name.clone(), value.clone());
                }
            }
        }
    }
}
