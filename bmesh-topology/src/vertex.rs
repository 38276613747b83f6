use crate::*;
use rustc_hash::FxHashSet;
use std::iter::FusedIterator;

impl Vertex {
    /// Creates a detached vertex at the given position.
    ///
    /// The vertex belongs to no mesh until it is handed to
    /// [`Mesh::insert_vertex`]. Attribute values may be pre-set on it before
    /// insertion; registered names it lacks are filled in at insertion.
    /// # Examples
    /// ```
    /// use bmesh_topology::{Mesh, Vertex};
    /// let mut mesh = Mesh::new();
    /// let mut vertex = Vertex::new((1.0, 2.0, 3.0));
    /// vertex.id = 42;
    /// let v = mesh.insert_vertex(vertex);
    /// assert_eq!(mesh[v].id, 42);
    /// ```
    #[inline(always)]
    pub fn new(position: impl Into<Point3>) -> Vertex {
        Vertex {
            position: position.into(),
            id: 0,
            attributes: Attributes::default(),
            edge: None,
        }
    }

    /// Returns one edge of this vertex's disk cycle, or `None` if the vertex
    /// is isolated.
    #[inline(always)]
    pub fn edge(&self) -> Option<EdgeId> { self.edge }
}

impl Mesh {
    /// Adds a vertex at the given position and returns its handle.
    ///
    /// Every registered vertex attribute is installed with a deep copy of
    /// its default.
    /// # Examples
    /// ```
    /// use bmesh_topology::{Mesh, Point3};
    /// let mut mesh = Mesh::new();
    /// let v = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
    /// assert_eq!(mesh.vertex_count(), 1);
    /// assert_eq!(mesh[v].position.y, 1.0);
    /// ```
    #[inline(always)]
    pub fn add_vertex(&mut self, position: impl Into<Point3>) -> VertexId {
        self.insert_vertex(Vertex::new(position))
    }

    /// Inserts a pre-built vertex and returns its handle.
    ///
    /// The vertex's attribute map is brought in line with the registry:
    /// registered names it lacks receive a deep copy of the default, and any
    /// value whose type or dimension contradicts its registered definition
    /// is reset to the default with a warning on the logging channel.
    pub fn insert_vertex(&mut self, mut vertex: Vertex) -> VertexId {
        vertex.edge = None;
        attrib::ensure_attributes(&self.vertex_attributes, &mut vertex.attributes);
        self.vertices.insert(vertex)
    }

    /// Removes a vertex, cascading over everything incident to it: each edge
    /// of its disk cycle is removed, which in turn removes every face using
    /// one of those edges.
    /// # Examples
    /// ```
    /// use bmesh_topology::Mesh;
    /// let mut mesh = Mesh::new();
    /// let v0 = mesh.add_vertex((0.0, 0.0, 0.0));
    /// let v1 = mesh.add_vertex((1.0, 0.0, 0.0));
    /// let v2 = mesh.add_vertex((0.0, 0.0, 1.0));
    /// mesh.add_face(&[v0, v1, v2]).unwrap();
    ///
    /// mesh.remove_vertex(v0);
    /// // The face and both edges touching v0 are gone; the far edge stays.
    /// assert_eq!(mesh.vertex_count(), 2);
    /// assert_eq!(mesh.edge_count(), 1);
    /// assert_eq!(mesh.face_count(), 0);
    /// ```
    pub fn remove_vertex(&mut self, v: VertexId) {
        while let Some(e) = self.vertices[v].edge {
            self.remove_edge(e);
        }
        self.vertices.remove(v);
    }

    /// Returns an iterator over the disk cycle of `v`: every edge having `v`
    /// as an endpoint. Empty if the vertex is isolated.
    ///
    /// The walk order is the disk-cycle order, starting at `v.edge()`.
    #[inline(always)]
    pub fn vertex_edges(&self, v: VertexId) -> VertexEdgeIter<'_> {
        let start = self.vertices[v].edge;
        VertexEdgeIter {
            mesh: self,
            vertex: v,
            start,
            next: start,
            steps: 0,
        }
    }

    /// Returns every face touching `v`, without duplicates, in discovery
    /// order of the disk and radial walks.
    pub fn vertex_faces(&self, v: VertexId) -> Vec<FaceId> {
        let mut seen = FxHashSet::default();
        let mut faces = Vec::new();
        for e in self.vertex_edges(v) {
            for l in self.edge_loops(e) {
                let f = self.loops[l].face;
                if seen.insert(f) {
                    faces.push(f);
                }
            }
        }
        faces
    }
}

/// Iterator over the disk cycle of one vertex. See [`Mesh::vertex_edges`].
#[derive(Clone, Debug)]
pub struct VertexEdgeIter<'a> {
    mesh: &'a Mesh,
    vertex: VertexId,
    start: Option<EdgeId>,
    next: Option<EdgeId>,
    steps: usize,
}

impl Iterator for VertexEdgeIter<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let current = self.next?;
        assert!(
            self.steps < self.mesh.edges.len(),
            "the disk cycle of {:?} does not close",
            self.vertex,
        );
        self.steps += 1;
        let next = self.mesh.edges[current].disk_next(self.vertex);
        self.next = if Some(next) == self.start { None } else { Some(next) };
        Some(current)
    }
}

impl FusedIterator for VertexEdgeIter<'_> {}
