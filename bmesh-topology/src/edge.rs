use crate::errors::Error;
use crate::*;
use cgmath::EuclideanSpace;
use std::iter::FusedIterator;

impl Edge {
    /// Returns the two endpoints, in the order they were passed to
    /// [`Mesh::add_edge`].
    #[inline(always)]
    pub fn ends(&self) -> (VertexId, VertexId) { (self.links[0].vertex, self.links[1].vertex) }

    /// Returns whether `v` is an endpoint of this edge.
    #[inline(always)]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.links[0].vertex == v || self.links[1].vertex == v
    }

    /// Returns the endpoint that is not `v`.
    /// # Panics
    /// Panics if `v` is not an endpoint of this edge.
    #[inline(always)]
    pub fn other_vertex(&self, v: VertexId) -> VertexId {
        let (v1, v2) = self.ends();
        if v == v1 {
            v2
        } else {
            assert!(v == v2, "{v:?} is not an endpoint of this edge");
            v1
        }
    }

    /// Returns the successor of this edge in the disk cycle of `v`.
    ///
    /// An edge sits in two disk cycles at once, one per endpoint, so the
    /// probing vertex selects which cycle to follow.
    /// # Panics
    /// Panics if `v` is not an endpoint of this edge.
    #[inline(always)]
    pub fn disk_next(&self, v: VertexId) -> EdgeId { self.link(v).next }

    /// Returns the predecessor of this edge in the disk cycle of `v`.
    /// # Panics
    /// Panics if `v` is not an endpoint of this edge.
    #[inline(always)]
    pub fn disk_prev(&self, v: VertexId) -> EdgeId { self.link(v).prev }

    /// Returns one loop of this edge's radial cycle, or `None` for a
    /// wireframe edge used by no face.
    #[inline(always)]
    pub fn first_loop(&self) -> Option<LoopId> { self.first_loop }

    pub(crate) fn link(&self, v: VertexId) -> &DiskLink {
        if self.links[0].vertex == v {
            &self.links[0]
        } else {
            assert!(self.links[1].vertex == v, "{v:?} is not an endpoint of this edge");
            &self.links[1]
        }
    }

    pub(crate) fn link_mut(&mut self, v: VertexId) -> &mut DiskLink {
        if self.links[0].vertex == v {
            &mut self.links[0]
        } else {
            assert!(self.links[1].vertex == v, "{v:?} is not an endpoint of this edge");
            &mut self.links[1]
        }
    }
}

impl Mesh {
    /// Looks up an edge connecting `a` and `b`, or `None` if they are not
    /// connected.
    ///
    /// Both disk cycles are walked in lockstep and the search stops as soon
    /// as either walk closes, which bounds the work by twice the smaller of
    /// the two vertex degrees.
    /// # Panics
    /// Panics if `a == b`.
    /// # Examples
    /// ```
    /// use bmesh_topology::Mesh;
    /// let mut mesh = Mesh::new();
    /// let a = mesh.add_vertex((0.0, 0.0, 0.0));
    /// let b = mesh.add_vertex((1.0, 0.0, 0.0));
    /// let c = mesh.add_vertex((2.0, 0.0, 0.0));
    /// let e = mesh.add_edge(a, b);
    /// assert_eq!(mesh.find_edge(a, b), Some(e));
    /// assert_eq!(mesh.find_edge(b, a), Some(e));
    /// assert_eq!(mesh.find_edge(a, c), None);
    /// ```
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        assert!(a != b, "find_edge requires two distinct vertices");
        let start_a = self.vertices[a].edge?;
        let start_b = self.vertices[b].edge?;
        let (mut ea, mut eb) = (start_a, start_b);
        loop {
            if self.edges[ea].contains_vertex(b) {
                return Some(ea);
            }
            if self.edges[eb].contains_vertex(a) {
                return Some(eb);
            }
            ea = self.edges[ea].disk_next(a);
            eb = self.edges[eb].disk_next(b);
            if ea == start_a || eb == start_b {
                return None;
            }
        }
    }

    /// Registers an edge between `a` and `b` and returns its handle.
    /// # Failures
    /// If `a == b`, then returns `Error::SameVertex`.
    pub fn try_add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId> {
        if a == b {
            return Err(Error::SameVertex);
        }
        if let Some(existing) = self.find_edge(a, b) {
            return Ok(existing);
        }
        let mut attributes = Attributes::default();
        attrib::ensure_attributes(&self.edge_attributes, &mut attributes);
        let e = self.edges.insert_with_key(|key| Edge {
            id: 0,
            attributes,
            links: [
                DiskLink { vertex: a, next: key, prev: key },
                DiskLink { vertex: b, next: key, prev: key },
            ],
            first_loop: None,
        });
        self.disk_splice(e, a);
        self.disk_splice(e, b);
        Ok(e)
    }

    /// Registers an edge between `a` and `b` and returns its handle.
    ///
    /// Adding an edge that already exists returns the existing handle; at
    /// most one edge per vertex pair is ever registered this way.
    /// # Panics
    /// The condition `a == b` is not allowed.
    /// # Examples
    /// ```
    /// use bmesh_topology::Mesh;
    /// let mut mesh = Mesh::new();
    /// let a = mesh.add_vertex((0.0, 0.0, 0.0));
    /// let b = mesh.add_vertex((0.0, 0.0, 1.0));
    /// let e = mesh.add_edge(a, b);
    /// // idempotent, in either endpoint order
    /// assert_eq!(mesh.add_edge(a, b), e);
    /// assert_eq!(mesh.add_edge(b, a), e);
    /// assert_eq!(mesh.edge_count(), 1);
    /// ```
    #[inline(always)]
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        self.try_add_edge(a, b).remove_try()
    }

    /// Removes an edge, cascading over every face that uses it, and patches
    /// both endpoints' disk cycles. An endpoint left without edges becomes
    /// isolated.
    /// # Examples
    /// ```
    /// use bmesh_topology::Mesh;
    /// let mut mesh = Mesh::new();
    /// let v: Vec<_> = [
    ///     (-1.0, 0.0, -1.0),
    ///     (-1.0, 0.0, 1.0),
    ///     (1.0, 0.0, 1.0),
    ///     (1.0, 0.0, -1.0),
    /// ]
    /// .into_iter()
    /// .map(|p| mesh.add_vertex(p))
    /// .collect();
    /// mesh.add_face(&[v[0], v[1], v[2]]).unwrap();
    /// mesh.add_face(&[v[2], v[1], v[3]]).unwrap();
    ///
    /// let shared = mesh.find_edge(v[1], v[2]).unwrap();
    /// mesh.remove_edge(shared);
    /// // Both faces used the shared edge, so both are gone.
    /// assert_eq!(mesh.face_count(), 0);
    /// assert_eq!(mesh.loop_count(), 0);
    /// assert_eq!(mesh.edge_count(), 4);
    /// ```
    pub fn remove_edge(&mut self, e: EdgeId) {
        while let Some(l) = self.edges[e].first_loop {
            let f = self.loops[l].face;
            self.remove_face(f);
        }
        for slot in 0..2 {
            let DiskLink { vertex, next, prev } = self.edges[e].links[slot];
            if self.vertices[vertex].edge == Some(e) {
                self.vertices[vertex].edge = if next == e { None } else { Some(next) };
            }
            self.edges[prev].link_mut(vertex).next = next;
            self.edges[next].link_mut(vertex).prev = prev;
        }
        self.edges.remove(e);
    }

    /// Returns an iterator over the radial cycle of `e`: one loop per face
    /// corner using the edge. Empty for a wireframe edge.
    #[inline(always)]
    pub fn edge_loops(&self, e: EdgeId) -> RadialLoopIter<'_> {
        let start = self.edges[e].first_loop;
        RadialLoopIter {
            mesh: self,
            edge: e,
            start,
            next: start,
            steps: 0,
        }
    }

    /// Returns an iterator over the faces using `e`, one per radial loop.
    ///
    /// A face is repeated if it uses the edge for several of its corners,
    /// which only degenerate polygons do.
    #[inline(always)]
    pub fn edge_faces(&self, e: EdgeId) -> impl Iterator<Item = FaceId> + '_ {
        self.edge_loops(e).map(move |l| self.loops[l].face)
    }

    /// Returns the midpoint of the two endpoint positions.
    #[inline(always)]
    pub fn edge_center(&self, e: EdgeId) -> Point3 {
        let (a, b) = self.edges[e].ends();
        self.vertices[a].position.midpoint(self.vertices[b].position)
    }

    /// Splices `e` into the disk cycle of its endpoint `v`.
    ///
    /// If the cycle is empty the edge becomes a singleton and the vertex
    /// anchor is set; otherwise the edge slots in right after the anchor,
    /// which stays where it is.
    fn disk_splice(&mut self, e: EdgeId, v: VertexId) {
        match self.vertices[v].edge {
            None => self.vertices[v].edge = Some(e),
            Some(head) => {
                let after = self.edges[head].disk_next(v);
                {
                    let link = self.edges[e].link_mut(v);
                    link.prev = head;
                    link.next = after;
                }
                self.edges[head].link_mut(v).next = e;
                self.edges[after].link_mut(v).prev = e;
            }
        }
    }
}

/// Iterator over the radial cycle of one edge. See [`Mesh::edge_loops`].
#[derive(Clone, Debug)]
pub struct RadialLoopIter<'a> {
    mesh: &'a Mesh,
    edge: EdgeId,
    start: Option<LoopId>,
    next: Option<LoopId>,
    steps: usize,
}

impl Iterator for RadialLoopIter<'_> {
    type Item = LoopId;

    fn next(&mut self) -> Option<LoopId> {
        let current = self.next?;
        assert!(
            self.steps < self.mesh.loops.len(),
            "the radial cycle of {:?} does not close",
            self.edge,
        );
        self.steps += 1;
        let next = self.mesh.loops[current].radial_next;
        self.next = if Some(next) == self.start { None } else { Some(next) };
        Some(current)
    }
}

impl FusedIterator for RadialLoopIter<'_> {}
