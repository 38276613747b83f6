use crate::*;
use cgmath::EuclideanSpace;
use std::iter::FusedIterator;

impl Loop {
    /// Returns the vertex at this corner.
    #[inline(always)]
    pub fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the edge leaving this corner toward the next one.
    #[inline(always)]
    pub fn edge(&self) -> EdgeId { self.edge }

    /// Returns the face this corner belongs to.
    #[inline(always)]
    pub fn face(&self) -> FaceId { self.face }

    /// Returns the next corner of the face cycle, in polygon order.
    #[inline(always)]
    pub fn next(&self) -> LoopId { self.next }

    /// Returns the previous corner of the face cycle.
    #[inline(always)]
    pub fn prev(&self) -> LoopId { self.prev }

    /// Returns the next corner of the radial cycle around this corner's
    /// edge.
    #[inline(always)]
    pub fn radial_next(&self) -> LoopId { self.radial_next }

    /// Returns the previous corner of the radial cycle.
    #[inline(always)]
    pub fn radial_prev(&self) -> LoopId { self.radial_prev }
}

impl Face {
    /// Returns the anchor loop of the face cycle.
    ///
    /// Always `Some` for a face built by [`Mesh::add_face`]; the anchor is
    /// the corner of the last vertex passed to it.
    #[inline(always)]
    pub fn first_loop(&self) -> Option<LoopId> { self.first_loop }

    /// Returns the number of corners, cached at construction.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize { self.vertex_count }
}

impl Mesh {
    /// Adds a polygon over the given vertices, in order, and returns its
    /// handle; returns `None` for an empty slice.
    ///
    /// The bounding edges are looked up or created with [`Mesh::add_edge`],
    /// so neighboring faces share edges instead of duplicating them. The
    /// edge at index `i` connects `vertices[i]` to `vertices[(i + 1) % n]`.
    /// Two-vertex faces are legal: both corners then share the single edge.
    /// # Panics
    /// Panics if consecutive vertices coincide (a self-edge), which includes
    /// passing a single vertex.
    /// # Examples
    /// ```
    /// use bmesh_topology::Mesh;
    /// let mut mesh = Mesh::new();
    /// let v0 = mesh.add_vertex((-0.5, 0.0, -0.28867514));
    /// let v1 = mesh.add_vertex((0.5, 0.0, -0.28867514));
    /// let v2 = mesh.add_vertex((0.0, 0.0, 0.57735028));
    /// let f = mesh.add_face(&[v0, v1, v2]).unwrap();
    ///
    /// assert_eq!(mesh.edge_count(), 3);
    /// assert_eq!(mesh.loop_count(), 3);
    /// assert_eq!(mesh[f].vertex_count(), 3);
    ///
    /// // The cycle starts at the anchor, the corner of the last vertex.
    /// let ring: Vec<_> = mesh.face_vertices(f).collect();
    /// assert_eq!(ring, vec![v2, v0, v1]);
    ///
    /// assert!(mesh.add_face(&[]).is_none());
    /// ```
    pub fn add_face(&mut self, vertices: &[VertexId]) -> Option<FaceId> {
        if vertices.is_empty() {
            return None;
        }
        let n = vertices.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(self.add_edge(vertices[i], vertices[(i + 1) % n]));
        }
        let mut attributes = Attributes::default();
        attrib::ensure_attributes(&self.face_attributes, &mut attributes);
        let f = self.faces.insert(Face {
            id: 0,
            attributes,
            first_loop: None,
            vertex_count: n,
        });
        for i in 0..n {
            let mut attributes = Attributes::default();
            attrib::ensure_attributes(&self.loop_attributes, &mut attributes);
            let l = self.loops.insert_with_key(|key| Loop {
                attributes,
                vertex: vertices[i],
                edge: edges[i],
                face: f,
                next: key,
                prev: key,
                radial_next: key,
                radial_prev: key,
            });
            self.face_splice(f, l);
            self.radial_splice(edges[i], l);
        }
        Some(f)
    }

    /// Removes a face and all of its loops. The bounding edges and vertices
    /// stay.
    pub fn remove_face(&mut self, f: FaceId) {
        if let Some(start) = self.faces[f].first_loop {
            let mut l = start;
            loop {
                let next = self.loops[l].next;
                self.kill_loop(l);
                if next == start {
                    break;
                }
                l = next;
            }
        }
        self.faces.remove(f);
    }

    /// Returns an iterator over the face cycle of `f`, in polygon order,
    /// starting at the anchor loop.
    #[inline(always)]
    pub fn face_loops(&self, f: FaceId) -> FaceLoopIter<'_> {
        FaceLoopIter {
            mesh: self,
            start: self.faces[f].first_loop,
            next: self.faces[f].first_loop,
            remaining: self.faces[f].vertex_count,
        }
    }

    /// Returns an iterator over the corner vertices of `f`, in polygon
    /// order, starting at the anchor loop.
    #[inline(always)]
    pub fn face_vertices(&self, f: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_loops(f).map(move |l| self.loops[l].vertex)
    }

    /// Returns an iterator over the bounding edges of `f`, aligned with
    /// [`Mesh::face_vertices`]: the k-th edge connects the k-th corner
    /// vertex to the (k+1)-th.
    #[inline(always)]
    pub fn face_edges(&self, f: FaceId) -> impl Iterator<Item = EdgeId> + '_ {
        self.face_loops(f).map(move |l| self.loops[l].edge)
    }

    /// Returns the loop of `f` whose corner sits at `v`, or `None` if `v`
    /// is not a corner of `f`.
    #[inline(always)]
    pub fn loop_of(&self, f: FaceId, v: VertexId) -> Option<LoopId> {
        self.face_loops(f).find(|&l| self.loops[l].vertex == v)
    }

    /// Returns the arithmetic mean of the corner positions.
    pub fn face_center(&self, f: FaceId) -> Point3 {
        let mut sum = Vector3::new(0.0, 0.0, 0.0);
        let mut count = 0;
        for v in self.face_vertices(f) {
            sum += self.vertices[v].position.to_vec();
            count += 1;
        }
        Point3::from_vec(sum / count as f64)
    }

    /// Unsplices one loop from its radial cycle and frees it. The caller
    /// must already have taken the loop out of its face's bookkeeping; only
    /// [`Mesh::remove_face`]'s cycle walk calls this.
    fn kill_loop(&mut self, l: LoopId) {
        let edge = self.loops[l].edge;
        let radial_next = self.loops[l].radial_next;
        let radial_prev = self.loops[l].radial_prev;
        if radial_next == l {
            self.edges[edge].first_loop = None;
        } else {
            self.loops[radial_prev].radial_next = radial_next;
            self.loops[radial_next].radial_prev = radial_prev;
            if self.edges[edge].first_loop == Some(l) {
                self.edges[edge].first_loop = Some(radial_next);
            }
        }
        self.loops.remove(l);
    }

    /// Splices `l` into the face cycle right after the anchor, then
    /// re-anchors the face at `l`, so corners added in order form the
    /// polygon in order.
    fn face_splice(&mut self, f: FaceId, l: LoopId) {
        if let Some(head) = self.faces[f].first_loop {
            let after = self.loops[head].next;
            self.loops[l].prev = head;
            self.loops[l].next = after;
            self.loops[head].next = l;
            self.loops[after].prev = l;
        }
        self.faces[f].first_loop = Some(l);
    }

    /// Splices `l` into the radial cycle of `e` and re-anchors the edge at
    /// `l`. Radial order carries no meaning.
    fn radial_splice(&mut self, e: EdgeId, l: LoopId) {
        if let Some(head) = self.edges[e].first_loop {
            let after = self.loops[head].radial_next;
            self.loops[l].radial_prev = head;
            self.loops[l].radial_next = after;
            self.loops[head].radial_next = l;
            self.loops[after].radial_prev = l;
        }
        self.edges[e].first_loop = Some(l);
    }
}

/// Iterator over the face cycle of one face. See [`Mesh::face_loops`].
#[derive(Clone, Debug)]
pub struct FaceLoopIter<'a> {
    mesh: &'a Mesh,
    start: Option<LoopId>,
    next: Option<LoopId>,
    remaining: usize,
}

impl Iterator for FaceLoopIter<'_> {
    type Item = LoopId;

    fn next(&mut self) -> Option<LoopId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        let next = self.mesh.loops[current].next;
        if self.remaining == 0 {
            debug_assert!(
                Some(next) == self.start,
                "the face cycle does not close on its corner count",
            );
        }
        self.next = Some(next);
        Some(current)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for FaceLoopIter<'_> {
    #[inline(always)]
    fn len(&self) -> usize { self.remaining }
}

impl FusedIterator for FaceLoopIter<'_> {}
