use crate::errors::Error;
use crate::*;
use rustc_hash::FxHashMap;
use std::ops::{Index, IndexMut};

impl Mesh {
    /// Creates the empty mesh.
    /// # Examples
    /// ```
    /// use bmesh_topology::Mesh;
    /// let mesh = Mesh::new();
    /// assert_eq!(mesh.vertex_count(), 0);
    /// assert_eq!(mesh.edge_count(), 0);
    /// ```
    #[inline(always)]
    pub fn new() -> Mesh { Mesh::default() }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Returns the number of edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the number of loops.
    #[inline(always)]
    pub fn loop_count(&self) -> usize { self.loops.len() }

    /// Returns the number of faces.
    #[inline(always)]
    pub fn face_count(&self) -> usize { self.faces.len() }

    /// Returns whether the handle addresses a live vertex of this mesh.
    #[inline(always)]
    pub fn contains_vertex(&self, v: VertexId) -> bool { self.vertices.contains_key(v) }

    /// Returns whether the handle addresses a live edge of this mesh.
    #[inline(always)]
    pub fn contains_edge(&self, e: EdgeId) -> bool { self.edges.contains_key(e) }

    /// Returns whether the handle addresses a live loop of this mesh.
    #[inline(always)]
    pub fn contains_loop(&self, l: LoopId) -> bool { self.loops.contains_key(l) }

    /// Returns whether the handle addresses a live face of this mesh.
    #[inline(always)]
    pub fn contains_face(&self, f: FaceId) -> bool { self.faces.contains_key(f) }

    /// Returns an iterator over all vertices, in arena order.
    ///
    /// Walks over the collections are undefined under concurrent mutation;
    /// snapshot the handles first when removing while traversing.
    #[inline(always)]
    pub fn vertex_iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter()
    }

    /// Returns an iterator over all edges, in arena order.
    #[inline(always)]
    pub fn edge_iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> { self.edges.iter() }

    /// Returns an iterator over all loops, in arena order.
    #[inline(always)]
    pub fn loop_iter(&self) -> impl Iterator<Item = (LoopId, &Loop)> { self.loops.iter() }

    /// Returns an iterator over all faces, in arena order.
    #[inline(always)]
    pub fn face_iter(&self) -> impl Iterator<Item = (FaceId, &Face)> { self.faces.iter() }

    /// Checks every structural invariant of the mesh: no self-edges, no
    /// dangling cross-references, disk, radial, and face cycles that close
    /// in exactly the expected number of steps, and successor/predecessor
    /// links that are mutual inverses.
    ///
    /// The cost is linear in the size of the mesh; this is a debugging aid,
    /// not something to run on the hot path.
    pub fn check_consistency(&self) -> Result<()> {
        let mut degree: FxHashMap<VertexId, usize> = FxHashMap::default();
        for (_, edge) in self.edges.iter() {
            let (a, b) = edge.ends();
            if a == b {
                return Err(Error::Inconsistent("an edge has identical endpoints"));
            }
            if !self.vertices.contains_key(a) || !self.vertices.contains_key(b) {
                return Err(Error::Inconsistent("an edge references a removed vertex"));
            }
            *degree.entry(a).or_insert(0) += 1;
            *degree.entry(b).or_insert(0) += 1;
        }
        for (v, vertex) in self.vertices.iter() {
            self.check_disk_cycle(v, vertex, degree.get(&v).copied().unwrap_or(0))?;
        }

        let mut radial: FxHashMap<EdgeId, usize> = FxHashMap::default();
        let mut corners: FxHashMap<FaceId, usize> = FxHashMap::default();
        for (l, lp) in self.loops.iter() {
            if !self.vertices.contains_key(lp.vertex) {
                return Err(Error::Inconsistent("a loop references a removed vertex"));
            }
            if !self.edges.contains_key(lp.edge) {
                return Err(Error::Inconsistent("a loop references a removed edge"));
            }
            if !self.faces.contains_key(lp.face) {
                return Err(Error::Inconsistent("a loop references a removed face"));
            }
            if !self.edges[lp.edge].contains_vertex(lp.vertex) {
                return Err(Error::Inconsistent("a loop's edge does not touch its vertex"));
            }
            for (next, prev) in [(lp.next, lp.prev), (lp.radial_next, lp.radial_prev)] {
                if !self.loops.contains_key(next) || !self.loops.contains_key(prev) {
                    return Err(Error::Inconsistent("a loop links to a removed loop"));
                }
            }
            if self.loops[lp.next].prev != l || self.loops[lp.prev].next != l {
                return Err(Error::Inconsistent("face-cycle links are not mutual inverses"));
            }
            if self.loops[lp.radial_next].radial_prev != l
                || self.loops[lp.radial_prev].radial_next != l
            {
                return Err(Error::Inconsistent("radial links are not mutual inverses"));
            }
            *radial.entry(lp.edge).or_insert(0) += 1;
            *corners.entry(lp.face).or_insert(0) += 1;
        }
        for (e, edge) in self.edges.iter() {
            self.check_radial_cycle(e, edge, radial.get(&e).copied().unwrap_or(0))?;
        }
        for (f, face) in self.faces.iter() {
            self.check_face_cycle(f, face, corners.get(&f).copied().unwrap_or(0))?;
        }
        Ok(())
    }

    fn check_disk_cycle(&self, v: VertexId, vertex: &Vertex, degree: usize) -> Result<()> {
        let start = match vertex.edge {
            None if degree == 0 => return Ok(()),
            None => {
                return Err(Error::Inconsistent(
                    "a vertex with incident edges has no disk anchor",
                ))
            }
            Some(start) => start,
        };
        let mut e = start;
        let mut steps = 0;
        loop {
            if !self.edges.contains_key(e) {
                return Err(Error::Inconsistent("a disk cycle runs over a removed edge"));
            }
            let edge = &self.edges[e];
            if !edge.contains_vertex(v) {
                return Err(Error::Inconsistent("a disk cycle left its vertex"));
            }
            let next = edge.disk_next(v);
            if !self.edges.contains_key(next) || !self.edges[next].contains_vertex(v) {
                return Err(Error::Inconsistent("a disk cycle runs over a foreign edge"));
            }
            if self.edges[next].disk_prev(v) != e {
                return Err(Error::Inconsistent("disk links are not mutual inverses"));
            }
            steps += 1;
            if steps > degree {
                return Err(Error::Inconsistent(
                    "a disk cycle does not close within the vertex degree",
                ));
            }
            e = next;
            if e == start {
                break;
            }
        }
        if steps != degree {
            return Err(Error::Inconsistent("a disk cycle misses incident edges"));
        }
        Ok(())
    }

    fn check_radial_cycle(&self, e: EdgeId, edge: &Edge, uses: usize) -> Result<()> {
        let start = match edge.first_loop {
            None if uses == 0 => return Ok(()),
            None => {
                return Err(Error::Inconsistent(
                    "an edge used by faces has no radial anchor",
                ))
            }
            Some(start) => start,
        };
        let mut l = start;
        let mut steps = 0;
        loop {
            if !self.loops.contains_key(l) {
                return Err(Error::Inconsistent("a radial cycle runs over a removed loop"));
            }
            if self.loops[l].edge != e {
                return Err(Error::Inconsistent("a radial cycle left its edge"));
            }
            steps += 1;
            if steps > uses {
                return Err(Error::Inconsistent(
                    "a radial cycle does not close within the edge's face uses",
                ));
            }
            l = self.loops[l].radial_next;
            if l == start {
                break;
            }
        }
        if steps != uses {
            return Err(Error::Inconsistent("a radial cycle misses loops of its edge"));
        }
        Ok(())
    }

    fn check_face_cycle(&self, f: FaceId, face: &Face, corners: usize) -> Result<()> {
        let start = match face.first_loop {
            None => return Err(Error::Inconsistent("a face has no loops")),
            Some(start) => start,
        };
        if corners != face.vertex_count {
            return Err(Error::Inconsistent(
                "a face's corner count disagrees with its loops",
            ));
        }
        let mut l = start;
        let mut steps = 0;
        loop {
            if !self.loops.contains_key(l) {
                return Err(Error::Inconsistent("a face cycle runs over a removed loop"));
            }
            if self.loops[l].face != f {
                return Err(Error::Inconsistent("a face cycle left its face"));
            }
            steps += 1;
            if steps > face.vertex_count {
                return Err(Error::Inconsistent(
                    "a face cycle does not close within its corner count",
                ));
            }
            l = self.loops[l].next;
            if l == start {
                break;
            }
        }
        if steps != face.vertex_count {
            return Err(Error::Inconsistent("a face cycle is shorter than its corner count"));
        }
        Ok(())
    }
}

impl Index<VertexId> for Mesh {
    type Output = Vertex;
    #[inline(always)]
    fn index(&self, v: VertexId) -> &Vertex { &self.vertices[v] }
}

impl IndexMut<VertexId> for Mesh {
    #[inline(always)]
    fn index_mut(&mut self, v: VertexId) -> &mut Vertex { &mut self.vertices[v] }
}

impl Index<EdgeId> for Mesh {
    type Output = Edge;
    #[inline(always)]
    fn index(&self, e: EdgeId) -> &Edge { &self.edges[e] }
}

impl IndexMut<EdgeId> for Mesh {
    #[inline(always)]
    fn index_mut(&mut self, e: EdgeId) -> &mut Edge { &mut self.edges[e] }
}

impl Index<LoopId> for Mesh {
    type Output = Loop;
    #[inline(always)]
    fn index(&self, l: LoopId) -> &Loop { &self.loops[l] }
}

impl IndexMut<LoopId> for Mesh {
    #[inline(always)]
    fn index_mut(&mut self, l: LoopId) -> &mut Loop { &mut self.loops[l] }
}

impl Index<FaceId> for Mesh {
    type Output = Face;
    #[inline(always)]
    fn index(&self, f: FaceId) -> &Face { &self.faces[f] }
}

impl IndexMut<FaceId> for Mesh {
    #[inline(always)]
    fn index_mut(&mut self, f: FaceId) -> &mut Face { &mut self.faces[f] }
}
