use crate::AttributeInterpolate;
use bmesh_topology::{EdgeId, FaceId, Mesh, VertexId};

/// Global subdivision.
pub trait Subdivide {
    /// Splits every face into one quad per corner.
    ///
    /// Each edge gains a midpoint vertex (attributes interpolated between
    /// the endpoints) and each face a centroid vertex (attributes averaged
    /// over its corners). Every corner then spawns the quad
    /// `(corner, outgoing midpoint, centroid, incoming midpoint)`, and the
    /// original edges are removed, which cascades the original faces away.
    ///
    /// The scratch `id` of the original edges is overwritten; it serves as
    /// the edge-to-midpoint index during the pass. Wireframe edges are
    /// split like any other but leave their midpoint isolated.
    fn subdivide(&mut self) -> &mut Self;
}

impl Subdivide for Mesh {
    fn subdivide(&mut self) -> &mut Self {
        let original_edges: Vec<EdgeId> = self.edge_iter().map(|(e, _)| e).collect();
        let mut midpoints: Vec<VertexId> = Vec::with_capacity(original_edges.len());
        for (index, &e) in original_edges.iter().enumerate() {
            let center = self.edge_center(e);
            let mid = self.add_vertex(center);
            let (a, b) = self[e].ends();
            self.lerp_attributes(mid, a, b, 0.5);
            self[e].id = index as i32;
            midpoints.push(mid);
        }

        let original_faces: Vec<FaceId> = self.face_iter().map(|(f, _)| f).collect();
        for &f in &original_faces {
            let centroid = self.face_center(f);
            let center = self.add_vertex(centroid);
            let corners: Vec<(VertexId, EdgeId, EdgeId)> = self
                .face_loops(f)
                .map(|l| {
                    let prev = self[l].prev();
                    (self[l].vertex(), self[l].edge(), self[prev].edge())
                })
                .collect();
            // running average of the corner attributes onto the centroid
            for (round, &(v, _, _)) in corners.iter().enumerate() {
                self.lerp_attributes(center, center, v, 1.0 / (round + 1) as f32);
            }
            for &(v, outgoing, incoming) in &corners {
                let out_mid = midpoints[self[outgoing].id as usize];
                let in_mid = midpoints[self[incoming].id as usize];
                self.add_face(&[v, out_mid, center, in_mid]).unwrap();
            }
        }

        for e in original_edges {
            self.remove_edge(e);
        }
        self
    }
}
