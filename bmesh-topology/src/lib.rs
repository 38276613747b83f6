//! # Overview
//! `bmesh_topology` is a crate for describing and editing the topology of
//! non-manifold polygonal meshes in a boundary representation.
//!
//! The mesh is a web of cyclic doubly-linked lists threaded through four
//! entity kinds. Every vertex anchors a *disk cycle* of its incident edges,
//! every edge heads a *radial cycle* of the face corners using it, and every
//! face owns a *face cycle* of corners in polygon order. A corner, called a
//! [`Loop`], ties one vertex, one edge, and one face together and carries
//! per-corner data. Nothing here is manifold-enforced: an edge may be shared
//! by any number of faces, and faces with only two corners are legal.
//!
//! ## Example
//! The following sample code builds two triangles sharing an edge.
//! ```
//! use bmesh_topology::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let v = [
//!     mesh.add_vertex((-1.0, 0.0, -1.0)),
//!     mesh.add_vertex((-1.0, 0.0, 1.0)),
//!     mesh.add_vertex((1.0, 0.0, 1.0)),
//!     mesh.add_vertex((1.0, 0.0, -1.0)),
//! ];
//! mesh.add_face(&[v[0], v[1], v[2]]).unwrap();
//! mesh.add_face(&[v[2], v[1], v[3]]).unwrap();
//!
//! // The diagonal is shared, so five edges suffice for six corners.
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.edge_count(), 5);
//! assert_eq!(mesh.loop_count(), 6);
//! assert_eq!(mesh.face_count(), 2);
//!
//! // The shared edge is used by both faces.
//! let diagonal = mesh.find_edge(v[1], v[2]).unwrap();
//! assert_eq!(mesh.edge_faces(diagonal).count(), 2);
//!
//! // Removing it drops both faces but no vertex.
//! mesh.remove_edge(diagonal);
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.edge_count(), 4);
//! assert_eq!(mesh.face_count(), 0);
//! ```
//!
//! ## Entities and handles
//! All entities live in generational arenas owned by [`Mesh`] and are
//! addressed by the `Copy` handles [`VertexId`], [`EdgeId`], [`LoopId`], and
//! [`FaceId`]. Removal invalidates the handle's generation, so a stale
//! handle never aliases a recycled slot; indexing the mesh with one panics.
//! Entities expose their geometric payload (`position`), a scratch `id`
//! field that the core never reads, and their attribute map as public
//! fields. Cycle links are read-only.
//!
//! ## Attributes
//! Each entity kind has an ordered registry of named, typed attribute
//! definitions. Registering a definition back-fills a deep copy of its
//! default onto every existing entity of that kind, and every entity created
//! afterwards receives the default on construction. See [`AttributeValue`].

#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

pub use attrib::{AttributeDefinition, AttributeFormat, AttributeValue, Attributes, BaseType};

/// redefinition, scalar = f64
pub type Point3 = cgmath::Point3<f64>;
/// redefinition, scalar = f64
pub type Vector3 = cgmath::Vector3<f64>;

new_key_type! {
    /// Generational handle to a [`Vertex`] of a [`Mesh`].
    pub struct VertexId;
    /// Generational handle to an [`Edge`] of a [`Mesh`].
    pub struct EdgeId;
    /// Generational handle to a [`Loop`] of a [`Mesh`].
    pub struct LoopId;
    /// Generational handle to a [`Face`] of a [`Mesh`].
    pub struct FaceId;
}

/// Vertex, a point in 3-space anchoring the disk cycle of its incident edges.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    /// Position of the vertex.
    pub position: Point3,
    /// User scratch space. The core never reads nor maintains it.
    pub id: i32,
    /// Attribute values, registered and ad-hoc.
    pub attributes: Attributes,
    pub(crate) edge: Option<EdgeId>,
}

/// One endpoint record of an edge: which vertex, and the successor and
/// predecessor of the edge in that vertex's disk cycle.
///
/// An edge participates in two disk cycles at once, one per endpoint, so it
/// carries two of these. The record to follow is always selected by
/// comparing the probing vertex against `vertex`, never by slot index.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub(crate) struct DiskLink {
    pub(crate) vertex: VertexId,
    pub(crate) next: EdgeId,
    pub(crate) prev: EdgeId,
}

/// Edge, an unordered pair of distinct vertices.
///
/// Besides its two disk-cycle records, an edge heads the radial cycle of the
/// loops that use it. A wireframe edge (used by no face) has no loop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// User scratch space. The core never reads nor maintains it.
    pub id: i32,
    /// Attribute values, registered and ad-hoc.
    pub attributes: Attributes,
    pub(crate) links: [DiskLink; 2],
    pub(crate) first_loop: Option<LoopId>,
}

/// Loop, a face corner: the atomic unit tying one vertex, one edge, and one
/// face together.
///
/// A loop is a node of two cycles: the face cycle (corners of its face, in
/// polygon order) and the radial cycle (corners of all faces sharing its
/// edge, in no particular order).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Loop {
    /// Attribute values, registered and ad-hoc.
    pub attributes: Attributes,
    pub(crate) vertex: VertexId,
    pub(crate) edge: EdgeId,
    pub(crate) face: FaceId,
    pub(crate) next: LoopId,
    pub(crate) prev: LoopId,
    pub(crate) radial_next: LoopId,
    pub(crate) radial_prev: LoopId,
}

/// Face, a polygon represented by its cycle of loops.
///
/// The corner count is cached at construction and never re-derived. The core
/// never restructures a face cycle in place; operators that need a different
/// polygon must remove the face and add a new one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Face {
    /// User scratch space. The core never reads nor maintains it.
    pub id: i32,
    /// Attribute values, registered and ad-hoc.
    pub attributes: Attributes,
    pub(crate) first_loop: Option<LoopId>,
    pub(crate) vertex_count: usize,
}

/// The mesh container: four entity arenas and four attribute registries.
///
/// The container exclusively owns all entities; handles held by user code
/// are relations, not ownership. All mutation goes through `&mut Mesh`, all
/// queries through `&Mesh`. There is no internal locking and no support for
/// concurrent mutation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub(crate) vertices: SlotMap<VertexId, Vertex>,
    pub(crate) edges: SlotMap<EdgeId, Edge>,
    pub(crate) loops: SlotMap<LoopId, Loop>,
    pub(crate) faces: SlotMap<FaceId, Face>,
    pub(crate) vertex_attributes: Vec<AttributeDefinition>,
    pub(crate) edge_attributes: Vec<AttributeDefinition>,
    pub(crate) loop_attributes: Vec<AttributeDefinition>,
    pub(crate) face_attributes: Vec<AttributeDefinition>,
}

/// `Result` with crate's errors.
pub type Result<T> = std::result::Result<T, crate::errors::Error>;

trait RemoveTry<T> {
    fn remove_try(self) -> T;
}

impl<T> RemoveTry<T> for Result<T> {
    #[inline(always)]
    fn remove_try(self) -> T { self.unwrap_or_else(|e| panic!("{}", e)) }
}

/// Typed attribute values and per-kind attribute registries.
pub mod attrib;
/// Defines the radial-cycle iterator and edge operations.
pub mod edge;
/// classifies the errors that can occur in this crate.
pub mod errors;
/// Defines the face-cycle iterator, face operations, and loop accessors.
pub mod face;
/// Defines the mesh container operations and the consistency check.
pub mod mesh;
/// Tolerance for geometric comparisons in tests and user code.
pub mod tolerance;
/// Defines the disk-cycle iterator and vertex operations.
pub mod vertex;
