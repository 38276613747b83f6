//! # Overview
//! Operators over the [`bmesh_topology`] core. Everything here consumes only
//! the core's public surface; nothing reaches into cycle bookkeeping.
//!
//! The operators are extension traits implemented for
//! [`Mesh`](bmesh_topology::Mesh):
//!
//! * [`AttributeInterpolate`]: linear interpolation of registered vertex
//!   attributes between two vertices.
//! * [`Subdivide`]: one global subdivision pass that splits every face into
//!   one quad per corner.
//! * [`MergeFrom`]: absorbs the whole content of another mesh.
//!
//! ## Example
//! ```
//! use bmesh_operators::Subdivide;
//! use bmesh_topology::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let v = [
//!     mesh.add_vertex((-1.0, 0.0, -1.0)),
//!     mesh.add_vertex((-1.0, 0.0, 1.0)),
//!     mesh.add_vertex((1.0, 0.0, 1.0)),
//!     mesh.add_vertex((1.0, 0.0, -1.0)),
//! ];
//! mesh.add_face(&v).unwrap();
//!
//! mesh.subdivide();
//! // 4 corners + 4 edge midpoints + 1 centroid, one quad per corner.
//! assert_eq!(mesh.vertex_count(), 9);
//! assert_eq!(mesh.edge_count(), 12);
//! assert_eq!(mesh.face_count(), 4);
//! ```

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

/// Linear interpolation of registered vertex attributes.
pub mod interpolate;
/// Absorbs the whole content of another mesh.
pub mod merge;
/// Splits every face into one quad per corner.
pub mod subdivide;

pub use interpolate::AttributeInterpolate;
pub use merge::MergeFrom;
pub use subdivide::Subdivide;
