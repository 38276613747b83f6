use thiserror::Error;

/// Topological errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Error {
    /// Tried to register an edge whose two endpoints are the same vertex.
    #[error("the two endpoints of an edge must be distinct vertices")]
    SameVertex,
    /// A cycle or cross-reference of the mesh is broken. Only produced by
    /// [`Mesh::check_consistency`](crate::Mesh::check_consistency).
    #[error("mesh inconsistency: {0}")]
    Inconsistent(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::SameVertex.to_string(),
            "the two endpoints of an edge must be distinct vertices",
        );
        assert_eq!(
            Error::Inconsistent("broken disk cycle").to_string(),
            "mesh inconsistency: broken disk cycle",
        );
    }
}
