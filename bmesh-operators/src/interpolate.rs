use bmesh_topology::{AttributeValue, Mesh, VertexId};

/// Interpolation of registered vertex attributes.
pub trait AttributeInterpolate {
    /// Writes onto `destination` each registered vertex attribute as the
    /// linear interpolation of the values of `a` and `b` at parameter `t`
    /// (`t = 0` keeps `a`'s value, `t = 1` keeps `b`'s).
    ///
    /// Names either source vertex lacks, and names whose two payloads
    /// disagree in dimension, are skipped. Integer payloads round to the
    /// nearest whole value. `destination` may be one of the sources, which
    /// turns repeated calls into a running average.
    /// # Examples
    /// ```
    /// use bmesh_operators::AttributeInterpolate;
    /// use bmesh_topology::{AttributeDefinition, AttributeValue, Mesh};
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_vertex_attribute(AttributeDefinition::with_default("weight", 0.0_f32));
    /// let a = mesh.add_vertex((0.0, 0.0, 0.0));
    /// let b = mesh.add_vertex((1.0, 0.0, 0.0));
    /// let mid = mesh.add_vertex((0.5, 0.0, 0.0));
    /// mesh[b].attributes.insert("weight".into(), AttributeValue::from(1.0_f32));
    ///
    /// mesh.lerp_attributes(mid, a, b, 0.5);
    /// assert_eq!(mesh[mid].attributes["weight"], AttributeValue::from(0.5_f32));
    /// ```
    fn lerp_attributes(&mut self, destination: VertexId, a: VertexId, b: VertexId, t: f32);
}

impl AttributeInterpolate for Mesh {
    fn lerp_attributes(&mut self, destination: VertexId, a: VertexId, b: VertexId, t: f32) {
        let names: Vec<String> = self
            .vertex_attributes()
            .iter()
            .map(|def| def.name.clone())
            .collect();
        for name in names {
            let lerped = match (self[a].attributes.get(&name), self[b].attributes.get(&name)) {
                (Some(AttributeValue::Float(x)), Some(AttributeValue::Float(y)))
                    if x.len() == y.len() =>
                {
                    AttributeValue::Float(x.iter().zip(y).map(|(p, q)| p + (q - p) * t).collect())
                }
                (Some(AttributeValue::Int(x)), Some(AttributeValue::Int(y)))
                    if x.len() == y.len() =>
                {
                    AttributeValue::Int(
                        x.iter()
                            .zip(y)
                            .map(|(p, q)| (*p as f32 + (q - p) as f32 * t).round() as i32)
                            .collect(),
                    )
                }
                _ => continue,
            };
            self[destination].attributes.insert(name, lerped);
        }
    }
}
