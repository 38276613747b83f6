use bmesh_topology::{
    AttributeDefinition, AttributeValue, BaseType, Mesh, Vertex,
};

#[test]
fn registration_backfills_existing_vertices() {
    let mut mesh = Mesh::new();
    mesh.add_vertex_attribute(AttributeDefinition::new("test", BaseType::Float, 3));
    assert!(mesh.has_vertex_attribute("test"));

    let v: Vec<_> = (0..4)
        .map(|i| mesh.add_vertex((f64::from(i), 0.0, 0.0)))
        .collect();
    for &vertex in &v {
        assert_eq!(
            mesh[vertex].attributes["test"],
            AttributeValue::from([0.0_f32, 0.0, 0.0]),
        );
    }

    // a second registration reaches the vertices that already exist
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));
    for &vertex in &v {
        assert_eq!(mesh[vertex].attributes["other"], AttributeValue::from(42));
    }
}

#[test]
fn values_are_independent_between_entities() {
    let mut mesh = Mesh::new();
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));
    let v1 = mesh.add_vertex((0.0, 0.0, 0.0));
    let v2 = mesh.add_vertex((1.0, 0.0, 0.0));

    mesh[v1].attributes.insert("other".into(), AttributeValue::from(43));
    assert_eq!(mesh[v1].attributes["other"], AttributeValue::from(43));
    assert_eq!(mesh[v2].attributes["other"], AttributeValue::from(42));
}

#[test]
fn registry_defaults_do_not_retro_mutate() {
    let mut mesh = Mesh::new();
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));
    let before = mesh.add_vertex((0.0, 0.0, 0.0));

    mesh.vertex_attribute_mut("other").unwrap().default = AttributeValue::from(44);
    let after = mesh.add_vertex((1.0, 0.0, 0.0));

    assert_eq!(mesh[before].attributes["other"], AttributeValue::from(42));
    assert_eq!(mesh[after].attributes["other"], AttributeValue::from(44));
}

#[test]
fn drifted_values_are_reset_on_insertion() {
    let mut mesh = Mesh::new();
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));

    // pre-set the attribute with the wrong base type and dimension
    let mut vertex = Vertex::new((0.0, 0.0, 0.0));
    vertex
        .attributes
        .insert("other".into(), AttributeValue::from([1.0_f32, 2.0, 3.0]));
    let v = mesh.insert_vertex(vertex);

    assert_eq!(mesh[v].attributes["other"], AttributeValue::from(42));
}

#[test]
fn pre_set_matching_values_survive_insertion() {
    let mut mesh = Mesh::new();
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));

    let mut vertex = Vertex::new((0.0, 0.0, 0.0));
    vertex.attributes.insert("other".into(), AttributeValue::from(7));
    let v = mesh.insert_vertex(vertex);

    assert_eq!(mesh[v].attributes["other"], AttributeValue::from(7));
}

#[test]
fn colliding_registration_returns_the_argument() {
    let mut mesh = Mesh::new();
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));

    // registering the same name again changes nothing in the registry and
    // hands the argument straight back
    let returned =
        mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 7));
    assert_eq!(returned.default, AttributeValue::from(7));
    assert_eq!(
        mesh.vertex_attribute("other").unwrap().default,
        AttributeValue::from(42),
    );
    let v = mesh.add_vertex((0.0, 0.0, 0.0));
    assert_eq!(mesh[v].attributes["other"], AttributeValue::from(42));
    assert_eq!(mesh.vertex_attributes().len(), 1);
}

#[test]
fn every_kind_has_a_registry() {
    let mut mesh = Mesh::new();
    let v = [
        mesh.add_vertex((0.0, 0.0, 0.0)),
        mesh.add_vertex((1.0, 0.0, 0.0)),
        mesh.add_vertex((0.0, 1.0, 0.0)),
    ];
    let f = mesh.add_face(&v).unwrap();

    // back-fill edges, loops, and faces that already exist
    mesh.add_edge_attribute(AttributeDefinition::new("crease", BaseType::Float, 1));
    mesh.add_loop_attribute(AttributeDefinition::new("uv", BaseType::Float, 2));
    mesh.add_face_attribute(AttributeDefinition::with_default("material", 3));

    for (_, edge) in mesh.edge_iter() {
        assert_eq!(edge.attributes["crease"], AttributeValue::from(0.0_f32));
    }
    for (_, lp) in mesh.loop_iter() {
        assert_eq!(lp.attributes["uv"], AttributeValue::from([0.0_f32, 0.0]));
    }
    assert_eq!(mesh[f].attributes["material"], AttributeValue::from(3));

    // entities created after registration receive the defaults too
    let w = mesh.add_vertex((0.0, 0.0, 1.0));
    let e = mesh.add_edge(v[0], w);
    assert_eq!(mesh[e].attributes["crease"], AttributeValue::from(0.0_f32));
    let g = mesh.add_face(&[v[0], w, v[1]]).unwrap();
    assert_eq!(mesh[g].attributes["material"], AttributeValue::from(3));
    let l = mesh.loop_of(g, w).unwrap();
    assert_eq!(mesh[l].attributes["uv"], AttributeValue::from([0.0_f32, 0.0]));
}

#[test]
fn ad_hoc_attributes_are_left_alone() {
    let mut mesh = Mesh::new();
    let v = mesh.add_vertex((0.0, 0.0, 0.0));
    mesh[v].attributes
        .insert("scratch".into(), AttributeValue::from(vec![1, 2, 3]));

    // unregistered names are neither enforced nor cleaned
    mesh.add_vertex_attribute(AttributeDefinition::with_default("other", 42));
    assert_eq!(
        mesh[v].attributes["scratch"],
        AttributeValue::from(vec![1, 2, 3]),
    );
    assert!(!mesh.has_vertex_attribute("scratch"));
}

#[test]
fn distance_between_values() {
    let a = AttributeValue::from([1.0_f32, 0.0, 0.0]);
    let b = AttributeValue::from([0.0_f32, 1.0, 0.0]);
    assert!((a.distance(&b) - 2.0_f32.sqrt()).abs() < 1.0e-6);
    assert_eq!(a.distance(&a), 0.0);

    // mismatched formats are infinitely far apart
    let c = AttributeValue::from(vec![1, 0, 0]);
    let d = AttributeValue::from([1.0_f32, 0.0]);
    assert_eq!(a.distance(&c), f32::INFINITY);
    assert_eq!(a.distance(&d), f32::INFINITY);
}
