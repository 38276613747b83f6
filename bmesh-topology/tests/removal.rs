use bmesh_topology::{Mesh, VertexId};

fn quad(mesh: &mut Mesh) -> [VertexId; 4] {
    let v = [
        mesh.add_vertex((-1.0, 0.0, -1.0)),
        mesh.add_vertex((-1.0, 0.0, 1.0)),
        mesh.add_vertex((1.0, 0.0, 1.0)),
        mesh.add_vertex((1.0, 0.0, -1.0)),
    ];
    mesh.add_face(&v).unwrap();
    v
}

fn two_triangles(mesh: &mut Mesh) -> [VertexId; 4] {
    let v = [
        mesh.add_vertex((-1.0, 0.0, -1.0)),
        mesh.add_vertex((-1.0, 0.0, 1.0)),
        mesh.add_vertex((1.0, 0.0, 1.0)),
        mesh.add_vertex((1.0, 0.0, -1.0)),
    ];
    mesh.add_face(&[v[0], v[1], v[2]]).unwrap();
    mesh.add_face(&[v[2], v[1], v[3]]).unwrap();
    v
}

#[test]
fn removing_a_quad_edge_removes_the_face() {
    let mut mesh = Mesh::new();
    let v = quad(&mut mesh);
    let loops: Vec<_> = mesh.loop_iter().map(|(l, _)| l).collect();

    let e = mesh.find_edge(v[0], v[1]).unwrap();
    mesh.remove_edge(e);

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 3);
    assert_eq!(mesh.loop_count(), 0);
    assert_eq!(mesh.face_count(), 0);

    // every loop handle is released
    for l in loops {
        assert!(!mesh.contains_loop(l));
    }
    // the three other edges survive as wireframe
    for (e, edge) in mesh.edge_iter() {
        assert!(edge.first_loop().is_none());
        assert_eq!(mesh.edge_faces(e).count(), 0);
    }
    mesh.check_consistency().unwrap();
}

#[test]
fn shared_edge_cascades_both_faces() {
    let mut mesh = Mesh::new();
    let v = two_triangles(&mut mesh);

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 5);
    assert_eq!(mesh.loop_count(), 6);
    assert_eq!(mesh.face_count(), 2);

    assert_eq!(mesh.vertex_faces(v[0]).len(), 1);
    assert_eq!(mesh.vertex_faces(v[1]).len(), 2);

    let shared = mesh.find_edge(v[1], v[2]).unwrap();
    assert_eq!(mesh.edge_loops(shared).count(), 2);

    mesh.remove_edge(shared);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 4);
    assert_eq!(mesh.loop_count(), 0);
    assert_eq!(mesh.face_count(), 0);
    mesh.check_consistency().unwrap();
}

#[test]
fn removing_a_face_keeps_its_ring() {
    let mut mesh = Mesh::new();
    let v = two_triangles(&mut mesh);
    let f = mesh.vertex_faces(v[0])[0];

    mesh.remove_face(f);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 5);
    assert_eq!(mesh.loop_count(), 3);
    assert_eq!(mesh.face_count(), 1);

    // the previously shared edge now has a single radial loop
    let shared = mesh.find_edge(v[1], v[2]).unwrap();
    assert_eq!(mesh.edge_loops(shared).count(), 1);
    mesh.check_consistency().unwrap();
}

#[test]
fn vertex_removal_cascades() {
    let mut mesh = Mesh::new();
    let hub = mesh.add_vertex((0.0, 0.0, 0.0));
    let rim: Vec<_> = [
        (1.0, 0.0, 0.0),
        (0.0, 0.0, 1.0),
        (-1.0, 0.0, 0.0),
        (0.0, 0.0, -1.0),
    ]
    .into_iter()
    .map(|p| mesh.add_vertex(p))
    .collect();
    for i in 0..4 {
        mesh.add_face(&[hub, rim[i], rim[(i + 1) % 4]]).unwrap();
    }
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.edge_count(), 8);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.vertex_faces(hub).len(), 4);

    mesh.remove_vertex(hub);

    assert!(!mesh.contains_vertex(hub));
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 4);
    assert_eq!(mesh.loop_count(), 0);
    assert_eq!(mesh.face_count(), 0);

    // no survivor references the removed vertex
    for (_, edge) in mesh.edge_iter() {
        let (a, b) = edge.ends();
        assert_ne!(a, hub);
        assert_ne!(b, hub);
    }
    mesh.check_consistency().unwrap();
}

#[test]
fn anchor_patching_on_edge_removal() {
    let mut mesh = Mesh::new();
    let v = mesh.add_vertex((0.0, 0.0, 0.0));
    let a = mesh.add_vertex((1.0, 0.0, 0.0));
    let b = mesh.add_vertex((0.0, 1.0, 0.0));
    let e1 = mesh.add_edge(v, a);
    let e2 = mesh.add_edge(v, b);

    // removing the anchor edge advances the anchor to its disk successor
    assert_eq!(mesh[v].edge(), Some(e1));
    mesh.remove_edge(e1);
    assert_eq!(mesh[v].edge(), Some(e2));
    assert_eq!(mesh[a].edge(), None);

    // removing the last incident edge isolates the vertex
    mesh.remove_edge(e2);
    assert_eq!(mesh[v].edge(), None);
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.edge_count(), 0);
    mesh.check_consistency().unwrap();
}

#[test]
fn stale_handles_are_observably_invalid() {
    let mut mesh = Mesh::new();
    let v = two_triangles(&mut mesh);
    let shared = mesh.find_edge(v[1], v[2]).unwrap();
    let faces: Vec<_> = mesh.face_iter().map(|(f, _)| f).collect();

    mesh.remove_edge(shared);
    assert!(!mesh.contains_edge(shared));
    for f in faces {
        assert!(!mesh.contains_face(f));
    }
    // a slot recycled by a later insertion does not resurrect the handle
    let w = mesh.add_vertex((0.0, 5.0, 0.0));
    let e = mesh.add_edge(v[0], w);
    assert_ne!(e, shared);
    assert!(!mesh.contains_edge(shared));
}
