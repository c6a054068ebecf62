use super::meshes::torus;
use cleave3d::mass_properties::trimesh_signed_area_vector;
use cleave3d::math::Vector;
use cleave3d::shape::Plane;
use cleave3d::transformation::MeshSlicer;

#[test]
fn slice_torus_into_two_arcs() {
    let mesh = torus(2.0, 0.5, 16, 12);
    let volume = mesh.signed_volume();
    assert!(volume > 0.0);

    let mut slicer = MeshSlicer::new();
    let plane = Plane::new(Vector::x_axis(), 0.05);

    assert_eq!(slicer.slice(&mesh, &plane), Ok(true));

    // The plane crosses the ring twice.
    assert_eq!(slicer.num_cross_sections(), 2);
    let sections: Vec<_> = slicer.cross_sections().collect();
    assert!(sections[0].len() >= 3 && sections[1].len() >= 3);
    assert!(sections[0][0].z * sections[1][0].z < 0.0);

    assert_relative_eq!(
        slicer.positive().signed_volume() + slicer.negative().signed_volume(),
        volume,
        epsilon = 1.0e-3
    );

    for part in [slicer.positive(), slicer.negative()] {
        let area = trimesh_signed_area_vector(part.vertices(), part.indices());
        assert_relative_eq!(area, Vector::zeros(), epsilon = 1.0e-3);
    }
}
