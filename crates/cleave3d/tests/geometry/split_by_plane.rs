use super::meshes::unit_cube;
use cleave3d::math::Vector;
use cleave3d::query::SplitResult;
use cleave3d::shape::{Plane, TriMesh};
use cleave3d::transformation::{MeshSlicer, SliceError, SliceTolerances};

#[test]
fn split_cube_by_plane() {
    let mesh = unit_cube();

    let result = mesh.split_by_plane(&Plane::new(Vector::y_axis(), 0.0));
    let (negative, positive) = match result {
        Ok(SplitResult::Pair(negative, positive)) => (negative, positive),
        other => panic!("the plane crosses the cube, got {other:?}"),
    };
    assert_relative_eq!(negative.signed_volume(), 0.5, epsilon = 1.0e-5);
    assert_relative_eq!(positive.signed_volume(), 0.5, epsilon = 1.0e-5);
    assert!(negative.aabb().maxs.y <= 0.0);
    assert!(positive.aabb().mins.y >= 0.0);

    assert_eq!(
        mesh.split_by_plane(&Plane::new(Vector::y_axis(), -3.0)),
        Ok(SplitResult::Positive)
    );
    assert_eq!(
        mesh.split_by_plane(&Plane::new(Vector::y_axis(), 3.0)),
        Ok(SplitResult::Negative)
    );
    assert_eq!(
        mesh.split_by_plane(&Plane::new(Vector::y_axis(), 0.5)),
        Ok(SplitResult::Negative)
    );
}

#[test]
fn split_with_custom_tolerances() {
    let mesh = unit_cube();
    let tolerances = SliceTolerances {
        weld_distance: 1.0e-3,
        collinearity_angle: 1.0e-2,
    };

    let result =
        mesh.split_by_plane_with_tolerances(&Plane::new(Vector::x_axis(), 0.25), tolerances);
    assert!(matches!(result, Ok(SplitResult::Pair(..))));
}

#[test]
fn slice_a_half_again() {
    let mesh = unit_cube();
    let mut slicer = MeshSlicer::new();

    assert_eq!(slicer.slice(&mesh, &Plane::new(Vector::y_axis(), 0.0)), Ok(true));
    let (negative, _) = slicer.take_meshes();
    let half = negative.to_trimesh().unwrap();

    // The caps leave T-junctions on the half, which welding absorbs.
    assert_eq!(slicer.slice(&half, &Plane::new(Vector::x_axis(), 0.1)), Ok(true));
    assert_relative_eq!(slicer.negative().signed_volume(), 0.3, epsilon = 1.0e-5);
    assert_relative_eq!(slicer.positive().signed_volume(), 0.2, epsilon = 1.0e-5);
}

#[test]
fn open_mesh_reports_an_open_boundary() {
    let cube = unit_cube();
    let indices = cube.indices()[2..].to_vec();
    let mesh = TriMesh::from_positions(cube.vertices().to_vec(), indices).unwrap();

    let result = mesh.split_by_plane(&Plane::new(Vector::y_axis(), 0.0));
    assert!(matches!(result, Err(SliceError::OpenBoundary { .. })));
}
