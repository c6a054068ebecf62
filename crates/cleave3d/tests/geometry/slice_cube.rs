use super::meshes::unit_cube;
use cleave3d::mass_properties::trimesh_signed_area_vector;
use cleave3d::math::{Point, Real, Vector};
use cleave3d::shape::{MeshBuffer, Plane};
use cleave3d::transformation::MeshSlicer;

fn distinct_positions(mesh: &MeshBuffer) -> usize {
    let mut pts: Vec<_> = mesh
        .triangles()
        .flatten()
        .map(|pt| [pt.x, pt.y, pt.z])
        .collect();
    pts.sort_by(|a, b| a.partial_cmp(b).unwrap());
    pts.dedup();
    pts.len()
}

#[test]
fn slice_cube_through_its_center() {
    let mesh = unit_cube();
    let mut slicer = MeshSlicer::new();
    let plane = Plane::new(Vector::y_axis(), 0.0);

    assert_eq!(slicer.slice(&mesh, &plane), Ok(true));

    for part in [slicer.positive(), slicer.negative()] {
        // The 4 corners of one face, the 4 corners of the cap, and the centers of
        // the 4 side faces where their diagonals cross the plane.
        assert_eq!(distinct_positions(part), 12);

        let aabb = part.aabb();
        for i in 0..8 {
            let corner = Point::new(
                if i & 1 == 0 { aabb.mins.x } else { aabb.maxs.x },
                if i & 2 == 0 { aabb.mins.y } else { aabb.maxs.y },
                if i & 4 == 0 { aabb.mins.z } else { aabb.maxs.z },
            );
            assert!(part.triangles().flatten().any(|pt| pt == corner));
        }
        assert_relative_eq!(aabb.extents().y, 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(part.signed_volume(), 0.5, epsilon = 1.0e-5);
        let area = trimesh_signed_area_vector(part.vertices(), part.indices());
        assert_relative_eq!(area, Vector::zeros(), epsilon = 1.0e-5);
    }

    assert!(slicer.positive().vertices().iter().all(|pt| pt.y >= 0.0));
    assert!(slicer.negative().vertices().iter().all(|pt| pt.y <= 0.0));

    // Each cap is a quad made of two triangles, facing away from its solid.
    let upward = |part: &MeshBuffer| {
        part.triangles()
            .filter(|tri| tri.iter().all(|pt| pt.y == 0.0))
            .map(|tri| (tri[1] - tri[0]).cross(&(tri[2] - tri[0])).normalize())
            .collect::<Vec<_>>()
    };
    let pos_caps = upward(slicer.positive());
    let neg_caps = upward(slicer.negative());
    assert_eq!(pos_caps.len(), 2);
    assert_eq!(neg_caps.len(), 2);
    assert!(pos_caps.iter().all(|n| n.y < -0.99));
    assert!(neg_caps.iter().all(|n| n.y > 0.99));

    let sections: Vec<_> = slicer.cross_sections().collect();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].len(), 4);
}

#[test]
fn slice_cube_off_center() {
    let mesh = unit_cube();
    let mut slicer = MeshSlicer::new();
    let normal = Vector::new(1.0, 2.0, 0.5);
    let plane = Plane::from_point_and_normal(
        &Point::new(0.1, 0.05, 0.0),
        cleave3d::na::Unit::new_normalize(normal),
    );

    assert_eq!(slicer.slice(&mesh, &plane), Ok(true));

    let volume = slicer.positive().signed_volume() + slicer.negative().signed_volume();
    assert_relative_eq!(volume, 1.0, epsilon = 1.0e-5);
    assert!(slicer.positive().signed_volume() > 0.0);
    assert!(slicer.negative().signed_volume() > 0.0);

    for section in slicer.cross_sections() {
        for pt in section {
            assert_relative_eq!(plane.signed_distance(pt), 0.0, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn plane_missing_the_cube() {
    let mesh = unit_cube();
    let mut slicer = MeshSlicer::new();

    for bias in [-10.0, -0.5, 0.5, 10.0] {
        let plane = Plane::new(Vector::x_axis(), bias as Real);
        assert_eq!(slicer.slice(&mesh, &plane), Ok(false));
        assert!(slicer.positive().is_empty());
        assert!(slicer.negative().is_empty());
    }
}

#[test]
fn reuse_slicer_across_meshes() {
    let mesh = unit_cube();
    let mut slicer = MeshSlicer::new();

    for k in 1..10 {
        let bias = k as Real / 10.0 - 0.5;
        let plane = Plane::new(Vector::z_axis(), bias);
        assert_eq!(slicer.slice(&mesh, &plane), Ok(true));
        assert_relative_eq!(
            slicer.negative().signed_volume(),
            bias + 0.5,
            epsilon = 1.0e-5
        );
        assert_relative_eq!(
            slicer.positive().signed_volume(),
            0.5 - bias,
            epsilon = 1.0e-5
        );
        assert_eq!(slicer.num_cross_sections(), 1);
    }
}
