use super::meshes::unit_cube;
use cleave3d::math::Vector;
use cleave3d::shape::Plane;
use cleave3d::transformation::MeshSlicer;

#[test]
fn export_both_halves() {
    let mesh = unit_cube();
    let mut slicer = MeshSlicer::new();
    assert_eq!(slicer.slice(&mesh, &Plane::new(Vector::z_axis(), 0.1)), Ok(true));

    let dir = std::env::temp_dir();
    for (name, part) in [("negative", slicer.negative()), ("positive", slicer.positive())] {
        let path = dir.join(format!("cleave3d_cube_{name}.obj"));
        part.to_obj_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let faces = content.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(faces, part.num_triangles());
        let _ = std::fs::remove_file(&path);
    }
}
