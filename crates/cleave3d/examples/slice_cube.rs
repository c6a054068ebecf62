use cleave3d::math::{Point, Vector};
use cleave3d::shape::{Plane, TriMesh};
use cleave3d::transformation::MeshSlicer;

fn main() {
    let vertices = vec![
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(-0.5, -0.5, 0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(0.5, 0.5, 0.5),
    ];
    let indices = vec![
        [0, 4, 6],
        [0, 6, 2],
        [1, 3, 7],
        [1, 7, 5],
        [0, 1, 5],
        [0, 5, 4],
        [2, 6, 7],
        [2, 7, 3],
        [0, 2, 3],
        [0, 3, 1],
        [4, 5, 7],
        [4, 7, 6],
    ];
    let cube = TriMesh::from_positions(vertices, indices).expect("invalid cube");

    let mut slicer = MeshSlicer::new();
    let plane = Plane::new(Vector::y_axis(), 0.0);

    match slicer.slice(&cube, &plane) {
        Ok(true) => {
            println!(
                "positive: {} triangles, volume {}",
                slicer.positive().num_triangles(),
                slicer.positive().signed_volume()
            );
            println!(
                "negative: {} triangles, volume {}",
                slicer.negative().num_triangles(),
                slicer.negative().signed_volume()
            );

            for (i, section) in slicer.cross_sections().enumerate() {
                println!("cross-section {i}: {section:?}");
            }
        }
        Ok(false) => println!("the plane does not cut the cube"),
        Err(err) => println!("slicing failed: {err}"),
    }
}
