use cleave3d::math::{Point, Real, Vector};
use cleave3d::na::Unit;
use cleave3d::shape::{Plane, TriMesh};
use cleave3d::transformation::MeshSlicer;
use core::f64::consts::{PI, TAU};

const NSUBDIV_THETA: u32 = 32;
const NSUBDIV_PHI: u32 = 16;

fn uv_sphere(radius: Real) -> TriMesh {
    let mut vertices = vec![Point::new(0.0, radius, 0.0)];

    for j in 1..NSUBDIV_PHI {
        let phi = (PI * j as f64 / NSUBDIV_PHI as f64) as Real;
        for i in 0..NSUBDIV_THETA {
            let theta = (TAU * i as f64 / NSUBDIV_THETA as f64) as Real;
            vertices.push(Point::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    vertices.push(Point::new(0.0, -radius, 0.0));

    let ring = |j: u32, i: u32| 1 + (j - 1) * NSUBDIV_THETA + i % NSUBDIV_THETA;
    let bottom = vertices.len() as u32 - 1;
    let mut indices = vec![];

    for i in 0..NSUBDIV_THETA {
        indices.push([0, ring(1, i + 1), ring(1, i)]);
        indices.push([ring(NSUBDIV_PHI - 1, i), ring(NSUBDIV_PHI - 1, i + 1), bottom]);

        for j in 1..NSUBDIV_PHI - 1 {
            indices.push([ring(j, i), ring(j, i + 1), ring(j + 1, i + 1)]);
            indices.push([ring(j, i), ring(j + 1, i + 1), ring(j + 1, i)]);
        }
    }

    TriMesh::from_positions(vertices, indices).expect("invalid sphere")
}

fn main() {
    let sphere = uv_sphere(1.0);
    let mut slicer = MeshSlicer::new();
    let mut piece = sphere.clone();

    println!("sphere volume: {}", sphere.signed_volume());

    // Shave the sphere with a few oblique cuts, keeping the negative side each time.
    for k in 0..6 {
        let angle = k as Real * 1.1;
        let normal = Unit::new_normalize(Vector::new(angle.cos(), 0.3, angle.sin()));
        let plane = Plane::new(normal, 0.6);

        match slicer.slice(&piece, &plane) {
            Ok(true) => {
                let (negative, positive) = slicer.take_meshes();
                println!(
                    "cut {k}: removed {:.4}, kept {:.4}",
                    positive.signed_volume(),
                    negative.signed_volume()
                );

                match negative.to_trimesh() {
                    Ok(mesh) => piece = mesh,
                    Err(err) => {
                        println!("cannot reslice the kept part: {err}");
                        break;
                    }
                }
            }
            Ok(false) => println!("cut {k}: the plane misses the piece"),
            Err(err) => {
                println!("cut {k}: slicing failed: {err}");
                break;
            }
        }
    }

    println!("final volume: {}", piece.signed_volume());
}
