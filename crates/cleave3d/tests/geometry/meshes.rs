use cleave3d::math::{Point, Real};
use cleave3d::shape::{MeshBuffer, TriMesh};
use cleave3d::utils::hashmap::HashMap;
use core::f64::consts::{PI, TAU};

/// The cube `[-0.5, 0.5]³`, with two triangles per face.
pub fn unit_cube() -> TriMesh {
    let vertices = (0..8)
        .map(|i| {
            Point::new(
                (i & 1) as Real - 0.5,
                ((i >> 1) & 1) as Real - 0.5,
                ((i >> 2) & 1) as Real - 0.5,
            )
        })
        .collect();
    let quads = [
        [0, 4, 6, 2],
        [1, 3, 7, 5],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 2, 3, 1],
        [4, 5, 7, 6],
    ];
    let indices = quads
        .iter()
        .flat_map(|q| [[q[0], q[1], q[2]], [q[0], q[2], q[3]]])
        .collect();

    TriMesh::from_positions(vertices, indices).unwrap()
}

/// A regular tetrahedron inscribed in the cube `[-1, 1]³`. Its volume is `8 / 3`.
pub fn tetrahedron() -> TriMesh {
    let vertices = vec![
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
    ];
    let indices = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    TriMesh::from_positions(vertices, indices).unwrap()
}

/// A UV sphere centered at the origin.
pub fn uv_sphere(radius: Real, nsubdiv_theta: u32, nsubdiv_phi: u32) -> TriMesh {
    let mut vertices = vec![Point::new(0.0, radius, 0.0)];

    for j in 1..nsubdiv_phi {
        let phi = (PI * j as f64 / nsubdiv_phi as f64) as Real;
        for i in 0..nsubdiv_theta {
            let theta = (TAU * i as f64 / nsubdiv_theta as f64) as Real;
            vertices.push(Point::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }

    vertices.push(Point::new(0.0, -radius, 0.0));

    let ring = |j: u32, i: u32| 1 + (j - 1) * nsubdiv_theta + i % nsubdiv_theta;
    let bottom = vertices.len() as u32 - 1;
    let mut indices = vec![];

    for i in 0..nsubdiv_theta {
        indices.push([0, ring(1, i + 1), ring(1, i)]);
        indices.push([ring(nsubdiv_phi - 1, i), ring(nsubdiv_phi - 1, i + 1), bottom]);
    }

    for j in 1..nsubdiv_phi - 1 {
        for i in 0..nsubdiv_theta {
            let (a, b) = (ring(j, i), ring(j, i + 1));
            let (c, d) = (ring(j + 1, i + 1), ring(j + 1, i));
            indices.push([a, b, c]);
            indices.push([a, c, d]);
        }
    }

    TriMesh::from_positions(vertices, indices).unwrap()
}

/// A torus around the `y` axis.
pub fn torus(
    major_radius: Real,
    minor_radius: Real,
    nsubdiv_major: u32,
    nsubdiv_minor: u32,
) -> TriMesh {
    let mut vertices = vec![];

    for i in 0..nsubdiv_major {
        let u = (TAU * i as f64 / nsubdiv_major as f64) as Real;
        for j in 0..nsubdiv_minor {
            let v = (TAU * j as f64 / nsubdiv_minor as f64) as Real;
            let r = major_radius + minor_radius * v.cos();
            vertices.push(Point::new(r * u.cos(), minor_radius * v.sin(), r * u.sin()));
        }
    }

    let id = |i: u32, j: u32| (i % nsubdiv_major) * nsubdiv_minor + j % nsubdiv_minor;
    let mut indices = vec![];

    for i in 0..nsubdiv_major {
        for j in 0..nsubdiv_minor {
            let (a, b, c, d) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
            indices.push([a, c, b]);
            indices.push([a, d, c]);
        }
    }

    TriMesh::from_positions(vertices, indices).unwrap()
}

/// Checks that every directed edge of `mesh` appears exactly once and is matched by
/// its reverse, identifying vertices by their exact position.
pub fn assert_watertight(mesh: &MeshBuffer) {
    let key = |pt: &Point<Real>| [pt.x.to_bits(), pt.y.to_bits(), pt.z.to_bits()];
    let mut edges = HashMap::default();

    for tri in mesh.triangles() {
        for k in 0..3 {
            let edge = (key(&tri[k]), key(&tri[(k + 1) % 3]));
            *edges.entry(edge).or_insert(0) += 1;
        }
    }

    for ((a, b), count) in &edges {
        assert_eq!(*count, 1, "directed edge used {count} times");
        assert_eq!(edges.get(&(*b, *a)), Some(&1), "unmatched edge");
    }
}
