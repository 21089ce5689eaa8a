use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec3;

use crate::tile_core::error::GenError;
use crate::tile_core::mesh::{Face, Mesh};

/// Flat-top hexagonal prism: a six-sided `cylinder`. Top-ring vertices
/// come first, so every vertex with `z >= 0` belongs to the top surface.
pub fn hex_prism(radius: f32, thickness: f32) -> Result<Mesh, GenError> {
    cylinder(radius, thickness, 6)
}

/// Prism with `side_count` sides centered at the origin, axis along z.
/// Caps are single ngons with no center vertex.
pub fn cylinder(radius: f32, depth: f32, side_count: u32) -> Result<Mesh, GenError> {
    if radius <= 0.0 || depth <= 0.0 {
        return Err(GenError::InvalidParameter(format!(
            "cylinder needs positive radius and depth, got {radius} x {depth}"
        )));
    }
    if side_count < 3 {
        return Err(GenError::InvalidParameter(format!(
            "cylinder needs at least 3 sides, got {side_count}"
        )));
    }

    let n = side_count as usize;
    let half = depth / 2.0;
    let mut positions = Vec::with_capacity(n * 2);
    for ring_z in [half, -half] {
        for k in 0..n {
            let theta = k as f32 / n as f32 * TAU;
            positions.push(Vec3::new(radius * theta.cos(), radius * theta.sin(), ring_z));
        }
    }

    let n = n as u32;
    let mut faces = Vec::with_capacity(n as usize + 2);
    faces.push(Face::flat((0..n).collect()));
    faces.push(Face::flat((0..n).rev().map(|k| k + n).collect()));
    for k in 0..n {
        let next = (k + 1) % n;
        faces.push(Face::flat(vec![k, next, next + n, k + n]));
    }

    Ok(Mesh { positions, faces })
}

/// Icosahedron-derived sphere. `subdivisions = 1` is the raw icosahedron
/// (20 faces); every further level quadruples the face count.
pub fn low_poly_sphere(radius: f32, subdivisions: u32) -> Result<Mesh, GenError> {
    if radius <= 0.0 {
        return Err(GenError::InvalidParameter(format!(
            "sphere needs a positive radius, got {radius}"
        )));
    }
    if subdivisions == 0 {
        return Err(GenError::InvalidParameter(
            "sphere needs at least one subdivision level".to_string(),
        ));
    }

    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut verts: Vec<Vec3> = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ]
    .into_iter()
    .map(Vec3::normalize)
    .collect();

    let mut tris: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 1..subdivisions {
        let mut next = Vec::with_capacity(tris.len() * 4);
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        for [a, b, c] in tris {
            let ab = midpoint(&mut verts, &mut midpoints, a, b);
            let bc = midpoint(&mut verts, &mut midpoints, b, c);
            let ca = midpoint(&mut verts, &mut midpoints, c, a);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        tris = next;
    }

    let positions = verts.into_iter().map(|v| v * radius).collect();
    let faces = tris.into_iter().map(|t| Face::flat(t.to_vec())).collect();
    Ok(Mesh { positions, faces })
}

fn midpoint(
    verts: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&idx) = cache.get(&key) {
        return idx;
    }
    let mid = ((verts[a as usize] + verts[b as usize]) / 2.0).normalize();
    let idx = verts.len() as u32;
    verts.push(mid);
    cache.insert(key, idx);
    idx
}

/// Double-sided rectangle in the local x/y plane. Vertex order puts the
/// top edge (y > 0) at indices 2 and 3, which the tuft bend relies on.
pub fn quad(size: f32) -> Result<Mesh, GenError> {
    if size <= 0.0 {
        return Err(GenError::InvalidParameter(format!(
            "quad needs a positive size, got {size}"
        )));
    }
    let h = size / 2.0;
    let positions = vec![
        Vec3::new(-h, -h, 0.0),
        Vec3::new(h, -h, 0.0),
        Vec3::new(h, h, 0.0),
        Vec3::new(-h, h, 0.0),
    ];
    let faces = vec![Face::flat(vec![0, 1, 2, 3]), Face::flat(vec![3, 2, 1, 0])];
    Ok(Mesh { positions, faces })
}

#[cfg(test)]
mod tests {
    use super::{cylinder, hex_prism, low_poly_sphere, quad};
    use crate::tile_core::error::GenError;

    #[test]
    fn hex_prism_has_two_rings_and_eight_faces() {
        let mesh = hex_prism(0.5, 0.08).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.face_count(), 8);
        for (i, p) in mesh.positions.iter().enumerate() {
            if i < 6 {
                assert!(p.z >= 0.0, "top-ring vertex {i} below z=0");
            } else {
                assert!(p.z < 0.0, "bottom-ring vertex {i} above z=0");
            }
        }
    }

    #[test]
    fn cylinder_side_count_is_independent() {
        let mesh = cylinder(0.02, 0.18, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face_count(), 10);
    }

    #[test]
    fn sphere_faces_quadruple_per_level() {
        let base = low_poly_sphere(1.0, 1).unwrap();
        assert_eq!(base.vertex_count(), 12);
        assert_eq!(base.face_count(), 20);

        let refined = low_poly_sphere(1.0, 2).unwrap();
        assert_eq!(refined.face_count(), 80);
        for p in &refined.positions {
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn quad_is_double_sided() {
        let mesh = quad(1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.positions[2].y, 0.5);
        assert_eq!(mesh.positions[3].y, 0.5);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(matches!(
            hex_prism(0.0, 0.08),
            Err(GenError::InvalidParameter(_))
        ));
        assert!(matches!(
            cylinder(0.1, -1.0, 8),
            Err(GenError::InvalidParameter(_))
        ));
        assert!(matches!(
            cylinder(0.1, 1.0, 2),
            Err(GenError::InvalidParameter(_))
        ));
        assert!(matches!(
            low_poly_sphere(1.0, 0),
            Err(GenError::InvalidParameter(_))
        ));
        assert!(matches!(quad(-0.5), Err(GenError::InvalidParameter(_))));
    }
}
