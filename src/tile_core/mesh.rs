use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub indices: Vec<u32>,
    pub smooth: bool,
}

impl Face {
    pub fn flat(indices: Vec<u32>) -> Self {
        Self {
            indices,
            smooth: false,
        }
    }
}

/// Plain polygonal vertex/face buffers. Faces may be triangles, quads, or
/// ngons (the hex caps are single six-sided faces).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn shade_smooth(&mut self) {
        for face in &mut self.faces {
            face.smooth = true;
        }
    }

    pub fn translate(&mut self, delta: Vec3) {
        for p in &mut self.positions {
            *p += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Face, Mesh};
    use glam::Vec3;

    #[test]
    fn translate_offsets_every_vertex() {
        let mut mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)],
            faces: vec![Face::flat(vec![0, 1])],
        };
        mesh.translate(Vec3::new(0.5, 0.0, -1.0));
        assert_eq!(mesh.positions[0], Vec3::new(0.5, 0.0, -1.0));
        assert_eq!(mesh.positions[1], Vec3::new(1.5, 2.0, 2.0));
    }

    #[test]
    fn shade_smooth_marks_all_faces() {
        let mut mesh = Mesh {
            positions: vec![Vec3::ZERO; 3],
            faces: vec![Face::flat(vec![0, 1, 2]), Face::flat(vec![2, 1, 0])],
        };
        mesh.shade_smooth();
        assert!(mesh.faces.iter().all(|f| f.smooth));
    }
}
