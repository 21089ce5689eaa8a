use glam::Vec3;

use crate::tile_core::mesh::Mesh;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationKind {
    Rock,
    Tuft,
    Tree,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorationPart {
    pub mesh: Mesh,
    pub material: String,
}

/// One placed decoration in tile-local coordinates. Rocks and tufts carry
/// a single part; a tree carries trunk and crown.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub position: Vec3,
    pub parts: Vec<DecorationPart>,
}

/// A finished tile. Immutable once built, except that the builder swaps
/// in the per-tile grass variant name. `base_rotation` is cosmetic; the
/// decorations live in the unrotated local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub index: u32,
    pub base: Mesh,
    pub base_rotation: f32,
    pub decorations: Vec<Decoration>,
    pub material: String,
    pub seed: i64,
}

impl Tile {
    pub fn decoration_count(&self, kind: DecorationKind) -> usize {
        self.decorations.iter().filter(|d| d.kind == kind).count()
    }
}
