use glam::{Mat4, Vec3};

use crate::tile_core::error::GenError;
use crate::tile_core::materials::{MaterialCache, SharedMaterial};
use crate::tile_core::mesh::Mesh;
use crate::tile_core::tile::Tile;

/// One draw-ready unit handed to the export collaborator.
pub struct ExportItem<'a> {
    pub mesh: &'a Mesh,
    pub material: SharedMaterial,
    pub transform: Mat4,
}

/// Row layout used by the demo binary: tiles in a line along +x. Layout
/// is caller policy and not part of the per-tile determinism contract.
pub fn tile_origin(index: u32, hex_radius: f32) -> Vec3 {
    Vec3::new(index as f32 * hex_radius * 2.6, 0.0, 0.0)
}

/// Flatten a tile into (mesh, material, transform) triples. The base's
/// cosmetic z-rotation applies to the base only; decorations stay in the
/// tile's unrotated frame.
pub fn flatten_tile<'a>(
    tile: &'a Tile,
    materials: &MaterialCache,
    origin: Vec3,
) -> Result<Vec<ExportItem<'a>>, GenError> {
    let mut items = Vec::with_capacity(1 + tile.decorations.len());

    items.push(ExportItem {
        mesh: &tile.base,
        material: lookup(materials, &tile.material)?,
        transform: Mat4::from_translation(origin) * Mat4::from_rotation_z(tile.base_rotation),
    });

    for decoration in &tile.decorations {
        let transform = Mat4::from_translation(origin + decoration.position);
        for part in &decoration.parts {
            items.push(ExportItem {
                mesh: &part.mesh,
                material: lookup(materials, &part.material)?,
                transform,
            });
        }
    }

    Ok(items)
}

fn lookup(materials: &MaterialCache, name: &str) -> Result<SharedMaterial, GenError> {
    materials
        .get(name)
        .ok_or_else(|| GenError::InvalidParameter(format!("unknown material variant `{name}`")))
}

/// Export boundary. Implementations serialize or otherwise consume the
/// items; a failure is reported as `ExportFailed` carrying the cause and
/// never touches already-built tile data.
pub trait ExportSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write(&mut self, items: &[ExportItem<'_>]) -> Result<(), Self::Error>;
}

pub fn export_tiles<S: ExportSink>(
    sink: &mut S,
    items: &[ExportItem<'_>],
) -> Result<(), GenError> {
    sink.write(items)
        .map_err(|e| GenError::ExportFailed(Box::new(e)))
}
