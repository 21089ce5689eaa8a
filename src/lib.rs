pub mod tile_core;
