/// Edge-matching assembly engine
pub mod assembly;
/// Picture compositor stripping tile borders
pub mod compositor;
/// Random puzzle generation with unique assemblies
pub mod generator;
/// Growing slot grid of placed tiles
pub mod layout;

pub use assembly::{Assembler, assemble, check_insertion};
pub use compositor::{Picture, compose};
pub use layout::TileGrid;
