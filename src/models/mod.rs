pub mod champion;
pub mod common;
pub mod draft;
pub mod patch_note;
pub mod player;
pub mod scrim;
pub mod statistics;
pub mod synergy;

pub use champion::*;
pub use common::*;
pub use draft::*;
pub use patch_note::*;
pub use player::*;
pub use scrim::*;
pub use statistics::*;
pub use synergy::*;
