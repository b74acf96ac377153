pub mod champion_service;
pub mod draft_service;
pub mod patch_note_service;
pub mod player_service;
pub mod scrim_service;
pub mod seed_service;
pub mod synergy_service;

pub use champion_service::*;
pub use draft_service::*;
pub use patch_note_service::*;
pub use player_service::*;
pub use scrim_service::*;
pub use seed_service::*;
pub use synergy_service::*;
