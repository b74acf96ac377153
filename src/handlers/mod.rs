pub mod availability;
pub mod champions;
pub mod drafts;
pub mod patchnotes;
pub mod players;
pub mod scrims;
pub mod synergies;

pub use availability::availability_config;
pub use champions::champion_config;
pub use drafts::draft_config;
pub use patchnotes::patchnote_config;
pub use players::player_config;
pub use scrims::scrim_config;
pub use synergies::synergy_config;
