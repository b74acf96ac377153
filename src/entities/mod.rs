pub mod champion_evaluations;
pub mod champion_synergies;
pub mod champions;
pub mod draft_variants;
pub mod drafts;
pub mod patch_notes;
pub mod player_availability;
pub mod players;
pub mod scrims;
