pub mod validation;

pub use validation::{parse_roles, require_non_blank, validate_day_of_week, validate_rating};
