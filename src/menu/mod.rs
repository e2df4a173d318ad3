//! Line-oriented parsing of scraped Aromi menu text.
//!
//! The page exposes the week's menu only as rendered display text: a flat
//! sequence of lines where day headers (`ke 25.2.2026`), dish rows with
//! inline allergen codes, label rows and footer noise all look alike.
//! [`parse_week`] walks the lines once and groups cleaned dish names under
//! the day header they follow.

mod allergens;
mod day_header;
mod parser;

pub use allergens::{strip_allergens, ALLERGEN_CODES};
pub use day_header::{is_day_header, DayHeading};
pub use parser::parse_week;
