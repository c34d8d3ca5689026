pub mod cell;
pub mod number;
pub mod stars;
pub mod style;
pub mod text;

pub use cell::format_cell;
pub use number::{format_number, format_rating, format_rating_value};
pub use stars::star_glyphs;
pub use text::{terminal_width, truncate};
