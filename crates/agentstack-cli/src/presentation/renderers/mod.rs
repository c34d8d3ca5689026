pub mod console;
pub mod csv;
pub mod site;
pub mod traits;
pub mod tui;

pub use console::ConsoleRenderer;
pub use csv::CsvRenderer;
pub use site::SiteRenderer;
pub use traits::Renderer;
