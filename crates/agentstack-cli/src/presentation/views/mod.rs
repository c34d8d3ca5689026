pub mod agent;
pub mod catalog;
pub mod compare;
pub mod directory;
pub mod html;
pub mod settings;
pub mod tui;
