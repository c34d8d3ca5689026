mod context;

pub mod browse;
pub mod categories;
pub mod compare;
pub mod featured;
pub mod forms;
pub mod list;
pub mod show;
pub mod site;
pub mod theme;

pub use context::HandlerContext;
