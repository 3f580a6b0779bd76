pub mod coordinator;
pub mod defs;
pub mod loader;
pub mod plotly;
pub mod spec;
pub mod theme;
