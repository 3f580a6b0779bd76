pub mod charts;
pub mod code_block;
pub mod portfolio;
pub mod reveal;
