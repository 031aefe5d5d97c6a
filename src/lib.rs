// Range Calendar Widget Library
// Exports all modules for testing and reuse

pub mod models;
pub mod utils;
pub mod widgets;
