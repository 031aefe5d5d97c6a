// Module exports for models

pub mod locale;
pub mod selection;
pub mod settings;
