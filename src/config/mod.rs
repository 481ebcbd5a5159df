pub mod defaults;
pub mod settings;
