pub mod format;
pub mod sink;
