pub mod common;
pub mod file;
pub mod id;
pub mod pretty_format;
