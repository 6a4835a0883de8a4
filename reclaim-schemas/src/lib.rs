pub mod file_formats;
pub mod input;
pub mod phase;
pub mod results;
