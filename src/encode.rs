//! Frame serialization.

pub mod image_file;

pub use image_file::{format_for_path, write_image};
