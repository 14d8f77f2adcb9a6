/**
 * This module contains all logic for loading textures from external files,
 * or generating them when no file is configured.
 */
pub mod texture;

pub use texture::{arrow_image, load_binary, load_texture};
