//! Data the demos upload to the GPU.
//!
//! - `vertex` holds the vertex formats and their buffer layouts
//! - `geometry` holds the static triangle, square and cube meshes
//! - `uniform` holds per-frame uniform structs
//! - `texture` holds the GPU texture wrapper and creation utilities

pub mod geometry;
pub mod texture;
pub mod uniform;
pub mod vertex;
