//! Fixed-geometry cube rendering under a caller-supplied MVP transform.
//!
//! `mesh` holds the compile-time constant geometry (positions, colors,
//! triangle indices); `renderer` owns the GPU pipeline and issues the draw.

pub mod mesh;

mod renderer;

pub use renderer::CubeRenderer;
