//! GPU rendering subsystem.
//!
//! 2D renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! The cube renderer draws fixed geometry under a caller-supplied MVP matrix.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - 2D vertex shaders convert to NDC using a viewport uniform.
//! - The cube shader transforms positions by the MVP uniform.

mod ctx;
mod hooks;

pub mod cube;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use hooks::RenderHooks;
