//! GPU rendering subsystem.
//!
//! Draw lists are tessellated on the CPU into one colored triangle list and
//! drawn by a single wgpu pipeline.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod mesh;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
