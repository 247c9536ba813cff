//! Concrete drawing targets.

mod framebuffer;

pub use framebuffer::FrameBuffer;
