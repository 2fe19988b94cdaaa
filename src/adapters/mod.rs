// Adapters layer: concrete implementations of the domain ports.

pub mod diagnostics;
pub mod template_renderer;
