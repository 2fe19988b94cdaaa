pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, LinkTargetKind};

pub use crate::adapters::{diagnostics::TracingDiagnostics, template_renderer::TemplateLinkRenderer};
pub use crate::config::PreviewConfig;
pub use crate::core::{
    exemplar::{exemplar_at, parse_exemplar},
    field_links::{get_field_links_supplier, FieldLinksSupplier},
    panel_links::{get_panel_links_supplier, PanelLinksSupplier},
};
pub use crate::domain::ports::{LinkDiagnostics, LinkModelSupplier, LinkOrigin, LinkRenderer};
pub use crate::utils::error::{LinkError, Result};
