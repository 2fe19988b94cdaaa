pub mod exemplar;
pub mod field_links;
pub mod panel_links;

pub use crate::domain::model::{DataLink, FieldDisplay, LinkModel, PanelModel};
pub use crate::domain::ports::{LinkDiagnostics, LinkModelSupplier, LinkOrigin, LinkRenderer};
pub use crate::utils::error::Result;
