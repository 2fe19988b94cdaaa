use crate::domain::model::{DataLink, FieldDisplay, LinkModel, PanelModel};
use crate::domain::scoped_vars::ScopedVars;
use crate::utils::error::Result;

/// What a link was requested for; handed to the renderer untouched.
#[derive(Debug, Clone, Copy)]
pub enum LinkOrigin<'a> {
    Field(&'a FieldDisplay),
    Panel(&'a PanelModel),
}

/// Turns a link template plus substitution variables into a resolved link.
pub trait LinkRenderer: Send + Sync {
    fn data_link_model(
        &self,
        link: &DataLink,
        scoped_vars: &ScopedVars,
        origin: LinkOrigin<'_>,
    ) -> Result<LinkModel>;
}

/// Lazily produces resolved links; called at render or hover time.
pub trait LinkModelSupplier {
    fn get_links(&self) -> Result<Vec<LinkModel>>;
}

/// Receives anomalies noticed while building a link context. Building always continues.
pub trait LinkDiagnostics: Send + Sync {
    fn missing_view(&self, value: &FieldDisplay);
    fn missing_field(&self, value: &FieldDisplay, col_index: usize);
}
