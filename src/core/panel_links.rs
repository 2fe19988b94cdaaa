use crate::domain::model::{LinkModel, PanelModel};
use crate::domain::ports::{LinkModelSupplier, LinkOrigin, LinkRenderer};
use crate::utils::error::Result;

/// Link supplier for a panel's own links, rendered with the panel's variables.
pub struct PanelLinksSupplier<'a, R: LinkRenderer + ?Sized> {
    panel: &'a PanelModel,
    renderer: &'a R,
}

pub fn get_panel_links_supplier<'a, R: LinkRenderer + ?Sized>(
    panel: &'a PanelModel,
    renderer: &'a R,
) -> Option<PanelLinksSupplier<'a, R>> {
    if panel.links.is_empty() {
        return None;
    }

    Some(PanelLinksSupplier { panel, renderer })
}

impl<R: LinkRenderer + ?Sized> LinkModelSupplier for PanelLinksSupplier<'_, R> {
    fn get_links(&self) -> Result<Vec<LinkModel>> {
        tracing::debug!(
            "Resolving {} links for panel {}",
            self.panel.links.len(),
            self.panel.id
        );

        self.panel
            .links
            .iter()
            .map(|link| {
                self.renderer.data_link_model(
                    link,
                    &self.panel.scoped_vars,
                    LinkOrigin::Panel(self.panel),
                )
            })
            .collect()
    }
}
