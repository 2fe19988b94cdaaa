use crate::adapters::diagnostics::TracingDiagnostics;
use crate::core::exemplar::exemplar_at;
use crate::domain::model::{DataFrameView, FieldDisplay, FieldValue, LinkModel};
use crate::domain::ports::{LinkDiagnostics, LinkModelSupplier, LinkOrigin, LinkRenderer};
use crate::domain::scoped_vars::{
    CalculationValueVars, DataLinkScopedVars, FieldVars, RowValueVars, SeriesVars, ValueVars,
};
use crate::utils::error::Result;

/// Link supplier for a single displayed field value.
pub struct FieldLinksSupplier<'a, R: LinkRenderer + ?Sized> {
    value: &'a FieldDisplay,
    compare_view: Option<&'a DataFrameView>,
    renderer: &'a R,
    diagnostics: &'a dyn LinkDiagnostics,
}

/// Returns a supplier for the links configured on `value`'s field, or `None`
/// when the field has no links.
pub fn get_field_links_supplier<'a, R: LinkRenderer + ?Sized>(
    value: &'a FieldDisplay,
    compare_view: Option<&'a DataFrameView>,
    renderer: &'a R,
) -> Option<FieldLinksSupplier<'a, R>> {
    if !value.has_links() {
        return None;
    }

    Some(FieldLinksSupplier {
        value,
        compare_view,
        renderer,
        diagnostics: &TracingDiagnostics,
    })
}

impl<'a, R: LinkRenderer + ?Sized> FieldLinksSupplier<'a, R> {
    pub fn with_diagnostics(mut self, diagnostics: &'a dyn LinkDiagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Builds the `__series` / `__field` / `__value` context for the value.
    pub fn build_scoped_vars(&self) -> DataLinkScopedVars {
        let value = self.value;
        let mut vars = DataLinkScopedVars::default();

        let Some(view) = &value.view else {
            self.diagnostics.missing_view(value);
            return vars;
        };
        let frame = view.data_frame();

        vars.series = Some(SeriesVars {
            name: frame.name.clone(),
            labels: frame.labels.clone(),
            ref_id: frame.ref_id.clone(),
        });

        let field = value.col_index.and_then(|col| {
            let field = frame.field(col);
            if field.is_none() {
                self.diagnostics.missing_field(value, col);
            }
            field
        });
        if let Some(field) = field {
            vars.field = Some(FieldVars {
                name: field.name.clone(),
            });
        }

        vars.value = Some(match value.row_index {
            Some(row) => {
                let compare_exemplar = self
                    .compare_view
                    .and_then(|compare| exemplar_at(compare.data_frame(), row));

                ValueVars::Row(RowValueVars {
                    raw: field
                        .and_then(|f| f.value_at(row))
                        .cloned()
                        .unwrap_or(FieldValue::Null),
                    numeric: value.display.numeric,
                    text: value.display.text.clone(),
                    time: frame
                        .time_field()
                        .and_then(|t| t.value_at(row))
                        .cloned(),
                    exemplar: exemplar_at(frame, row),
                    comparison_exemplar: compare_exemplar,
                })
            }
            None => ValueVars::Calculation(CalculationValueVars {
                raw: value.display.numeric,
                numeric: value.display.numeric,
                text: value.display.text.clone(),
                calculation_name: value.name.clone(),
            }),
        });

        tracing::debug!(
            "Built link context for '{}' (field: {}, row: {:?})",
            value.name,
            vars.field.is_some(),
            value.row_index
        );
        vars
    }
}

impl<R: LinkRenderer + ?Sized> LinkModelSupplier for FieldLinksSupplier<'_, R> {
    fn get_links(&self) -> Result<Vec<LinkModel>> {
        let scoped_vars = self.build_scoped_vars().to_scoped_vars()?;

        self.value
            .field
            .links
            .iter()
            .map(|link| {
                self.renderer
                    .data_link_model(link, &scoped_vars, LinkOrigin::Field(self.value))
            })
            .collect()
    }
}
