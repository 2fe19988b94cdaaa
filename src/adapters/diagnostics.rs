use crate::domain::model::FieldDisplay;
use crate::domain::ports::LinkDiagnostics;
use std::sync::Mutex;

/// Default diagnostics: log through `tracing` and carry on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl LinkDiagnostics for TracingDiagnostics {
    fn missing_view(&self, value: &FieldDisplay) {
        tracing::warn!(
            "⚠️ Field value '{}' has no data view; resolving links without context",
            value.name
        );
    }

    fn missing_field(&self, value: &FieldDisplay, col_index: usize) {
        tracing::warn!(
            "⚠️ Field value '{}' points at column {} which is not in its frame",
            value.name,
            col_index
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    MissingView { value_name: String },
    MissingField { value_name: String, col_index: usize },
}

/// Keeps every reported event in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: DiagnosticEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl LinkDiagnostics for RecordingDiagnostics {
    fn missing_view(&self, value: &FieldDisplay) {
        self.push(DiagnosticEvent::MissingView {
            value_name: value.name.clone(),
        });
    }

    fn missing_field(&self, value: &FieldDisplay, col_index: usize) {
        self.push(DiagnosticEvent::MissingField {
            value_name: value.name.clone(),
            col_index,
        });
    }
}
