// src/host.rs
//! Seams to the editor that embeds this crate.
//!
//! The editor owns the clipboard, the message boxes and the paste-import
//! action. The CLI implements these over stdout/stderr; tests record calls.

/// Receives the aggregated set text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str);
}

/// User-facing notifications. Used for summaries and for error reports alike.
pub trait AlertSink {
    fn alert(&mut self, msg: &str);
}

/// Result of the editor's "import from clipboard" action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasteOutcome {
    Ok,
    Failed(String),
}

/// The editor action run right after the clipboard is populated.
pub trait PasteImport {
    fn paste_import(&mut self) -> PasteOutcome;
}

/// Alerts collected in memory, in order.
impl AlertSink for Vec<String> {
    fn alert(&mut self, msg: &str) {
        self.push(msg.to_string());
    }
}

/// Clipboard that keeps the last text it was given.
impl ClipboardSink for Option<String> {
    fn set_text(&mut self, text: &str) {
        *self = Some(text.to_string());
    }
}

/// For hosts without a paste-import action.
pub struct NoPasteImport;
impl PasteImport for NoPasteImport {
    fn paste_import(&mut self) -> PasteOutcome {
        PasteOutcome::Ok
    }
}
