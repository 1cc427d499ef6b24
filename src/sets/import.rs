// src/sets/import.rs
// fetch page → fragments → set text → clipboard → paste-import → summary alert

use thiserror::Error;

use crate::config::consts::CONTRIBUTIONS_FORUM;
use crate::config::options::ImportOptions;
use crate::core::net::{NetError, PageSource};
use crate::host::{AlertSink, ClipboardSink, PasteImport, PasteOutcome};

use super::fragment::extract_fragments;
use super::showdown::{aggregate, CanonicalSetText};
use super::slug::SetTarget;
use super::titles::{extract_titles, has_strategies, FormatTitles};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not fetch {url}: {cause}")]
    FetchFailed {
        url: String,
        #[source]
        cause: NetError,
    },
    #[error("no movesets available for {label} ({url})")]
    NoSetsFound { label: String, url: String },
}

impl ImportError {
    /// Text shown to the user, with a hint on what to do next.
    pub fn user_message(&self) -> String {
        match self {
            ImportError::FetchFailed { url, cause } => format!(
                "An error occurred while trying to obtain the contents of the URL. \
                 This is most likely an issue with your Internet connection. \
                 The exact error is as follows: {cause}\nURL tried to access: {url}"
            ),
            ImportError::NoSetsFound { label, .. } => format!(
                "No movesets available for {label}. Perhaps you could help out? \
                 Check the Contributions & Corrections forum.\n\nForum: {CONTRIBUTIONS_FORUM}"
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImportReport {
    pub label: String,
    pub url: String,
    pub set_count: usize,
    pub titles: Vec<FormatTitles>,
    pub text: String,
    pub paste: PasteOutcome,
}

pub struct MovesetImporter<'a> {
    opts: &'a ImportOptions,
    source: &'a dyn PageSource,
}

impl<'a> MovesetImporter<'a> {
    pub fn new(opts: &'a ImportOptions, source: &'a dyn PageSource) -> Self {
        Self { opts, source }
    }

    /// Fetch and convert without touching any host collaborator.
    pub fn generate(&self, target: &SetTarget) -> Result<ImportReport, ImportError> {
        let url = target.url(self.opts);
        let label = target.label(self.opts.form_guard);
        logf!("sets: {label} from {url}");

        let page = self
            .source
            .fetch(&url)
            .map_err(|cause| ImportError::FetchFailed { url: url.clone(), cause })?;

        let fragments = extract_fragments(&page);
        if fragments.is_empty() {
            return Err(ImportError::NoSetsFound { label, url });
        }
        if !has_strategies(&page) {
            logw!("sets: {url} has sets but no strategies section");
        }

        let sets: Vec<CanonicalSetText> = fragments
            .iter()
            .map(|f| CanonicalSetText::from_fragment(&label, f))
            .collect();

        Ok(ImportReport {
            set_count: sets.len(),
            text: aggregate(&sets),
            titles: extract_titles(&page),
            paste: PasteOutcome::Ok,
            label,
            url,
        })
    }

    /// Full import: generate, fill the clipboard, run paste-import, send the
    /// summary. The clipboard is only written once at least one set exists.
    /// A failed paste-import is reported as a warning and does not fail the call.
    pub fn import(
        &self,
        target: &SetTarget,
        clipboard: &mut dyn ClipboardSink,
        alerts: &mut dyn AlertSink,
        paste: &mut dyn PasteImport,
    ) -> Result<ImportReport, ImportError> {
        let mut report = self.generate(target)?;

        clipboard.set_text(&report.text);

        report.paste = paste.paste_import();
        if let PasteOutcome::Failed(reason) = &report.paste {
            loge!("sets: paste-import failed: {reason}");
            alert!(alerts, "Something went wrong while importing the sets.");
        }

        alert!(alerts, "{}", summary_text(&report.label, report.set_count, &report.titles));
        Ok(report)
    }
}

/// ```text
/// Garchomp:
///
/// OU: Swords Dance, Choice Scarf
///
/// 2 sets generated for Garchomp
/// ```
pub fn summary_text(label: &str, count: usize, titles: &[FormatTitles]) -> String {
    let mut out = join!(label, ":\n\n");
    for ft in titles {
        out.push_str(&format!("{}: {}\n", ft.format, ft.titles.join(", ")));
    }
    out.push_str(&format!("\n{count} sets generated for {label}"));
    out
}

/// `MovesetImporter::import`, with any failure also reported through `alerts`.
pub fn import_and_report(
    importer: &MovesetImporter<'_>,
    target: &SetTarget,
    clipboard: &mut dyn ClipboardSink,
    alerts: &mut dyn AlertSink,
    paste: &mut dyn PasteImport,
) -> Result<ImportReport, ImportError> {
    importer
        .import(target, clipboard, alerts, paste)
        .inspect_err(|e| {
            loge!("sets: {e}");
            alerts.alert(&e.user_message());
        })
}
