// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub import: ImportOptions,
    pub identity: IdentityOptions,
}

/// How a form qualifier is treated when building the URL slug and set header.
///
/// Existing set files were produced with a guard of
/// `form != "Mega" || form != ""`, which is always true, so every non-empty
/// form gets appended. `AsObserved` keeps that. `SkipMarker` drops the
/// "Mega" marker instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormGuard {
    #[default]
    AsObserved,
    SkipMarker,
}

pub const FORM_GUARD_MARKER: &str = "Mega";

impl FormGuard {
    /// The form to use, or `None` when it should be left off entirely.
    pub fn effective<'a>(&self, form: Option<&'a str>) -> Option<&'a str> {
        let form = form.map(str::trim).filter(|f| !f.is_empty())?;
        match self {
            FormGuard::AsObserved => Some(form),
            FormGuard::SkipMarker if form == FORM_GUARD_MARKER => None,
            FormGuard::SkipMarker => Some(form),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    pub base_url: String,
    pub dex_gen: String,
    pub timeout: Duration,
    pub form_guard: FormGuard,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEX_BASE_URL),
            dex_gen: s!(DEFAULT_DEX_GEN),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            form_guard: FormGuard::AsObserved,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityOptions {
    /// Directory holding trainerdata.json / trainerdata.txt.
    pub sidecar_dir: PathBuf,
}

impl Default for IdentityOptions {
    fn default() -> Self {
        Self { sidecar_dir: exe_dir() }
    }
}

impl IdentityOptions {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { sidecar_dir: dir.into() }
    }

    pub fn structured_path(&self) -> PathBuf {
        self.sidecar_dir.join(STRUCTURED_SIDECAR)
    }

    pub fn line_path(&self) -> PathBuf {
        self.sidecar_dir.join(LINE_SIDECAR)
    }
}

/// Directory of the running executable, or "." if that can't be determined.
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_guard_keeps_every_nonempty_form() {
        let g = FormGuard::AsObserved;
        assert_eq!(g.effective(Some("Mega")), Some("Mega"));
        assert_eq!(g.effective(Some("Alola")), Some("Alola"));
        assert_eq!(g.effective(Some("")), None);
        assert_eq!(g.effective(Some("  ")), None);
        assert_eq!(g.effective(None), None);
    }

    #[test]
    fn skip_marker_drops_mega_only() {
        let g = FormGuard::SkipMarker;
        assert_eq!(g.effective(Some("Mega")), None);
        assert_eq!(g.effective(Some("Alola")), Some("Alola"));
    }

    #[test]
    fn sidecar_paths_join_dir() {
        let o = IdentityOptions::with_dir("/tmp/x");
        assert!(o.structured_path().ends_with("trainerdata.json"));
        assert!(o.line_path().ends_with("trainerdata.txt"));
    }
}
