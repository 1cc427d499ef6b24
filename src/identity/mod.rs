// src/identity/mod.rs
mod record;
mod resolve;
mod sidecar;
mod trainer;

pub use record::{apply_identity, apply_regions, is_placeholder, ApplyOutcome, Placeholder, PkmRecord, TrainerRecord, PLACEHOLDERS};
pub use resolve::{IdentityResolver, IdentitySource, LoadedSave, Resolved, SaveTrainer};
pub use sidecar::{parse_line_sidecar, LineSidecar, Mode, RawTrainer, SidecarError, StructuredSidecar};
pub use trainer::{legacy_from_wide, looks_wide, parse_id_pair, wide_from_legacy, Gender, IdError, Regions, TrainerIdentity};
