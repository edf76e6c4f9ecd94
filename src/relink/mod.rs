//! Format adapters that point clip references at replacement media.
//!
//! Each adapter walks its document format, asks the pool for a prefix match
//! per clip, and rewrites the nodes holding that clip's file identity.
//! Problems confined to a single clip are reported to the diagnostics sink
//! and the clip is left untouched; document integrity problems abort with
//! an error.

pub mod fcp;
pub mod pathurl;
pub mod premiere;

use std::path::{Path, PathBuf};

use clipswap_common::{Error, Result};

use crate::interact::{Confirm, Diagnostics};
use crate::pool::CandidatePool;
use crate::project::{Project, ProjectFormat};

/// Behaviour switches for a relink pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelinkOptions {
    /// Premiere: leave matched candidates in the pool so other `Media`
    /// entries can match them too. FCP always consumes.
    pub allow_candidate_reuse: bool,

    /// Premiere: rename echo nodes even when some path fields of the `Media`
    /// element were missing.
    pub propagate_partial_updates: bool,
}

impl Default for RelinkOptions {
    fn default() -> Self {
        Self {
            allow_candidate_reuse: true,
            propagate_partial_updates: true,
        }
    }
}

/// Everything an adapter needs besides the document and the pool.
pub struct RelinkContext<'a> {
    /// Canonical directory the candidates were listed from.
    pub finals_dir: &'a Path,
    /// Directory containing the project file.
    pub project_dir: &'a Path,
    pub options: RelinkOptions,
    pub confirm: &'a mut dyn Confirm,
    pub diagnostics: &'a mut dyn Diagnostics,
}

/// One applied replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub original: String,
    pub replacement: String,
    pub path: PathBuf,
}

/// Outcome of a relink pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelinkSummary {
    pub replaced: Vec<Replacement>,
    pub skipped: usize,
}

/// Run the adapter matching the project's format.
pub fn relink(
    project: &mut Project,
    pool: &mut CandidatePool,
    ctx: &mut RelinkContext<'_>,
) -> Result<RelinkSummary> {
    match project.format {
        ProjectFormat::FinalCutPro => fcp::relink_clips(&mut project.document, pool, ctx),
        ProjectFormat::Premiere => premiere::relink_media(&mut project.document, pool, ctx),
    }
}

/// Absolute path of `candidate` inside `finals_dir`, which must be an
/// existing regular file.
pub(crate) fn resolve_replacement(finals_dir: &Path, candidate: &str) -> Result<PathBuf> {
    let joined = finals_dir.join(candidate);
    match joined.canonicalize() {
        Ok(full) if full.is_file() => Ok(full),
        _ => Err(Error::MissingReplacement(joined)),
    }
}
