//! Premiere Pro project XML (`PremiereData`) adapter.
//!
//! Media files are described by top-level `Media` elements. The display
//! name is repeated in project items, master clips, logging info and
//! subclips elsewhere in the document; those echoes are renamed to match.

use clipswap_common::paths::relative_path;
use clipswap_common::Result;
use clipswap_xml::{Document, ElementPath};

use super::{RelinkContext, RelinkSummary, Replacement};
use crate::pool::CandidatePool;

/// Elements anywhere in the document that repeat a media's display name.
const ECHO_PATHS: [&str; 4] = [
    "ClipProjectItem/ProjectItem/Name",
    "MasterClip/Name",
    "ClipLoggingInfo/ClipName",
    "SubClip/Name",
];

const FILE_PATH: &str = "FilePath";
const RELATIVE_PATH: &str = "RelativePath";
const ACTUAL_MEDIA_FILE_PATH: &str = "ActualMediaFilePath";

/// Relink every top-level `Media` element of a Premiere document.
///
/// Premiere has no confirmation step; every match is applied.
pub fn relink_media(
    doc: &mut Document,
    pool: &mut CandidatePool,
    ctx: &mut RelinkContext<'_>,
) -> Result<RelinkSummary> {
    let mut summary = RelinkSummary::default();

    for path in doc.select_children("Media") {
        let Some(media) = doc.get_mut(&path) else {
            continue;
        };

        let Some(title) = media.child("Title").map(|el| el.text()) else {
            ctx.diagnostics.warn("Media element has no Title, skipping");
            summary.skipped += 1;
            continue;
        };

        let Some(candidate) = pool.choose(&title) else {
            ctx.diagnostics
                .warn(&format!("No replacement found for {}", title));
            summary.skipped += 1;
            continue;
        };

        if !ctx.options.allow_candidate_reuse {
            pool.take(&candidate);
        }

        let absolute = ctx.finals_dir.join(&candidate);
        let absolute_text = absolute.to_string_lossy().into_owned();
        let relative_text = relative_path(&absolute, ctx.project_dir)
            .to_string_lossy()
            .into_owned();

        if let Some(el) = media.child_mut("Title") {
            el.set_text(candidate.as_str());
        }

        let mut missing = Vec::new();
        for (field, value) in [
            (FILE_PATH, &absolute_text),
            (RELATIVE_PATH, &relative_text),
            (ACTUAL_MEDIA_FILE_PATH, &absolute_text),
        ] {
            match media.child_mut(field) {
                Some(el) => el.set_text(value.as_str()),
                None => {
                    ctx.diagnostics
                        .warn(&format!("Media {} has no {}, leaving it unset", title, field));
                    missing.push(field);
                }
            }
        }

        if missing.is_empty() || ctx.options.propagate_partial_updates {
            let echoed = propagate_name(doc, &title, &candidate);
            ctx.diagnostics.debug(&format!(
                "Renamed {} echo node(s) of {} to {}",
                echoed, title, candidate
            ));
        } else {
            ctx.diagnostics.warn(&format!(
                "Not renaming other references to {}: missing {}",
                title,
                missing.join(", ")
            ));
        }

        ctx.diagnostics
            .info(&format!("Replaced {} with {}", title, candidate));
        summary.replaced.push(Replacement {
            original: title,
            replacement: candidate,
            path: absolute,
        });
    }

    Ok(summary)
}

/// Rename every echo node whose text is exactly `original`. All matches are
/// collected before any is changed. Returns how many were renamed.
fn propagate_name(doc: &mut Document, original: &str, replacement: &str) -> usize {
    let targets: Vec<ElementPath> = ECHO_PATHS
        .iter()
        .flat_map(|path| doc.select_descendants(path))
        .filter(|path| doc.get(path).is_some_and(|el| el.text() == original))
        .collect();

    for path in &targets {
        if let Some(el) = doc.get_mut(path) {
            el.set_text(replacement);
        }
    }
    targets.len()
}
