//! Final Cut Pro XML (`xmeml`) adapter.
//!
//! A video clip is a `track/clipitem` with a `pixelaspectratio` child. Its
//! media is described by a `file` child holding `name` and `pathurl`. The
//! first use of a file carries the full description; later clips using the
//! same media only carry `<file id="..."/>`.

use std::collections::HashMap;

use clipswap_common::{Error, Result};
use clipswap_xml::{Document, Element};

use super::pathurl::rewrite_pathurl;
use super::{resolve_replacement, RelinkContext, RelinkSummary, Replacement};
use crate::pool::CandidatePool;

const CLIP_PATH: &str = "track/clipitem";

/// The identity fields of a fully described `file` element.
struct FileReference {
    id: Option<String>,
    name: String,
    pathurl: String,
}

impl FileReference {
    fn read(file: &Element, clip_id: &str) -> Result<Self> {
        let name = file
            .child("name")
            .ok_or_else(|| Error::malformed_clip(format!("clip {} file has no <name>", clip_id)))?
            .text();

        let pathurl = file
            .child("pathurl")
            .map(Element::text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                Error::malformed_clip(format!("clip {} file '{}' has no <pathurl>", clip_id, name))
            })?;

        Ok(Self {
            id: file.attribute("id").map(str::to_string),
            name,
            pathurl,
        })
    }
}

/// Relink every video clip in an FCP document.
///
/// Each accepted candidate is removed from `pool`, so a replacement file is
/// used by at most one clip definition.
pub fn relink_clips(
    doc: &mut Document,
    pool: &mut CandidatePool,
    ctx: &mut RelinkContext<'_>,
) -> Result<RelinkSummary> {
    let mut summary = RelinkSummary::default();
    // file id -> (original name, replacement name)
    let mut relinked_files: HashMap<String, (String, String)> = HashMap::new();

    for path in doc.select_descendants(CLIP_PATH) {
        let Some(clip) = doc.get_mut(&path) else {
            continue;
        };
        if clip.child("pixelaspectratio").is_none() {
            continue;
        }
        let clip_id = clip.attribute("id").unwrap_or("clipitem").to_string();

        let Some(file) = clip.child("file") else {
            ctx.diagnostics
                .debug(&format!("Clip {} has no file element, skipping", clip_id));
            summary.skipped += 1;
            continue;
        };

        if is_back_reference(file) {
            continue;
        }

        let reference = FileReference::read(file, &clip_id)?;

        if reference.name.is_empty() {
            ctx.diagnostics
                .warn(&format!("Clip {} name is missing, skipping", clip_id));
            summary.skipped += 1;
            continue;
        }

        let Some(candidate) = pool.choose(&reference.name) else {
            ctx.diagnostics
                .warn(&format!("No replacement found for {}", reference.name));
            summary.skipped += 1;
            continue;
        };

        let prompt = format!("Replace {} with {}?", reference.name, candidate);
        if !ctx.confirm.confirm(&prompt) {
            ctx.diagnostics
                .info(&format!("Skipping {}", reference.name));
            summary.skipped += 1;
            continue;
        }

        pool.take(&candidate);
        let full_path = resolve_replacement(ctx.finals_dir, &candidate)?;
        let pathurl = rewrite_pathurl(&reference.pathurl, &full_path)?;

        rename_clip(clip, &reference.name, &candidate);
        if let Some(file) = clip.child_mut("file") {
            if let Some(name) = file.child_mut("name") {
                name.set_text(candidate.as_str());
            }
            if let Some(url) = file.child_mut("pathurl") {
                url.set_text(pathurl);
            }
        }

        ctx.diagnostics
            .info(&format!("Replaced {} with {}", reference.name, candidate));
        if let Some(id) = reference.id {
            relinked_files.insert(id, (reference.name.clone(), candidate.clone()));
        }
        summary.replaced.push(Replacement {
            original: reference.name,
            replacement: candidate,
            path: full_path,
        });
    }

    rename_linked_clips(doc, &relinked_files);
    Ok(summary)
}

/// Carry relinked names over to every clip sharing a relinked file id,
/// including audio clips linked to the same media.
fn rename_linked_clips(doc: &mut Document, relinked_files: &HashMap<String, (String, String)>) {
    if relinked_files.is_empty() {
        return;
    }

    for path in doc.select_descendants(CLIP_PATH) {
        let Some(clip) = doc.get_mut(&path) else {
            continue;
        };
        let Some(file_id) = clip
            .child("file")
            .and_then(|file| file.attribute("id"))
            .map(str::to_string)
        else {
            continue;
        };
        if let Some((original, replacement)) = relinked_files.get(&file_id) {
            rename_clip(clip, original, replacement);
        }
    }
}

/// `<file id="..."/>` pointing at a file described earlier in the document.
fn is_back_reference(file: &Element) -> bool {
    file.attribute("id").is_some() && file.child_elements().next().is_none()
}

/// Rename the clip itself, but only when its name still matches the file it
/// was created from.
fn rename_clip(clip: &mut Element, original: &str, replacement: &str) {
    if let Some(name) = clip.child_mut("name") {
        if name.text() == original {
            name.set_text(replacement);
        }
    }
}
