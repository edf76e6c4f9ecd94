//! Path utilities for output naming and project-relative media references.
//!
//! Premiere projects store each media file twice: once absolute and once
//! relative to the directory holding the project file. These helpers compute
//! both sides without touching the filesystem.

use std::path::{Component, Path, PathBuf};

/// Default suffix appended to the project file stem for derived output paths.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_replaced";

/// Derive an output path by inserting `suffix` between the project file's
/// stem and its extension.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use clipswap_common::paths::derived_output_path;
///
/// assert_eq!(
///     derived_output_path(Path::new("/edits/promo.xml"), "_replaced"),
///     PathBuf::from("/edits/promo_replaced.xml")
/// );
/// assert_eq!(
///     derived_output_path(Path::new("/edits/promo"), "_replaced"),
///     PathBuf::from("/edits/promo_replaced")
/// );
/// ```
pub fn derived_output_path(project: &Path, suffix: &str) -> PathBuf {
    let stem = project
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match project.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    project.with_file_name(file_name)
}

/// Compute `target` relative to the directory `base`.
///
/// Both paths are expected to be absolute and already normalized
/// (canonicalized by the caller). Shared leading components are dropped and
/// each remaining component of `base` becomes a `..`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use clipswap_common::paths::relative_path;
///
/// assert_eq!(
///     relative_path(Path::new("/work/finals/a.mp4"), Path::new("/work/projects")),
///     PathBuf::from("../finals/a.mp4")
/// );
/// assert_eq!(
///     relative_path(Path::new("/work/finals/a.mp4"), Path::new("/work")),
///     PathBuf::from("finals/a.mp4")
/// );
/// ```
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let shared = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[shared..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}
