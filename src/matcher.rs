//! Prefix matching between existing clip names and replacement files.
//!
//! A candidate matches when the clip's current name, case-folded, starts
//! with the candidate's case-folded file stem. Candidates are tried in the
//! order given and the first match wins, so results depend on that order.

use std::path::Path;

/// Pick the first candidate whose stem is a case-insensitive prefix of
/// `current_name`.
///
/// Candidates identical to `current_name` are never returned.
///
/// # Examples
///
/// ```
/// use clipswap::matcher::choose_replacement;
///
/// let pool = ["petropics-873123292.mp4"];
/// assert_eq!(
///     choose_replacement("PetroPics-873123292-640_adpp.mov", &pool),
///     Some("petropics-873123292.mp4")
/// );
/// assert_eq!(choose_replacement("abc.mov", &["xyz.mov"]), None);
/// ```
pub fn choose_replacement<'a, S: AsRef<str>>(current_name: &str, candidates: &'a [S]) -> Option<&'a str> {
    let folded = current_name.to_lowercase();

    candidates
        .iter()
        .map(<S as AsRef<str>>::as_ref)
        .filter(|candidate| *candidate != current_name)
        .find(|candidate| match candidate_stem(candidate) {
            Some(stem) => folded.starts_with(&stem.to_lowercase()),
            None => false,
        })
}

/// Final path segment of `candidate` with its extension removed.
fn candidate_stem(candidate: &str) -> Option<&str> {
    Path::new(candidate).file_stem().and_then(|s| s.to_str())
}
