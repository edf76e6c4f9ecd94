//! `pathurl` rewriting for Final Cut Pro file references.
//!
//! FCP stores media locations as URLs such as
//! `file://localhost/Volumes/Media/A001.mov`. Only the path part changes;
//! scheme and authority stay as they were.

use std::path::Path;

use clipswap_common::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in the path component of a URL.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Replace the path of `original` with `new_path`, keeping its scheme and
/// authority (host, possibly empty).
pub fn rewrite_pathurl(original: &str, new_path: &Path) -> Result<String> {
    let (scheme, rest) = original
        .split_once("://")
        .filter(|(scheme, _)| !scheme.is_empty())
        .ok_or_else(|| Error::malformed_clip(format!("pathurl '{}' has no scheme", original)))?;

    let authority = match rest.find('/') {
        Some(index) => &rest[..index],
        None => rest,
    };

    let mut path = new_path.to_string_lossy().replace('\\', "/");
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    Ok(format!(
        "{}://{}{}",
        scheme,
        authority,
        utf8_percent_encode(&path, PATH_ENCODE_SET)
    ))
}
