//! Plain vs gzip-compressed project containers

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::document::Document;
use crate::error::XmlError;
use crate::reader::parse_document;
use crate::writer::write_document;

/// How a project file is stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Uncompressed XML text
    Plain,
    /// gzip stream wrapping XML text
    Gzip,
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::Plain => write!(f, "plain"),
            Compression::Gzip => write!(f, "gzip"),
        }
    }
}

/// Detect compression by trying to read one byte through a gzip decoder.
///
/// Anything the decoder rejects is treated as plain text.
pub fn detect_compression(bytes: &[u8]) -> Compression {
    let mut decoder = GzDecoder::new(bytes);
    let mut peek = [0u8; 1];
    match decoder.read(&mut peek) {
        Ok(n) if n > 0 => Compression::Gzip,
        _ => Compression::Plain,
    }
}

/// Decode raw file bytes to XML text according to `compression`.
pub fn decode(bytes: Vec<u8>, compression: Compression) -> Result<String, XmlError> {
    let raw = match compression {
        Compression::Plain => bytes,
        Compression::Gzip => {
            let mut decoded = Vec::new();
            GzDecoder::new(bytes.as_slice()).read_to_end(&mut decoded)?;
            decoded
        }
    };
    Ok(String::from_utf8(raw)?)
}

/// Read and parse a project file, reporting how it was stored.
pub fn read_project(path: &Path) -> Result<(Document, Compression), XmlError> {
    let bytes = std::fs::read(path)?;
    let compression = detect_compression(&bytes);
    tracing::debug!("Project container for {:?}: {}", path, compression);

    let text = decode(bytes, compression)?;
    let doc = parse_document(&text)?;
    Ok((doc, compression))
}

/// Serialize `doc` behind `preamble` to `path`, compressing if requested.
pub fn write_project(
    path: &Path,
    doc: &Document,
    preamble: &str,
    compression: Compression,
) -> Result<(), XmlError> {
    let file = BufWriter::new(File::create(path)?);

    match compression {
        Compression::Plain => write_document(doc, preamble, file)?,
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(file, flate2::Compression::default());
            write_document(doc, preamble, &mut encoder)?;
            encoder.finish()?.flush()?;
        }
    }

    tracing::debug!("Wrote {} project to {:?}", compression, path);
    Ok(())
}
