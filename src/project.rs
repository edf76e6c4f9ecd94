//! Loading and saving NLE project documents.

use std::path::{Path, PathBuf};

use clipswap_common::{Error, Result};
use clipswap_xml::{read_project, write_project, Compression, Document, XmlError};

/// Declaration written ahead of Premiere output.
const PREMIERE_PREAMBLE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n";

/// Declaration and DOCTYPE written ahead of Final Cut Pro output.
const FCP_PREAMBLE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE xmeml>\n";

/// Supported project formats, identified by root element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    /// Final Cut Pro XML (`<xmeml>`)
    FinalCutPro,
    /// Premiere Pro project XML (`<PremiereData>`)
    Premiere,
}

impl std::fmt::Display for ProjectFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectFormat::FinalCutPro => write!(f, "Final Cut Pro XML"),
            ProjectFormat::Premiere => write!(f, "Premiere Pro XML"),
        }
    }
}

impl ProjectFormat {
    /// Identify the format from the document's root tag.
    pub fn detect(root_name: &str) -> Result<Self> {
        match root_name {
            "xmeml" => Ok(ProjectFormat::FinalCutPro),
            "PremiereData" => Ok(ProjectFormat::Premiere),
            other => Err(Error::UnrecognizedFormat(other.to_string())),
        }
    }

    pub fn preamble(self) -> &'static str {
        match self {
            ProjectFormat::FinalCutPro => FCP_PREAMBLE,
            ProjectFormat::Premiere => PREMIERE_PREAMBLE,
        }
    }

    /// Container for output. FCP is always written plain; Premiere keeps the
    /// input's compression when `recompress` is set.
    pub fn output_compression(self, input: Compression, recompress: bool) -> Compression {
        match self {
            ProjectFormat::FinalCutPro => Compression::Plain,
            ProjectFormat::Premiere if recompress => input,
            ProjectFormat::Premiere => Compression::Plain,
        }
    }
}

/// A project document opened from disk
#[derive(Debug, Clone)]
pub struct Project {
    pub path: PathBuf,
    pub document: Document,
    pub compression: Compression,
    pub format: ProjectFormat,
}

impl Project {
    /// Read, decompress if needed, parse, and detect the format of `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ProjectNotFound(path.to_path_buf()));
        }

        let (document, compression) = read_project(path).map_err(project_error)?;
        let format = ProjectFormat::detect(document.root().name())?;
        tracing::info!("Detected {} project ({})", format, compression);

        Ok(Self {
            path: path.to_path_buf(),
            document,
            compression,
            format,
        })
    }

    /// Write the (possibly edited) document to `output`.
    pub fn save(&self, output: &Path, recompress: bool) -> Result<()> {
        let compression = self.format.output_compression(self.compression, recompress);
        write_project(output, &self.document, self.format.preamble(), compression)
            .map_err(project_error)
    }
}

fn project_error(err: XmlError) -> Error {
    match err {
        XmlError::Io(io) => Error::Io(io),
        other => Error::invalid_project(other.to_string()),
    }
}
