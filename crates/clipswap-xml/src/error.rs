//! Error types for clipswap-xml

/// Errors that can occur while reading or writing a project document
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the XML event reader or writer
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document is not well formed
    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// The decoded content is not valid UTF-8
    #[error("Project content is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The document has no root element
    #[error("Document has no root element")]
    NoRoot,
}

impl XmlError {
    pub(crate) fn malformed<S: Into<String>>(position: u64, message: S) -> Self {
        Self::Malformed {
            position,
            message: message.into(),
        }
    }
}
