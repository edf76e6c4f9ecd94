//! # clipswap-xml
//!
//! A small owned XML tree for rewriting non-linear editor project files.
//!
//! Project files from Final Cut Pro (`xmeml`) and Premiere Pro
//! (`PremiereData`) are read into a [`Document`], edited in place, and
//! written back out behind a caller-chosen preamble. Premiere projects are
//! usually gzip-compressed; [`container`] detects and restores that.
//!
//! ## Example
//!
//! ```
//! use clipswap_xml::{parse_document, write_document};
//!
//! let mut doc = parse_document("<xmeml><clip><name>a.mov</name></clip></xmeml>").unwrap();
//! let paths = doc.select_descendants("clip/name");
//! doc.get_mut(&paths[0]).unwrap().set_text("b.mov");
//!
//! let mut out = Vec::new();
//! write_document(&doc, "", &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("<name>b.mov</name>"));
//! ```

pub mod container;
pub mod document;
pub mod error;
pub mod reader;
pub mod writer;

pub use container::{read_project, write_project, Compression};
pub use document::{Document, Element, ElementPath, Node};
pub use error::XmlError;
pub use reader::parse_document;
pub use writer::write_document;
