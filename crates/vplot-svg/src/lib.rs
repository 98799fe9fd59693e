//! # vplot-svg - Path Extraction from SVG Documents
//!
//! Pulls the `d` attribute of every `<path>` element out of an SVG
//! document, in document order. This is the document-side collaborator of
//! the plotting pipeline: it knows nothing about the path grammar, it
//! only hands each description string (plus the element's `id`, when
//! present) to the caller.
//!
//! The scan is a streaming pass with `quick-xml`; the document is never
//! materialized as a tree.

use log::trace;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// A path description extracted from a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSource {
    /// The element's `id` attribute, if it had one. Useful for naming the
    /// offending shape when a path later fails to parse.
    pub id: Option<String>,
    /// The raw `d` attribute value.
    pub data: String,
}

/// Errors that can occur while scanning a document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document is not well-formed XML.
    #[error("malformed svg document: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Extract all path descriptions from an SVG document, in document order.
///
/// `<path>` elements without a `d` attribute are skipped. The element
/// name is matched on its local part, so namespace-prefixed documents
/// (`<svg:path>`) work too. How many shapes a document contains, and
/// what to do when one of them fails to parse, is the caller's concern.
pub fn extract_paths(svg: &str) -> Result<Vec<PathSource>, ExtractError> {
    let mut reader = Reader::from_str(svg);
    let mut paths = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if e.name().local_name().as_ref() != b"path" {
                    continue;
                }
                trace!("found path element");

                let mut id = None;
                let mut data = None;
                for attr in e.attributes().filter_map(Result::ok) {
                    match attr.key.local_name().as_ref() {
                        b"d" => {
                            data = attr.unescape_value().ok().map(|v| v.into_owned());
                        }
                        b"id" => {
                            id = attr.unescape_value().ok().map(|v| v.into_owned());
                        }
                        _ => {}
                    }
                }

                if let Some(data) = data {
                    paths.push(PathSource { id, data });
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    trace!("extracted {} paths", paths.len());
    Ok(paths)
}
