//! Post-parse checks, run once a node's keys are all consumed.

use crate::document::{Document, NodeId};
use crate::error::ResolutionError;
use crate::kinds::NodeKind;
use crate::property::catalog::{IMAGE, TEXT};
use folio_traits::DiagnosticSink;

pub(super) fn check_node(doc: &mut Document, id: NodeId, sink: &mut dyn DiagnosticSink) {
    if doc.kind(id) != NodeKind::Album {
        return;
    }
    if !doc.pages_declared() {
        sink.error(
            ResolutionError::RequiredMissing {
                property: "pages",
                location: doc.location(id),
            }
            .to_string(),
        );
    }
    // Frames are checked once every album key is consumed.
    for page in doc.pages().to_vec() {
        for frame in doc.children(page).to_vec() {
            check_frame(doc, frame, sink);
        }
    }
}

/// A frame whose required content is missing is reported and dropped;
/// its siblings are unaffected.
fn check_frame(doc: &mut Document, frame: NodeId, sink: &mut dyn DiagnosticSink) {
    let content = match doc.kind(frame) {
        NodeKind::Image => &IMAGE,
        NodeKind::Text => &TEXT,
        _ => return,
    };
    if let Err(err) = doc.frame_content(frame, content) {
        sink.error(err.to_string());
        doc.drop_node(frame);
    }
}
