use super::{Edits, Span};
use std::rc::Rc;

/// ## Where evaluated text came from
///
/// Quoted code is evaluated long after it was scanned, often from text
/// that hygienic renaming has rewritten. An `Origin` maps positions in
/// such text back onto the program the user wrote so errors point at the
/// right place.

#[derive(Debug)]
pub enum Origin {
    /// The text is the program itself.
    Source,
    /// The text was synthesized; positions mean nothing to the user.
    Detached,
    /// Every position is attributed to one span, e.g. an evaluated string.
    Anchored(Span),
    /// The text sits at `offset` within a rewritten text whose edits are
    /// recorded, and that text came from `parent`.
    Within {
        offset: usize,
        edits: Rc<Edits>,
        parent: Rc<Origin>,
    },
}

impl Origin {
    pub fn locate(&self, span: Span) -> Option<Span> {
        match self {
            Origin::Source => Some(span),
            Origin::Detached => None,
            Origin::Anchored(anchor) => Some(anchor.clone()),
            Origin::Within {
                offset,
                edits,
                parent,
            } => parent.locate(edits.to_original(span.start + offset..span.end + offset)),
        }
    }
}
