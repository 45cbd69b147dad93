use super::{Error, Span, Tag, Token, Tokenizer, Vocabulary};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Splice {
    /// Position in the rewritten text.
    at: usize,
    removed: usize,
    inserted: usize,
}

/// ## Record of a text rewrite
///
/// Ordered, non-overlapping replacements made by [`Tokenizer::edit`].
/// Lets positions in the rewritten text be mapped back to the text that
/// was edited.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edits {
    splices: Vec<Splice>,
}

impl Edits {
    pub fn is_empty(&self) -> bool {
        self.splices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.splices.len()
    }

    fn push(&mut self, at: usize, removed: usize, inserted: usize) {
        debug_assert!(self.splices.last().map_or(true, |s| s.at + s.inserted <= at));
        self.splices.push(Splice {
            at,
            removed,
            inserted,
        });
    }

    fn append_shifted(&mut self, inner: Edits, shift: usize) {
        for s in inner.splices {
            self.push(s.at + shift, s.removed, s.inserted);
        }
    }

    /// Maps a span of the rewritten text onto the text before editing.
    /// A position inside replaced text maps to the edge of what it replaced.
    pub fn to_original(&self, span: Span) -> Span {
        self.position(span.start, false)..self.position(span.end, true)
    }

    fn position(&self, pos: usize, end: bool) -> usize {
        let mut delta: isize = 0;
        for s in &self.splices {
            let before = if end { pos <= s.at } else { pos < s.at };
            if before {
                break;
            }
            let inside = if end {
                pos <= s.at + s.inserted
            } else {
                pos < s.at + s.inserted
            };
            if inside {
                let start = (s.at as isize - delta) as usize;
                return if end { start + s.removed } else { start };
            }
            delta += s.inserted as isize - s.removed as isize;
        }
        (pos as isize - delta) as usize
    }
}

impl Tokenizer {
    /// Rewrites `text` token by token. The replacer returns the new text
    /// for a token or `None` to leave it. With `deep`, quoted code is not
    /// offered to the replacer; its contents are edited recursively instead.
    pub fn edit<F>(
        &self,
        text: &str,
        words: &dyn Vocabulary,
        replacer: &mut F,
        deep: bool,
    ) -> Result<(String, Edits)>
    where
        F: FnMut(&Token) -> Option<String>,
    {
        let mut result = text.to_string();
        let mut edits = Edits::default();
        let mut shift: isize = 0;
        for token in self.tokenize(text, words) {
            let token = token?;
            let span = match token.span() {
                Some(span) => span.clone(),
                None => continue,
            };
            let start = (span.start as isize + shift) as usize;
            let end = start + span.len();
            let replacement = if deep && token.tags().contains(Tag::Code) {
                let (inner, inner_edits) = self
                    .edit(&result[start..end], words, replacer, deep)
                    .map_err(|e| e.relocate(|s| Some(s.start + span.start..s.end + span.start)))?;
                if inner_edits.is_empty() {
                    continue;
                }
                edits.append_shifted(inner_edits, start);
                inner
            } else {
                match replacer(&token) {
                    Some(r) => {
                        edits.push(start, span.len(), r.len());
                        r
                    }
                    None => continue,
                }
            };
            result.replace_range(start..end, &replacement);
            shift += replacement.len() as isize - span.len() as isize;
        }
        Ok((result, edits))
    }
}
