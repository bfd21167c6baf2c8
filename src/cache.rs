//! Placeholder cache and the intermediate document.
//!
//! Function source and function-like strings must reach the output exactly as
//! written. While a dump is being assembled those fragments are parked in a
//! [`PlaceholderCache`] and the document only holds a [`Token`] for each one.
//! Object indentation rewrites the text pieces of a [`Document`] and never
//! sees a fragment, so a function body keeps its own line breaks and
//! indentation. [`Document::render`] then splices every fragment back in a
//! single pass.
//!
//! Tokens are typed pieces of the document rather than marker strings, so no
//! user text can ever be mistaken for one.
//!
//! ```rust
//! use serde_objdump::cache::{Document, PlaceholderCache};
//!
//! let mut cache = PlaceholderCache::new();
//! let token = cache.register("function(){\nreturn 1;\n}");
//!
//! let mut doc = Document::text("\"f\": ");
//! doc.push_fragment(token);
//! doc.push_str("\n}");
//! doc.indent("  ");
//!
//! assert_eq!(doc.render(&mut cache), "\"f\": function(){\nreturn 1;\n}\n  }");
//! assert!(cache.is_empty());
//! ```

/// Opaque handle for a fragment registered in a [`PlaceholderCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token(usize);

/// Fragment table for a single dump.
///
/// Tokens are handed out in increasing order and are unique within one cache.
/// Each fragment is moved out exactly once when the document is rendered.
#[derive(Debug, Default)]
pub struct PlaceholderCache {
    fragments: Vec<Option<String>>,
    live: usize,
}

impl PlaceholderCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `fragment` and returns the token standing in for it.
    pub fn register(&mut self, fragment: impl Into<String>) -> Token {
        let token = Token(self.fragments.len());
        self.fragments.push(Some(fragment.into()));
        self.live += 1;
        tracing::trace!(token = token.0, "registered opaque fragment");
        token
    }

    /// Number of fragments registered and not yet spliced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn take(&mut self, token: Token) -> Option<String> {
        let fragment = self.fragments.get_mut(token.0)?.take()?;
        self.live -= 1;
        Some(fragment)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Text(String),
    Fragment(Token),
}

/// Text under assembly: plain text interleaved with fragment tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pieces: Vec<Piece>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding only `text`.
    pub fn text(text: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.push_str(&text.into());
        doc
    }

    /// A document holding only the fragment behind `token`.
    #[must_use]
    pub fn fragment(token: Token) -> Self {
        Document {
            pieces: vec![Piece::Fragment(token)],
        }
    }

    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.pieces.last_mut() {
            Some(Piece::Text(last)) => last.push_str(text),
            _ => self.pieces.push(Piece::Text(text.to_string())),
        }
    }

    pub fn push_fragment(&mut self, token: Token) {
        self.pieces.push(Piece::Fragment(token));
    }

    /// Appends all pieces of `other`.
    pub fn append(&mut self, other: Document) {
        for piece in other.pieces {
            match piece {
                Piece::Text(text) => self.push_str(&text),
                Piece::Fragment(token) => self.push_fragment(token),
            }
        }
    }

    /// Follows every newline in the text pieces with `indent`.
    ///
    /// Fragments are left untouched.
    pub fn indent(&mut self, indent: &str) {
        if indent.is_empty() {
            return;
        }
        let replacement = format!("\n{}", indent);
        for piece in &mut self.pieces {
            if let Piece::Text(text) = piece {
                if text.contains('\n') {
                    *text = text.replace('\n', &replacement);
                }
            }
        }
    }

    /// Splices every fragment back in and returns the finished text.
    ///
    /// Each referenced fragment is moved out of `cache`, so rendering drains
    /// the fragments this document refers to.
    pub fn render(self, cache: &mut PlaceholderCache) -> String {
        let mut output = String::with_capacity(256);
        let mut spliced = 0usize;

        for piece in self.pieces {
            match piece {
                Piece::Text(text) => output.push_str(&text),
                Piece::Fragment(token) => match cache.take(token) {
                    Some(fragment) => {
                        output.push_str(&fragment);
                        spliced += 1;
                    }
                    None => {
                        debug_assert!(
                            false,
                            "fragment {:?} spliced twice or never registered",
                            token
                        );
                        tracing::warn!(token = token.0, "missing opaque fragment");
                    }
                },
            }
        }

        tracing::debug!(spliced, remaining = cache.len(), "rendered dump document");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let mut cache = PlaceholderCache::new();
        let first = cache.register("a");
        let second = cache.register("a");
        assert_ne!(first, second);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_push_str_merges_text() {
        let mut doc = Document::text("{");
        doc.push_str("\n");
        doc.push_str("");
        assert_eq!(doc.pieces, vec![Piece::Text("{\n".to_string())]);
    }

    #[test]
    fn test_indent_skips_fragments() {
        let mut cache = PlaceholderCache::new();
        let token = cache.register("function(){\n  return 'a';\n}");

        let mut doc = Document::text("[\n");
        doc.push_fragment(token);
        doc.push_str("\n]");
        doc.indent("    ");

        assert_eq!(
            doc.render(&mut cache),
            "[\n    function(){\n  return 'a';\n}\n    ]"
        );
    }

    #[test]
    fn test_render_drains_cache() {
        let mut cache = PlaceholderCache::new();
        let a = cache.register("A");
        let b = cache.register("B");

        let mut doc = Document::fragment(b);
        doc.push_str(",");
        doc.append(Document::fragment(a));

        assert_eq!(doc.render(&mut cache), "B,A");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_placeholder_like_text_is_plain_text() {
        let mut cache = PlaceholderCache::new();
        let doc = Document::text("Token(0) __fn_0__");
        assert_eq!(doc.render(&mut cache), "Token(0) __fn_0__");
    }
}
