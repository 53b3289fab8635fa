//! Splitting of long input into API-sized pieces.

/// Longest text, in characters, the translation API accepts per request.
pub const MAX_CHUNK_CHARS: usize = 200;

/// Iterator over consecutive slices of at most `max_chars` characters.
///
/// Slices always end on a character boundary and together reproduce the
/// input exactly.
pub struct CharChunks<'a> {
    rest: &'a str,
    max_chars: usize,
}

/// Splits `text` into consecutive chunks of at most `max_chars` characters.
///
/// A `max_chars` of `0` is treated as `1`.
#[must_use]
pub fn char_chunks(text: &str, max_chars: usize) -> CharChunks<'_> {
    CharChunks {
        rest: text,
        max_chars: max_chars.max(1),
    }
}

impl<'a> Iterator for CharChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.max_chars)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }
}
