// WHY: Shorten text in place, either at a fixed length or after a whole number of words

use crate::buffer::TextBuffer;
use crate::error::{Result, TextError};
use crate::scanner::word_spans;

pub const DEFAULT_MARKER: &str = "\u{2026}";

/// Cut `text` to at most `max_len` characters, marker included
///
/// Text that already fits is returned unchanged. A marker longer than
/// `max_len` cannot fit and is an `ArgumentRange` error.
pub fn truncate(text: &str, max_len: usize, marker: &str) -> Result<String> {
    let marker_len = marker.chars().count();
    if marker_len > max_len {
        return Err(TextError::range(
            "max_len",
            format!("{max_len} cannot hold the {marker_len}-character marker"),
        ));
    }

    let mut buffer = TextBuffer::from(text);
    if buffer.len() <= max_len {
        return Ok(text.to_string());
    }
    buffer.replace(max_len - marker_len, marker, buffer.len());
    Ok(buffer.into_string())
}

/// Keep the first `max_words` word runs and append `marker` if anything was cut
pub fn truncate_words(text: &str, max_words: usize, marker: &str) -> String {
    let mut buffer = TextBuffer::from(text);
    let cut = if max_words == 0 {
        word_spans(buffer.as_chars()).next().map(|_| 0)
    } else {
        let mut spans = word_spans(buffer.as_chars()).skip(max_words - 1);
        match (spans.next(), spans.next()) {
            (Some(last_kept), Some(_)) => Some(last_kept.end),
            _ => None,
        }
    };

    match cut {
        Some(end) => {
            buffer.delete(end, buffer.len());
            buffer.append(marker);
            buffer.into_string()
        }
        None => text.to_string(),
    }
}
