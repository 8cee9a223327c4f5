// WHY: Case normalization driven by the scanner's word and sentence classification

use crate::buffer::TextBuffer;
use crate::scanner::{find_first_word, is_sentence_terminator, word_spans, WordSpan};

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Uppercase the first letter of the first word, leaving everything else alone
pub fn capitalize(text: &str) -> String {
    let mut buffer = TextBuffer::from(text);
    if let Some(span) = find_first_word(buffer.as_chars()) {
        let upper: String = buffer.as_chars()[span.start].to_uppercase().collect();
        buffer.replace(span.start, &upper, 1);
    }
    buffer.into_string()
}

fn title_word(buffer: &mut TextBuffer, span: WordSpan) {
    let mut replacement = String::with_capacity(span.len());
    let mut chars = span.slice(buffer.as_chars()).iter();
    if let Some(first) = chars.next() {
        replacement.extend(first.to_uppercase());
    }
    for ch in chars {
        replacement.extend(ch.to_lowercase());
    }
    buffer.replace(span.start, &replacement, span.len());
}

/// Uppercase the first character of every word run and lowercase the rest
pub fn to_title_case(text: &str) -> String {
    let mut buffer = TextBuffer::from(text);
    let spans: Vec<WordSpan> = word_spans(buffer.as_chars()).collect();

    // Right to left: a mapping that changes length leaves earlier spans valid
    for span in spans.into_iter().rev() {
        title_word(&mut buffer, span);
    }
    buffer.into_string()
}

/// Lowercase everything, then uppercase the first letter of each sentence
///
/// A sentence starts at the beginning of the text and after every sentence
/// terminator. A sentence that opens with a digit keeps its next letter
/// lowercase.
pub fn to_sentence_case(text: &str) -> String {
    let mut buffer = TextBuffer::from(text.to_lowercase());
    let mut at_sentence_start = true;
    let mut i = 0;

    while i < buffer.len() {
        let ch = buffer.as_chars()[i];
        if at_sentence_start && ch.is_alphabetic() {
            let upper: String = ch.to_uppercase().collect();
            let width = upper.chars().count();
            buffer.replace(i, &upper, 1);
            at_sentence_start = false;
            i += width;
            continue;
        }

        if is_sentence_terminator(buffer.as_chars(), i) {
            at_sentence_start = true;
        } else if ch.is_alphanumeric() {
            at_sentence_start = false;
        }
        i += 1;
    }

    buffer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("  hello world"), "  Hello world");
        assert_eq!(capitalize("123 abc def"), "123 Abc def");
        assert_eq!(capitalize("élan vital"), "Élan vital");
        assert_eq!(capitalize("..."), "...");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            to_title_case("the quick BROWN fox's tail"),
            "The Quick Brown Fox's Tail"
        );
        assert_eq!(to_title_case("pi is 3.14 exactly"), "Pi Is 3.14 Exactly");
        assert_eq!(to_title_case("  spaced--out  "), "  Spaced--Out  ");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            to_sentence_case("HELLO THERE. how are you? fine! ok: yes"),
            "Hello there. How are you? Fine! Ok: Yes"
        );
        assert_eq!(
            to_sentence_case("pi is 3.14. next one"),
            "Pi is 3.14. Next one"
        );
        assert_eq!(to_sentence_case("3 apples. two pears"), "3 apples. Two pears");
    }

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(to_upper_case("MiXeD"), "MIXED");
        assert_eq!(to_lower_case("MiXeD"), "mixed");
    }

    #[test]
    fn test_transforms_are_idempotent() {
        let samples = [
            "the QUICK brown fox. jumps over: the lazy dog!",
            "  it's 3.14 o'clock?  yes.",
            "ALL CAPS SENTENCE",
            "",
        ];
        for sample in samples {
            let title = to_title_case(sample);
            assert_eq!(to_title_case(&title), title);

            let sentence = to_sentence_case(sample);
            assert_eq!(to_sentence_case(&sentence), sentence);

            let capitalized = capitalize(sample);
            assert_eq!(capitalize(&capitalized), capitalized);
        }
    }
}
