// WHY: Ordinals reuse the cardinal wording and rewrite only its final word

use crate::buffer::TextBuffer;
use crate::error::Result;
use crate::scanner::find_last_word;
use crate::wordify::number_to_words;

/// Cardinal words whose ordinal is not a plain suffix
const IRREGULAR_ORDINALS: &[(&str, &str)] = &[
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

/// `st`, `nd`, `rd` or `th` for `n`
pub fn ordinal_suffix(n: i128) -> &'static str {
    let magnitude = n.unsigned_abs();
    if (11..=13).contains(&(magnitude % 100)) {
        return "th";
    }
    match magnitude % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `n` followed by its ordinal suffix, e.g. `"22nd"`
pub fn ordinalize(n: i128) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

fn ordinal_of_cardinal(word: &str) -> String {
    if let Some((_, ordinal)) = IRREGULAR_ORDINALS.iter().find(|(cardinal, _)| *cardinal == word) {
        return (*ordinal).to_string();
    }
    match word.strip_suffix('y') {
        Some(stem) => format!("{stem}ieth"),
        None => format!("{word}th"),
    }
}

/// English ordinal words, e.g. `"twenty-first"`, `"one hundredth"`
pub fn ordinal_words(n: i128) -> Result<String> {
    let mut buffer = TextBuffer::from(number_to_words(n)?);
    if let Some(span) = find_last_word(buffer.as_chars()) {
        let ordinal = ordinal_of_cardinal(&span.text(buffer.as_chars()));
        buffer.replace(span.start, &ordinal, span.len());
    }
    Ok(buffer.into_string())
}
