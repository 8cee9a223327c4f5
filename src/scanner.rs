// WHY: Stateless search and classification over char slices shared by every transform
// A TextBuffer is scanned through as_chars(); plain strings go through chars_of()

/// Half-open `[start, end)` range of a word run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        &chars[self.start..self.end]
    }

    pub fn text(&self, chars: &[char]) -> String {
        self.slice(chars).iter().collect()
    }
}

/// What a search looks for
pub enum Pattern<'a> {
    Char(char),
    Substring(&'a str),
    Predicate(&'a dyn Fn(char) -> bool),
}

/// Per-character comparison mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Comparison {
    #[default]
    Ordinal,
    IgnoreCase,
}

impl Comparison {
    pub fn chars_equal(self, a: char, b: char) -> bool {
        match self {
            Comparison::Ordinal => a == b,
            Comparison::IgnoreCase => a == b || fold(a) == fold(b),
        }
    }
}

/// Single-char lowercase mapping; expansions compare by their first char
fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

pub fn chars_of(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// First match at or after `start` (clamped to the haystack length)
pub fn index_of(
    haystack: &[char],
    pattern: &Pattern<'_>,
    start: usize,
    comparison: Comparison,
) -> Option<usize> {
    let start = start.min(haystack.len());
    match pattern {
        Pattern::Char(target) => haystack[start..]
            .iter()
            .position(|&ch| comparison.chars_equal(ch, *target))
            .map(|offset| offset + start),
        Pattern::Predicate(predicate) => haystack[start..]
            .iter()
            .position(|&ch| predicate(ch))
            .map(|offset| offset + start),
        Pattern::Substring(needle) => {
            let needle = chars_of(needle);
            if needle.is_empty() {
                return Some(start);
            }
            if needle.len() > haystack.len() {
                return None;
            }
            (start..=haystack.len() - needle.len())
                .find(|&at| slice_matches(haystack, &needle, at, comparison))
        }
    }
}

/// Last match lying entirely at or before `start`
///
/// `None` searches the whole haystack; an index past the end is clamped.
pub fn last_index_of(
    haystack: &[char],
    pattern: &Pattern<'_>,
    start: Option<usize>,
    comparison: Comparison,
) -> Option<usize> {
    let end = start.map_or(haystack.len(), |s| s.saturating_add(1).min(haystack.len()));
    match pattern {
        Pattern::Char(target) => haystack[..end]
            .iter()
            .rposition(|&ch| comparison.chars_equal(ch, *target)),
        Pattern::Predicate(predicate) => haystack[..end].iter().rposition(|&ch| predicate(ch)),
        Pattern::Substring(needle) => {
            let needle = chars_of(needle);
            if needle.is_empty() {
                return Some(start.map_or(haystack.len(), |s| s.min(haystack.len())));
            }
            if needle.len() > end {
                return None;
            }
            (0..=end - needle.len())
                .rev()
                .find(|&at| slice_matches(haystack, &needle, at, comparison))
        }
    }
}

/// True iff `s` occurs starting exactly at `index`
pub fn matches_at(haystack: &[char], s: &str, index: usize, comparison: Comparison) -> bool {
    let count = s.chars().count();
    match index.checked_add(count) {
        Some(end) if end <= haystack.len() => haystack[index..end]
            .iter()
            .zip(s.chars())
            .all(|(&h, n)| comparison.chars_equal(h, n)),
        _ => false,
    }
}

/// True iff `s` occurs ending at (and including) `index`
pub fn matches_ending_at(haystack: &[char], s: &str, index: usize, comparison: Comparison) -> bool {
    let count = s.chars().count();
    match index.checked_add(1).and_then(|end| end.checked_sub(count)) {
        Some(start) => matches_at(haystack, s, start, comparison),
        None => false,
    }
}

fn slice_matches(haystack: &[char], needle: &[char], at: usize, comparison: Comparison) -> bool {
    haystack[at..at + needle.len()]
        .iter()
        .zip(needle)
        .all(|(&h, &n)| comparison.chars_equal(h, n))
}

/// First maximal run of letters
pub fn find_first_word(chars: &[char]) -> Option<WordSpan> {
    let start = chars.iter().position(|ch| ch.is_alphabetic())?;
    let end = chars[start..]
        .iter()
        .position(|ch| !ch.is_alphabetic())
        .map_or(chars.len(), |offset| start + offset);
    Some(WordSpan { start, end })
}

/// Last maximal run of letters
pub fn find_last_word(chars: &[char]) -> Option<WordSpan> {
    let end = chars.iter().rposition(|ch| ch.is_alphabetic())? + 1;
    let start = chars[..end]
        .iter()
        .rposition(|ch| !ch.is_alphabetic())
        .map_or(0, |pos| pos + 1);
    Some(WordSpan { start, end })
}

pub fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

fn digit_follows(chars: &[char], index: usize) -> bool {
    chars.get(index + 1).is_some_and(|ch| ch.is_ascii_digit())
}

/// Letter, digit, apostrophe, or a decimal point with a digit right after it
pub fn is_word_char(chars: &[char], index: usize) -> bool {
    match chars.get(index) {
        Some(&ch) if ch.is_alphanumeric() || is_apostrophe(ch) => true,
        Some('.') => digit_follows(chars, index),
        _ => false,
    }
}

/// `!`, `?`, `:`, or a period that is not a decimal point
pub fn is_sentence_terminator(chars: &[char], index: usize) -> bool {
    match chars.get(index) {
        Some('!' | '?' | ':') => true,
        Some('.') => !digit_follows(chars, index),
        _ => false,
    }
}

/// Iterator over maximal word-character runs
pub struct WordSpans<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Iterator for WordSpans<'_> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<WordSpan> {
        while self.pos < self.chars.len() && !is_word_char(self.chars, self.pos) {
            self.pos += 1;
        }
        if self.pos >= self.chars.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.chars.len() && is_word_char(self.chars, self.pos) {
            self.pos += 1;
        }
        Some(WordSpan {
            start,
            end: self.pos,
        })
    }
}

pub fn word_spans(chars: &[char]) -> WordSpans<'_> {
    WordSpans { chars, pos: 0 }
}
