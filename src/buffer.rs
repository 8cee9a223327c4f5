// WHY: In-place editable character buffer so transforms rewrite a span instead of rebuilding the string
// Logical length is tracked separately from physical storage; storage only ever grows

use std::fmt;

use crate::error::{Result, TextError};

/// Smallest physical block allocated once the buffer needs storage
const MIN_CAPACITY: usize = 16;

/// Direction a tail of characters travels during a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Growable character buffer with explicit length vs. capacity
///
/// Indices are `char` positions. Mutations clamp their index arguments to the
/// valid range; direct reads and writes are bounds-checked and fail with
/// [`TextError::IndexOutOfRange`].
#[derive(Clone, Default)]
pub struct TextBuffer {
    /// Physical storage; `chars.len()` is the capacity
    chars: Vec<char>,
    len: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: vec!['\0'; capacity],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.chars.len()
    }

    /// Logical contents `[0, len)`
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..self.len]
    }

    /// Read one character, failing outside `[0, len)`
    pub fn get(&self, index: usize) -> Result<char> {
        self.check_index(index)?;
        Ok(self.chars[index])
    }

    /// Overwrite one character, failing outside `[0, len)`
    pub fn set(&mut self, index: usize, ch: char) -> Result<()> {
        self.check_index(index)?;
        self.chars[index] = ch;
        Ok(())
    }

    /// Borrow `[start, end)`; both ends must lie within `[0, len]`
    pub fn range(&self, start: usize, end: usize) -> Result<&[char]> {
        if end > self.len {
            return Err(TextError::IndexOutOfRange {
                index: end,
                len: self.len,
            });
        }
        if start > end {
            return Err(TextError::IndexOutOfRange {
                index: start,
                len: end,
            });
        }
        Ok(&self.chars[start..end])
    }

    /// Materialize `[start, end)` as an owned string
    pub fn substring(&self, start: usize, end: usize) -> Result<String> {
        Ok(self.range(start, end)?.iter().collect())
    }

    pub fn push(&mut self, ch: char) {
        self.reserve_total(self.len + 1);
        self.chars[self.len] = ch;
        self.len += 1;
    }

    /// Copy `s` onto the end
    pub fn append(&mut self, s: &str) {
        let count = s.chars().count();
        if count == 0 {
            return;
        }
        self.reserve_total(self.len + count);
        self.write_at(self.len, s);
        self.len += count;
    }

    /// Insert `s` before `index`; `index` is clamped to `[0, len]`
    pub fn insert(&mut self, index: usize, s: &str) {
        let count = s.chars().count();
        if count == 0 {
            return;
        }
        let index = index.min(self.len);
        self.reserve_total(self.len + count);
        self.shift(index, count, Direction::Forward);
        self.write_at(index, s);
        self.len += count;
    }

    /// Replace up to `replace_count` characters at `index` with `s`
    ///
    /// `index` is clamped to `[0, len]` and `replace_count` to what remains
    /// after it. The buffer grows before shifting when the replacement is
    /// longer, and shifts before shrinking when it is shorter.
    pub fn replace(&mut self, index: usize, s: &str, replace_count: usize) {
        let index = index.min(self.len);
        let replace_count = replace_count.min(self.len - index);
        let count = s.chars().count();
        let tail = index + replace_count;

        if count > replace_count {
            let delta = count - replace_count;
            self.reserve_total(self.len + delta);
            self.shift(tail, delta, Direction::Forward);
            self.len += delta;
        } else if count < replace_count {
            let delta = replace_count - count;
            self.shift(tail, delta, Direction::Backward);
            self.len -= delta;
        }

        self.write_at(index, s);
    }

    /// Remove up to `count` characters starting at `index` (both clamped)
    pub fn delete(&mut self, index: usize, count: usize) {
        let index = index.min(self.len);
        let count = count.min(self.len - index);
        if count == 0 {
            return;
        }
        self.shift(index + count, count, Direction::Backward);
        self.len -= count;
    }

    /// Set the logical length directly
    ///
    /// Growing exposes `'\0'` characters; shrinking keeps the capacity.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.len {
            self.reserve_total(new_len);
            self.chars[self.len..new_len].fill('\0');
        }
        self.len = new_len;
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn into_string(self) -> String {
        self.as_chars().iter().collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(TextError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Ensure physical storage holds at least `required` characters
    fn reserve_total(&mut self, required: usize) {
        if required <= self.chars.len() {
            return;
        }
        let mut capacity = self.chars.len().max(MIN_CAPACITY);
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }

        // Only the live prefix is carried over
        let mut grown = Vec::with_capacity(capacity);
        grown.extend_from_slice(&self.chars[..self.len]);
        grown.resize(capacity, '\0');
        self.chars = grown;
    }

    /// Move the tail `[start, len)` by `distance` in `direction`
    ///
    /// Forward shifts need `len + distance <= capacity`. Backward shifts need
    /// `distance <= start`. `copy_within` walks the overlap in the safe order
    /// for either direction.
    fn shift(&mut self, start: usize, distance: usize, direction: Direction) {
        if distance == 0 || start >= self.len {
            return;
        }
        let dest = match direction {
            Direction::Forward => {
                debug_assert!(self.len + distance <= self.chars.len());
                start + distance
            }
            Direction::Backward => {
                debug_assert!(distance <= start);
                start - distance
            }
        };
        self.chars.copy_within(start..self.len, dest);
    }

    fn write_at(&mut self, index: usize, s: &str) {
        for (slot, ch) in self.chars[index..].iter_mut().zip(s.chars()) {
            *slot = ch;
        }
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        let mut buffer = TextBuffer::new();
        buffer.append(s);
        buffer
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        TextBuffer::from(s.as_str())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &ch in self.as_chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("text", &self.to_string())
            .field("len", &self.len)
            .field("capacity", &self.chars.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference model: the same edit applied to a plain char vector
    fn apply_model(model: &mut Vec<char>, op: u8, a: usize, b: usize, s: &str) {
        let inserted: Vec<char> = s.chars().collect();
        match op % 4 {
            0 => model.extend(inserted),
            1 => {
                let index = a.min(model.len());
                model.splice(index..index, inserted);
            }
            2 => {
                let index = a.min(model.len());
                let count = b.min(model.len() - index);
                model.splice(index..index + count, inserted);
            }
            _ => {
                let index = a.min(model.len());
                let count = b.min(model.len() - index);
                model.drain(index..index + count);
            }
        }
    }

    fn apply_buffer(buffer: &mut TextBuffer, op: u8, a: usize, b: usize, s: &str) {
        match op % 4 {
            0 => buffer.append(s),
            1 => buffer.insert(a, s),
            2 => buffer.replace(a, s, b),
            _ => buffer.delete(a, b),
        }
    }

    quickcheck::quickcheck! {
        fn edits_match_string_model(seed: String, ops: Vec<(u8, usize, usize, String)>) -> bool {
            let mut buffer = TextBuffer::from(seed.as_str());
            let mut model: Vec<char> = seed.chars().collect();
            let mut last_capacity = buffer.capacity();

            for (op, a, b, s) in &ops {
                apply_buffer(&mut buffer, *op, *a, *b, s);
                apply_model(&mut model, *op, *a, *b, s);

                let expected: String = model.iter().collect();
                if buffer.to_string() != expected
                    || buffer.len() > buffer.capacity()
                    || buffer.capacity() < last_capacity
                {
                    return false;
                }
                last_capacity = buffer.capacity();
            }
            true
        }
    }

    #[test]
    fn test_append_and_materialize() {
        let mut buffer = TextBuffer::new();
        buffer.append("Hello");
        buffer.append("");
        buffer.append(", world");
        assert_eq!(buffer.to_string(), "Hello, world");
        assert_eq!(buffer.len(), 12);
        assert!(buffer.capacity() >= MIN_CAPACITY);
    }

    #[test]
    fn test_insert_shifts_tail_forward() {
        let mut buffer = TextBuffer::from("held");
        buffer.insert(2, "llo wor");
        assert_eq!(buffer.to_string(), "hello world");

        // Index past the end clamps to an append
        buffer.insert(1_000, "!");
        assert_eq!(buffer.to_string(), "hello world!");

        buffer.insert(0, ">> ");
        assert_eq!(buffer.to_string(), ">> hello world!");
    }

    #[test]
    fn test_insert_across_growth_boundary() {
        let mut buffer = TextBuffer::from("0123456789abcdef");
        assert_eq!(buffer.capacity(), MIN_CAPACITY);
        buffer.insert(8, "XYZ");
        assert_eq!(buffer.to_string(), "01234567XYZ89abcdef");
        assert_eq!(buffer.capacity(), MIN_CAPACITY * 2);
    }

    #[test]
    fn test_replace_longer_shorter_and_equal() {
        let mut buffer = TextBuffer::from("one goose here");
        buffer.replace(4, "geese", 5);
        assert_eq!(buffer.to_string(), "one geese here");

        buffer.replace(4, "children", 5);
        assert_eq!(buffer.to_string(), "one children here");

        buffer.replace(4, "ox", 8);
        assert_eq!(buffer.to_string(), "one ox here");
    }

    #[test]
    fn test_replace_clamps_count_to_available() {
        let mut buffer = TextBuffer::from("abcdef");
        buffer.replace(4, "XY", 100);
        assert_eq!(buffer.to_string(), "abcdXY");

        buffer.replace(100, "Z", 3);
        assert_eq!(buffer.to_string(), "abcdXYZ");
    }

    #[test]
    fn test_delete_clamps_both_arguments() {
        let mut buffer = TextBuffer::from("truncate me");
        buffer.delete(8, 100);
        assert_eq!(buffer.to_string(), "truncate");

        buffer.delete(0, 5);
        assert_eq!(buffer.to_string(), "ate");

        buffer.delete(50, 2);
        assert_eq!(buffer.to_string(), "ate");
    }

    #[test]
    fn test_resize_fills_and_keeps_capacity() {
        let mut buffer = TextBuffer::from("abcdef");
        let capacity = buffer.capacity();

        buffer.resize(3);
        assert_eq!(buffer.to_string(), "abc");
        assert_eq!(buffer.capacity(), capacity);

        // Previously deleted characters do not reappear
        buffer.resize(5);
        assert_eq!(buffer.as_chars(), &['a', 'b', 'c', '\0', '\0']);

        buffer.resize(40);
        assert_eq!(buffer.len(), 40);
        assert!(buffer.capacity() >= 40);
    }

    #[test]
    fn test_indexed_access_is_bounds_checked() {
        let mut buffer = TextBuffer::from("abc");
        assert_eq!(buffer.get(2), Ok('c'));
        assert_eq!(
            buffer.get(3),
            Err(TextError::IndexOutOfRange { index: 3, len: 3 })
        );

        buffer.set(0, 'A').unwrap();
        assert_eq!(buffer.to_string(), "Abc");
        assert!(buffer.set(7, 'x').is_err());
        assert_eq!(buffer.to_string(), "Abc");
    }

    #[test]
    fn test_range_reads() {
        let buffer = TextBuffer::from("a test string");
        assert_eq!(buffer.substring(2, 6).unwrap(), "test");
        assert_eq!(buffer.range(13, 13).unwrap(), &[] as &[char]);
        assert!(buffer.range(0, 14).is_err());
        assert!(buffer.range(5, 4).is_err());
    }

    #[test]
    fn test_multibyte_characters_are_single_units() {
        let mut buffer = TextBuffer::from("straße");
        assert_eq!(buffer.len(), 6);
        buffer.replace(4, "ss", 1);
        assert_eq!(buffer.to_string(), "strasse");
    }
}
