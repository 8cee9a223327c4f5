// WHY: English plural/singular forms for the last word of a phrase, rewritten in place
// Registry exceptions win over suffix rules; the input word's casing style is kept

use crate::buffer::TextBuffer;
use crate::nouns::{NounRegistry, NounTables};
use crate::scanner::{find_last_word, is_apostrophe, WordSpan};

/// Casing style of a word, re-applied to its inflected form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Capitalized,
    Upper,
}

impl WordCase {
    fn of(word: &str) -> Self {
        let letters: Vec<char> = word.chars().filter(|ch| ch.is_alphabetic()).collect();
        match letters.first() {
            Some(_) if letters.len() > 1 && letters.iter().all(|ch| ch.is_uppercase()) => {
                WordCase::Upper
            }
            Some(first) if first.is_uppercase() => WordCase::Capitalized,
            _ => WordCase::Lower,
        }
    }

    fn apply(self, lower: &str) -> String {
        match self {
            WordCase::Lower => lower.to_string(),
            WordCase::Upper => lower.to_uppercase(),
            WordCase::Capitalized => {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn regular_plural(lower: &str) -> String {
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{lower}es");
    }
    if let Some(stem) = lower.strip_suffix('y') {
        if stem.chars().last().is_some_and(|ch| !is_vowel(ch)) {
            return format!("{stem}ies");
        }
    }
    format!("{lower}s")
}

fn regular_singular(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.chars().count() > 1 {
            return format!("{stem}y");
        }
    }
    if ["sses", "shes", "ches", "xes", "zes"].iter().any(|suffix| lower.ends_with(suffix)) {
        return lower[..lower.len() - 2].to_string();
    }
    if ["ss", "us", "is"].iter().any(|suffix| lower.ends_with(suffix)) {
        return lower.to_string();
    }
    match lower.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => lower.to_string(),
    }
}

fn plural_form(tables: &NounTables, lower: &str) -> String {
    if tables.is_defective(lower) || tables.singular_of(lower).is_some() {
        return lower.to_string();
    }
    match tables.plural_of(lower) {
        Some(plural) => plural.to_string(),
        None => regular_plural(lower),
    }
}

fn singular_form(tables: &NounTables, lower: &str) -> String {
    if tables.is_defective(lower) || tables.plural_of(lower).is_some() {
        return lower.to_string();
    }
    match tables.singular_of(lower) {
        Some(singular) => singular.to_string(),
        None => regular_singular(lower),
    }
}

/// Possessive ending attached to the last word
#[derive(Debug, Clone, Copy)]
enum Possessive {
    /// `dog's`: apostrophe followed by a one-letter `s` run
    ApostropheS { apostrophe: char, s: char },
    /// `dogs'`: bare trailing apostrophe
    Apostrophe { apostrophe: char },
}

/// Last word, with a possessive ending split off the noun
struct LastNoun {
    noun: WordSpan,
    possessive: Option<Possessive>,
    /// End of the region rewritten by inflection
    end: usize,
}

fn last_noun(chars: &[char]) -> Option<LastNoun> {
    let span = find_last_word(chars)?;

    let s = chars[span.start];
    if span.len() == 1 && matches!(s, 's' | 'S') && span.start >= 2 {
        let apostrophe = chars[span.start - 1];
        if is_apostrophe(apostrophe) && chars[span.start - 2].is_alphabetic() {
            return Some(LastNoun {
                noun: find_last_word(&chars[..span.start - 1])?,
                possessive: Some(Possessive::ApostropheS { apostrophe, s }),
                end: span.end,
            });
        }
    }

    match chars.get(span.end) {
        Some(&apostrophe)
            if is_apostrophe(apostrophe)
                && !chars.get(span.end + 1).is_some_and(|ch| ch.is_alphanumeric()) =>
        {
            Some(LastNoun {
                noun: span,
                possessive: Some(Possessive::Apostrophe { apostrophe }),
                end: span.end + 1,
            })
        }
        _ => Some(LastNoun {
            noun: span,
            possessive: None,
            end: span.end,
        }),
    }
}

fn inflect_last_word(text: &str, inflect: impl Fn(&str) -> String) -> String {
    let mut buffer = TextBuffer::from(text);
    let Some(LastNoun { noun, possessive, end }) = last_noun(buffer.as_chars()) else {
        return text.to_string();
    };

    let word = noun.text(buffer.as_chars());
    let case = WordCase::of(&word);
    let mut inflected = case.apply(&inflect(&word.to_lowercase()));
    if let Some(possessive) = possessive {
        // Nouns ending in s take a bare apostrophe
        let ends_in_s = inflected.ends_with(['s', 'S']);
        let (apostrophe, s) = match possessive {
            Possessive::ApostropheS { apostrophe, s } => (apostrophe, s),
            Possessive::Apostrophe { apostrophe } if case == WordCase::Upper => (apostrophe, 'S'),
            Possessive::Apostrophe { apostrophe } => (apostrophe, 's'),
        };
        inflected.push(apostrophe);
        if !ends_in_s {
            inflected.push(s);
        }
    }
    buffer.replace(noun.start, &inflected, end - noun.start);
    buffer.into_string()
}

/// Plural of the last word in `text`
pub fn pluralize(registry: &NounRegistry, text: &str) -> String {
    let tables = registry.snapshot();
    inflect_last_word(text, |lower| plural_form(&tables, lower))
}

/// Singular of the last word in `text`
pub fn singularize(registry: &NounRegistry, text: &str) -> String {
    let tables = registry.snapshot();
    inflect_last_word(text, |lower| singular_form(&tables, lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let registry = NounRegistry::english();
        let cases = [
            ("cat", "cats"),
            ("box", "boxes"),
            ("church", "churches"),
            ("dish", "dishes"),
            ("class", "classes"),
            ("city", "cities"),
            ("day", "days"),
            ("buzz", "buzzes"),
        ];
        for (singular, plural) in cases {
            assert_eq!(pluralize(&registry, singular), plural, "pluralize {singular}");
            assert_eq!(singularize(&registry, plural), singular, "singularize {plural}");
        }
    }

    #[test]
    fn test_exceptions() {
        let registry = NounRegistry::english();
        assert_eq!(pluralize(&registry, "goose"), "geese");
        assert_eq!(pluralize(&registry, "geese"), "geese");
        assert_eq!(singularize(&registry, "geese"), "goose");
        assert_eq!(singularize(&registry, "goose"), "goose");
        assert_eq!(pluralize(&registry, "sheep"), "sheep");
        assert_eq!(singularize(&registry, "sheep"), "sheep");
        assert_eq!(pluralize(&registry, "quiz"), "quizzes");
        assert_eq!(singularize(&registry, "status"), "status");
    }

    #[test]
    fn test_casing_is_preserved() {
        let registry = NounRegistry::english();
        assert_eq!(pluralize(&registry, "Goose"), "Geese");
        assert_eq!(pluralize(&registry, "GOOSE"), "GEESE");
        assert_eq!(pluralize(&registry, "City"), "Cities");
        assert_eq!(singularize(&registry, "CHILDREN"), "CHILD");
    }

    #[test]
    fn test_only_last_word_changes() {
        let registry = NounRegistry::english();
        assert_eq!(pluralize(&registry, "big grey goose!"), "big grey geese!");
        assert_eq!(singularize(&registry, "three blind mice"), "three blind mouse");
        assert_eq!(pluralize(&registry, "42"), "42");
        assert_eq!(pluralize(&registry, ""), "");
    }

    #[test]
    fn test_possessives_keep_their_apostrophe() {
        let registry = NounRegistry::english();
        assert_eq!(pluralize(&registry, "the dog's"), "the dogs'");
        assert_eq!(pluralize(&registry, "the child's toy"), "the child's toys");
        assert_eq!(pluralize(&registry, "the child's"), "the children's");
        assert_eq!(pluralize(&registry, "the boss\u{2019}s"), "the bosses\u{2019}");
        assert_eq!(singularize(&registry, "the dogs'"), "the dog's");
        assert_eq!(singularize(&registry, "the children's"), "the child's");
        assert_eq!(singularize(&registry, "THE DOGS'"), "THE DOG'S");
        assert_eq!(pluralize(&registry, "rock 'n' roll"), "rock 'n' rolls");
    }

    #[test]
    fn test_registry_is_injected() {
        let registry = NounRegistry::empty();
        assert_eq!(pluralize(&registry, "goose"), "gooses");
        assert!(registry.add_irregular("goose", "geese"));
        assert_eq!(pluralize(&registry, "goose"), "geese");
    }
}
