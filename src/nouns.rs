// WHY: Irregular and defective noun lookup shared by pluralize/singularize
// Tables are immutable snapshots swapped atomically, so registration never races lookups

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use tracing::{debug, warn};

/// Singular/plural pairs whose plural no suffix rule produces
pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("louse", "lice"),
    ("die", "dice"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("half", "halves"),
    ("calf", "calves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("elf", "elves"),
    ("self", "selves"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("radius", "radii"),
    ("stimulus", "stimuli"),
    ("alumnus", "alumni"),
    ("analysis", "analyses"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("basis", "bases"),
    ("diagnosis", "diagnoses"),
    ("axis", "axes"),
    ("phenomenon", "phenomena"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("bacterium", "bacteria"),
    ("curriculum", "curricula"),
    ("appendix", "appendices"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("quiz", "quizzes"),
    ("bus", "buses"),
    ("movie", "movies"),
];

/// Nouns spelled the same in singular and plural
pub const DEFECTIVE_NOUNS: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "moose",
    "swine",
    "bison",
    "salmon",
    "trout",
    "shrimp",
    "aircraft",
    "spacecraft",
    "hovercraft",
    "series",
    "species",
    "offspring",
    "means",
    "news",
    "equipment",
    "information",
    "rice",
    "money",
    "furniture",
    "advice",
    "software",
];

/// One immutable generation of the noun tables; keys are lowercase
#[derive(Debug, Clone, Default)]
pub struct NounTables {
    plurals: HashMap<String, String>,
    singulars: HashMap<String, String>,
    defective: HashSet<String>,
}

impl NounTables {
    fn knows(&self, word: &str) -> bool {
        self.plurals.contains_key(word)
            || self.singulars.contains_key(word)
            || self.defective.contains(word)
    }

    fn insert_irregular(&mut self, singular: &str, plural: &str) -> bool {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        if self.knows(&singular) || self.knows(&plural) {
            return false;
        }
        self.plurals.insert(singular.clone(), plural.clone());
        self.singulars.insert(plural, singular);
        true
    }

    fn insert_defective(&mut self, noun: &str) -> bool {
        let noun = noun.to_lowercase();
        if self.knows(&noun) {
            return false;
        }
        self.defective.insert(noun);
        true
    }

    pub fn plural_of(&self, singular: &str) -> Option<&str> {
        self.plurals.get(&singular.to_lowercase()).map(String::as_str)
    }

    pub fn singular_of(&self, plural: &str) -> Option<&str> {
        self.singulars.get(&plural.to_lowercase()).map(String::as_str)
    }

    pub fn is_defective(&self, noun: &str) -> bool {
        self.defective.contains(&noun.to_lowercase())
    }

    pub fn irregular_count(&self) -> usize {
        self.plurals.len()
    }

    pub fn defective_count(&self) -> usize {
        self.defective.len()
    }
}

/// Non-blank and free of whitespace
fn is_valid_noun(noun: &str) -> bool {
    !noun.is_empty() && !noun.chars().any(char::is_whitespace)
}

/// Registry of noun exceptions
///
/// Lookups read the current snapshot without locking. Registration clones
/// the snapshot, edits the clone and swaps it in with a compare-and-swap
/// loop.
pub struct NounRegistry {
    tables: ArcSwap<NounTables>,
}

impl NounRegistry {
    pub fn empty() -> Self {
        Self {
            tables: ArcSwap::from_pointee(NounTables::default()),
        }
    }

    /// Registry seeded with the built-in English exception lists
    pub fn english() -> Self {
        let mut tables = NounTables::default();
        for (singular, plural) in IRREGULAR_NOUNS {
            tables.insert_irregular(singular, plural);
        }
        for noun in DEFECTIVE_NOUNS {
            tables.insert_defective(noun);
        }
        debug!(
            irregular = tables.irregular_count(),
            defective = tables.defective_count(),
            "Built English noun tables"
        );
        Self {
            tables: ArcSwap::from_pointee(tables),
        }
    }

    /// Current generation of the tables
    pub fn snapshot(&self) -> Arc<NounTables> {
        self.tables.load_full()
    }

    /// Register an irregular singular/plural pair
    ///
    /// Returns `false` for blank or whitespace-containing input and for
    /// either form already being known.
    pub fn add_irregular(&self, singular: &str, plural: &str) -> bool {
        if !is_valid_noun(singular) || !is_valid_noun(plural) {
            warn!(singular, plural, "Rejected malformed irregular noun");
            return false;
        }

        let mut added = false;
        self.tables.rcu(|current| {
            let mut next = NounTables::clone(current);
            added = next.insert_irregular(singular, plural);
            if added {
                Arc::new(next)
            } else {
                Arc::clone(current)
            }
        });

        if added {
            debug!(singular, plural, "Registered irregular noun");
        } else {
            warn!(singular, plural, "Rejected duplicate irregular noun");
        }
        added
    }

    /// Register a noun whose plural equals its singular
    pub fn add_defective(&self, noun: &str) -> bool {
        if !is_valid_noun(noun) {
            warn!(noun, "Rejected malformed defective noun");
            return false;
        }

        let mut added = false;
        self.tables.rcu(|current| {
            let mut next = NounTables::clone(current);
            added = next.insert_defective(noun);
            if added {
                Arc::new(next)
            } else {
                Arc::clone(current)
            }
        });

        if added {
            debug!(noun, "Registered defective noun");
        } else {
            warn!(noun, "Rejected duplicate defective noun");
        }
        added
    }

    pub fn plural_of(&self, singular: &str) -> Option<String> {
        self.tables.load().plural_of(singular).map(str::to_string)
    }

    pub fn singular_of(&self, plural: &str) -> Option<String> {
        self.tables.load().singular_of(plural).map(str::to_string)
    }

    pub fn is_defective(&self, noun: &str) -> bool {
        self.tables.load().is_defective(noun)
    }
}

impl Default for NounRegistry {
    fn default() -> Self {
        Self::english()
    }
}

/// Process-wide English registry, built on first use
pub fn global() -> &'static NounRegistry {
    static REGISTRY: OnceLock<NounRegistry> = OnceLock::new();
    REGISTRY.get_or_init(NounRegistry::english)
}
