//! Irregular noun data.
//!
//! The built-in table of English nouns whose plural is not formed by the
//! regular suffix rules, plus the pair type hosts use to extend it.

use serde::{Deserialize, Serialize};

/// A singular/plural pair for a noun the suffix rules cannot handle.
///
/// Forms are compared case-insensitively during lookup and never modified
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IrregularPair {
    /// Singular form (e.g. "child").
    pub singular: String,
    /// Plural form (e.g. "children").
    pub plural: String,
}

impl IrregularPair {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

/// Built-in irregular nouns. Scanned in order; the first matching entry wins.
pub static IRREGULAR_NOUNS: &[(&str, &str)] = &[
    // People
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    // Body parts
    ("foot", "feet"),
    ("tooth", "teeth"),
    // Animals
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("die", "dice"),
    // -f/-fe → -ves
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("calf", "calves"),
    ("half", "halves"),
    ("elf", "elves"),
    ("shelf", "shelves"),
    ("self", "selves"),
    ("thief", "thieves"),
    ("wolf", "wolves"),
    ("scarf", "scarves"),
    ("knife", "knives"),
    ("life", "lives"),
    ("wife", "wives"),
    // -o → -oes
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("hero", "heroes"),
    ("echo", "echoes"),
    ("veto", "vetoes"),
    // -is → -es
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("diagnosis", "diagnoses"),
    ("hypothesis", "hypotheses"),
    ("oasis", "oases"),
    ("thesis", "theses"),
    ("axis", "axes"),
    ("ellipsis", "ellipses"),
    // -on/-um → -a
    ("phenomenon", "phenomena"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("bacterium", "bacteria"),
    ("curriculum", "curricula"),
    ("memorandum", "memoranda"),
    ("stratum", "strata"),
    // -ex/-ix → -ices
    ("index", "indices"),
    ("appendix", "appendices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("apex", "apices"),
    // -us → -i
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("radius", "radii"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("alumnus", "alumni"),
    // Unchanged between singular and plural
    ("sheep", "sheep"),
    ("deer", "deer"),
    ("fish", "fish"),
    ("moose", "moose"),
    ("series", "series"),
    ("species", "species"),
];
