//! English noun inflection.
//!
//! Classifies words as singular or plural and converts between the two
//! forms, checking the irregular table first and falling back to the
//! regular suffix rules. Absence of a conversion is a normal outcome
//! (`None`), never an error: a word that is already in the requested form
//! simply has no transformation.

use crate::config::Settings;
use crate::irregular::{IrregularPair, IRREGULAR_NOUNS};

/// Inflection engine: the built-in irregular table plus host-supplied
/// extension pairs, treated as one logical table.
///
/// Lookups scan the built-in entries first, then the extensions, so a host
/// pair extends coverage without shadowing a built-in form. The extension
/// list is owned by the engine and never modified.
#[derive(Debug, Clone, Default)]
pub struct Inflections {
    extensions: Vec<IrregularPair>,
}

impl Inflections {
    /// Engine over the built-in table only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over the built-in table plus the host's extension pairs.
    pub fn with_extensions(extensions: Vec<IrregularPair>) -> Self {
        Self { extensions }
    }

    /// Engine wired to the extension pairs declared in settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_extensions(settings.inflection.irregular.clone())
    }

    /// Extension pairs supplied by the host.
    pub fn extensions(&self) -> &[IrregularPair] {
        &self.extensions
    }

    /// All pairs in lookup order: built-ins first, then extensions.
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        IRREGULAR_NOUNS.iter().copied().chain(
            self.extensions
                .iter()
                .map(|p| (p.singular.as_str(), p.plural.as_str())),
        )
    }

    fn find(&self, folded: &str) -> Option<(&str, &str)> {
        self.pairs()
            .find(|(s, p)| s.eq_ignore_ascii_case(folded) || p.eq_ignore_ascii_case(folded))
    }

    /// Look up a word in the irregular table by either form.
    ///
    /// Comparison is case-insensitive; the returned pair carries the forms
    /// as they appear in the table. `None` means the word is regular.
    pub fn irregular(&self, word: &str) -> Option<IrregularPair> {
        self.find(&word.to_lowercase())
            .map(|(s, p)| IrregularPair::new(s, p))
    }

    /// Whether the word appears in the irregular table.
    pub fn is_irregular(&self, word: &str) -> bool {
        self.find(&word.to_lowercase()).is_some()
    }

    /// Whether the word is grammatically plural.
    ///
    /// Irregular pairs are consulted first; regular words are plural when
    /// they end in `s`. Pairs whose singular and plural forms are identical
    /// ("sheep", "series") always classify as plural.
    pub fn is_plural(&self, word: &str) -> bool {
        let folded = word.to_lowercase();
        if let Some((singular, plural)) = self.find(&folded) {
            if !singular.eq_ignore_ascii_case(&folded) {
                return true;
            }
            if plural.eq_ignore_ascii_case(&folded) {
                return true;
            }
        }
        folded.ends_with('s')
    }

    /// Whether the word is grammatically singular.
    pub fn is_singular(&self, word: &str) -> bool {
        !self.is_plural(word)
    }

    /// Singular form of a plural word.
    ///
    /// Returns `None` when no transformation applies: an irregular word not
    /// found by its plural form, or a regular word that does not end in
    /// `s`, is presumed already singular.
    pub fn to_singular(&self, word: &str) -> Option<String> {
        self.to_singular_with(word, self.is_irregular(word))
    }

    /// [`to_singular`](Self::to_singular) with the irregularity decision
    /// supplied by the caller instead of computed from the table.
    pub fn to_singular_with(&self, word: &str, is_irregular: bool) -> Option<String> {
        let folded = word.to_lowercase();
        if is_irregular || !folded.ends_with('s') {
            return self.irregular_singular(&folded);
        }
        if let Some(stem) = strip_suffix_ci(word, "ies") {
            if !ends_in_vowel(stem) {
                return Some(format!("{stem}y"));
            }
        }
        Some(strip_last_char(word))
    }

    /// Plural form of a singular word.
    ///
    /// Regular words that are already plural come back unchanged; an
    /// irregular word not found by its singular form yields `None`.
    pub fn to_plural(&self, word: &str) -> Option<String> {
        self.to_plural_with(word, self.is_irregular(word))
    }

    /// [`to_plural`](Self::to_plural) with the irregularity decision
    /// supplied by the caller instead of computed from the table.
    pub fn to_plural_with(&self, word: &str, is_irregular: bool) -> Option<String> {
        if is_irregular {
            return self.irregular_plural(&word.to_lowercase());
        }
        if let Some(stem) = strip_suffix_ci(word, "y") {
            if !ends_in_vowel(stem) {
                return Some(format!("{stem}ies"));
            }
        }
        if self.is_singular(word) {
            return Some(format!("{word}s"));
        }
        Some(word.to_string())
    }

    /// Singular form from the table, matching by plural form only.
    fn irregular_singular(&self, folded: &str) -> Option<String> {
        self.pairs()
            .find(|(_, p)| p.eq_ignore_ascii_case(folded))
            .map(|(s, _)| s.to_string())
    }

    /// Plural form from the table, matching by singular form only.
    fn irregular_plural(&self, folded: &str) -> Option<String> {
        self.pairs()
            .find(|(s, _)| s.eq_ignore_ascii_case(folded))
            .map(|(_, p)| p.to_string())
    }
}

/// Case-insensitive suffix strip that leaves the stem's casing intact.
/// Suffixes are ASCII, so the byte-length split is safe to check.
fn strip_suffix_ci<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    let split = word.len().checked_sub(suffix.len())?;
    if word.is_char_boundary(split) && word[split..].eq_ignore_ascii_case(suffix) {
        Some(&word[..split])
    } else {
        None
    }
}

fn ends_in_vowel(stem: &str) -> bool {
    matches!(
        stem.chars().next_back().map(|c| c.to_ascii_lowercase()),
        Some('a' | 'e' | 'i' | 'o' | 'u')
    )
}

fn strip_last_char(word: &str) -> String {
    let mut chars = word.chars();
    chars.next_back();
    chars.as_str().to_string()
}

/// Whether the word is plural, using the built-in table only.
pub fn is_plural(word: &str) -> bool {
    Inflections::new().is_plural(word)
}

/// Whether the word is singular, using the built-in table only.
pub fn is_singular(word: &str) -> bool {
    Inflections::new().is_singular(word)
}

/// Singular form of a plural word, using the built-in table only.
pub fn to_singular(word: &str) -> Option<String> {
    Inflections::new().to_singular(word)
}

/// Plural form of a singular word, using the built-in table only.
pub fn to_plural(word: &str) -> Option<String> {
    Inflections::new().to_plural(word)
}

/// Pluralize a word, falling back to the input when no conversion applies.
///
/// # Examples
/// ```
/// assert_eq!(inflect::pluralize("customer"), "customers");
/// assert_eq!(inflect::pluralize("category"), "categories");
/// assert_eq!(inflect::pluralize("person"), "people");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    to_plural(word).unwrap_or_else(|| word.to_string())
}

/// Singularize a word, falling back to the input when no conversion applies.
///
/// # Examples
/// ```
/// assert_eq!(inflect::singularize("customers"), "customer");
/// assert_eq!(inflect::singularize("categories"), "category");
/// assert_eq!(inflect::singularize("people"), "person");
/// ```
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    to_singular(word).unwrap_or_else(|| word.to_string())
}
