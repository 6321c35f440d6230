#[cfg(test)]
mod tests {
    use inflect::{Inflections, IrregularPair, Settings};

    fn extended() -> Inflections {
        Inflections::with_extensions(vec![
            IrregularPair::new("corpus", "corpora"),
            IrregularPair::new("aircraft", "aircraft"),
        ])
    }

    #[test]
    fn test_extension_lookup_by_either_form() {
        let inflections = extended();
        let pair = IrregularPair::new("corpus", "corpora");
        assert_eq!(inflections.irregular("corpus"), Some(pair.clone()));
        assert_eq!(inflections.irregular("corpora"), Some(pair));
        assert!(inflections.is_irregular("Corpora"));
    }

    #[test]
    fn test_extension_conversions() {
        let inflections = extended();
        assert_eq!(inflections.to_plural("corpus").as_deref(), Some("corpora"));
        assert_eq!(
            inflections.to_singular("corpora").as_deref(),
            Some("corpus")
        );
        // Same absence semantics as built-in entries.
        assert_eq!(inflections.to_plural("corpora"), None);
    }

    #[test]
    fn test_extension_classification() {
        let inflections = extended();
        assert!(inflections.is_plural("corpora"));
        // Identical-form extensions follow the always-plural policy.
        assert!(inflections.is_plural("aircraft"));
        assert_eq!(
            inflections.to_plural("aircraft").as_deref(),
            Some("aircraft")
        );
    }

    #[test]
    fn test_builtin_entries_match_first() {
        // A host pair that reuses a built-in form never shadows it.
        let inflections =
            Inflections::with_extensions(vec![IrregularPair::new("person", "persons")]);
        assert_eq!(inflections.to_plural("person").as_deref(), Some("people"));
        assert_eq!(
            inflections.irregular("person"),
            Some(IrregularPair::new("person", "people"))
        );
    }

    #[test]
    fn test_extensions_do_not_leak_into_base_engine() {
        let extended = extended();
        assert!(extended.is_irregular("corpus"));
        assert!(!Inflections::new().is_irregular("corpus"));
    }

    #[test]
    fn test_from_settings() {
        let toml = r#"
[inflection]
irregular = [
  { singular = "corpus", plural = "corpora" },
]
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        let inflections = Inflections::from_settings(&settings);
        assert_eq!(inflections.extensions().len(), 1);
        assert_eq!(inflections.to_plural("corpus").as_deref(), Some("corpora"));
    }

    #[test]
    fn test_mixed_case_extension_forms() {
        // Host entries are matched case-insensitively but returned as
        // written in the configuration.
        let inflections =
            Inflections::with_extensions(vec![IrregularPair::new("Corpus", "Corpora")]);
        assert!(inflections.is_irregular("corpus"));
        assert_eq!(inflections.to_plural("corpus").as_deref(), Some("Corpora"));
    }
}
