#[cfg(test)]
mod tests {
    use inflect::from_underscores;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(from_underscores("foo_bar_baz"), "FooBarBaz");
        assert_eq!(from_underscores("order_item"), "OrderItem");
        assert_eq!(from_underscores("user"), "User");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(from_underscores(""), "");
    }

    #[test]
    fn test_consecutive_underscores_collapse() {
        assert_eq!(from_underscores("a__b"), "AB");
        assert_eq!(from_underscores("__"), "");
    }

    #[test]
    fn test_edge_underscores() {
        assert_eq!(from_underscores("_private"), "Private");
        assert_eq!(from_underscores("dangling_"), "Dangling");
    }

    #[test]
    fn test_no_inflection_applied() {
        // Purely mechanical: plural segments stay plural.
        assert_eq!(from_underscores("order_items"), "OrderItems");
    }
}
