//! Identifier case conversion.

/// Convert an underscore-delimited identifier to a camel-case identifier.
///
/// Every segment's first character is uppercased, including the first one,
/// so `"order_item"` becomes `"OrderItem"`. Empty segments from consecutive
/// underscores contribute nothing. No inflection is applied.
pub fn from_underscores(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for segment in word.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
