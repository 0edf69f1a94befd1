//! Value encoding shared by request signing and ITN canonicalization.
//!
//! Values are percent-encoded the way `encodeURIComponent` does it, except
//! that a space becomes `+`. Unreserved characters are
//! `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.

/// Encodes a single value for a `key=value&...` parameter string.
pub fn encode_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for ch in value.chars() {
        match ch {
            ' ' => encoded.push('+'),
            '!' | '\'' | '(' | ')' | '*' => encoded.push(ch),
            _ => encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf))),
        }
    }

    encoded
}

/// Joins `(key, value)` pairs into `k1=v1&k2=v2`, trimming and encoding values.
pub fn join_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode_value(value.trim())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Lowercase hex MD5 digest.
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spaces_become_plus() {
        assert_eq!(encode_value("Test Item One"), "Test+Item+One");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        assert_eq!(encode_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_value("test@example.com"), "test%40example.com");
        assert_eq!(encode_value("50/50"), "50%2F50");
    }

    #[test]
    fn uri_component_marks_are_left_alone() {
        assert_eq!(encode_value("it's (really) *great*!~"), "it's+(really)+*great*!~");
    }

    #[test]
    fn multibyte_characters_are_utf8_encoded() {
        assert_eq!(encode_value("café"), "caf%C3%A9");
    }

    #[test]
    fn join_pairs_trims_values_and_keeps_order() {
        let joined = join_pairs(vec![("b", " 2 "), ("a", "one two")]);
        assert_eq!(joined, "b=2&a=one+two");
    }

    #[test]
    fn join_pairs_of_nothing_is_empty() {
        assert_eq!(join_pairs(Vec::<(&str, &str)>::new()), "");
    }

    #[test]
    fn md5_hex_matches_known_digest() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    proptest! {
        #[test]
        fn encoded_values_never_contain_separators(value in ".*") {
            let encoded = encode_value(&value);
            prop_assert!(!encoded.contains('&'));
            prop_assert!(!encoded.contains('='));
            prop_assert!(!encoded.contains(' '));
        }

        #[test]
        fn encoded_values_round_trip(value in "[ -~]*") {
            let encoded = encode_value(&value).replace('+', "%20");
            let decoded = urlencoding::decode(&encoded).unwrap();
            prop_assert_eq!(decoded.as_ref(), value.as_str());
        }
    }
}
