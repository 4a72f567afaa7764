//! Property-based tests for keyword extraction and validation

use proptest::prelude::*;

use xfrooms::shared::keyword::{extract_keywords, is_valid_keyword, normalize};

fn keyword_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        prop::char::range('가', '힣'),
    ]
}

fn valid_keyword() -> impl Strategy<Value = String> {
    prop::collection::vec(keyword_char(), 1..=6).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn test_generated_keywords_validate(keyword in valid_keyword()) {
        prop_assert!(is_valid_keyword(&keyword));
    }

    #[test]
    fn test_tagged_keyword_is_extracted(keyword in valid_keyword()) {
        let text = format!("talking about #{} today", keyword);
        prop_assert_eq!(extract_keywords(&text), vec![keyword]);
    }

    #[test]
    fn test_repeated_tag_extracts_once(keyword in valid_keyword()) {
        let text = format!("#{} and #{} again", keyword, keyword);
        prop_assert_eq!(extract_keywords(&text), vec![keyword]);
    }

    #[test]
    fn test_overlong_keywords_rejected(
        chars in prop::collection::vec(keyword_char(), 7..=20),
    ) {
        let keyword: String = chars.into_iter().collect();
        prop_assert!(!is_valid_keyword(&keyword));
    }

    #[test]
    fn test_foreign_char_anywhere_rejects(
        chars in prop::collection::vec(keyword_char(), 0..=5),
        bad in prop::sample::select(vec!['!', '@', ';', ',', '.', '-', '_', '/', '?', '*', ' ']),
        position in 0usize..=5,
    ) {
        let mut chars = chars;
        let position = position.min(chars.len());
        chars.insert(position, bad);
        let keyword: String = chars.into_iter().collect();
        prop_assert!(!is_valid_keyword(&keyword));
    }

    #[test]
    fn test_extraction_yields_only_valid_unique_keywords(text in ".*") {
        let found = extract_keywords(&text);
        for keyword in &found {
            prop_assert!(is_valid_keyword(keyword));
        }
        let mut unique = found.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn test_normalize_strips_exactly_the_prefix(keyword in valid_keyword()) {
        let tagged = format!("#{}", keyword);
        prop_assert_eq!(normalize(&tagged), keyword.as_str());
        prop_assert_eq!(normalize(&keyword), keyword.as_str());
    }
}
