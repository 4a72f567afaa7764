//! Property-based tests for board card quotas

use proptest::prelude::*;

use xfrooms::shared::board::{
    can_add_to_created, default_sections, prepare_card_text, CardAuthor, KanbanCard,
};
use xfrooms::shared::limits::{
    CARD_MAX_CHARS, CREATED_STAGE_MAX_CARDS, CREATED_STAGE_MAX_PER_AUTHOR,
};

fn author(id: i64) -> CardAuthor {
    CardAuthor {
        id,
        nickname: format!("user{}", id),
        profile_image: None,
    }
}

proptest! {
    #[test]
    fn test_quota_matches_counted_cards(
        authors in prop::collection::vec(0i64..5, 0..12),
        candidate in 0i64..5,
    ) {
        let mut sections = default_sections();
        for &id in &authors {
            sections[0]
                .cards
                .push(KanbanCard::new("idea".to_string(), author(id)));
        }

        let total = authors.len();
        let own = authors.iter().filter(|&&id| id == candidate).count();
        let allowed = total < CREATED_STAGE_MAX_CARDS && own < CREATED_STAGE_MAX_PER_AUTHOR;
        prop_assert_eq!(can_add_to_created(&sections, candidate).is_ok(), allowed);
    }

    #[test]
    fn test_other_stages_never_count(
        created in prop::collection::vec(0i64..5, 0..3),
        elsewhere in prop::collection::vec(0i64..5, 0..10),
        candidate in 0i64..5,
    ) {
        let mut bare = default_sections();
        let mut crowded = default_sections();
        for &id in &created {
            bare[0].cards.push(KanbanCard::new("idea".to_string(), author(id)));
            crowded[0].cards.push(KanbanCard::new("idea".to_string(), author(id)));
        }
        for (i, &id) in elsewhere.iter().enumerate() {
            let stage = 1 + i % 2;
            crowded[stage].cards.push(KanbanCard::new("moved".to_string(), author(id)));
        }

        prop_assert_eq!(
            can_add_to_created(&bare, candidate).is_ok(),
            can_add_to_created(&crowded, candidate).is_ok()
        );
    }

    #[test]
    fn test_prepare_card_text_contract(text in ".{0,24}") {
        let trimmed = text.trim();
        let expect_some =
            !trimmed.is_empty() && trimmed.chars().count() <= CARD_MAX_CHARS;
        match prepare_card_text(&text) {
            Some(prepared) => {
                prop_assert!(expect_some);
                prop_assert_eq!(prepared.as_str(), trimmed);
                prop_assert!(prepared.chars().count() <= CARD_MAX_CHARS);
            }
            None => prop_assert!(!expect_some),
        }
    }
}
