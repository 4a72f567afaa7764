//! Kanban Board Model
//!
//! Three fixed stages. The whole board travels as `sections` in board
//! events; the server rebroadcasts the authoritative state after every
//! accepted mutation and the client replaces its copy wholesale.
//!
//! Quota rules live here so the pre-emission checks and the tests share
//! one implementation: the "created" stage holds at most 7 cards total
//! and at most 2 per author. Only the host may move cards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SharedError;
use super::limits::{CARD_MAX_CHARS, CREATED_STAGE_MAX_CARDS, CREATED_STAGE_MAX_PER_AUTHOR};

/// The three fixed kanban columns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// New ideas land here; the only stage accepting client adds
    Created,
    Deliberating,
    Adopted,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Created, Stage::Deliberating, Stage::Adopted];

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Created => "Created",
            Stage::Deliberating => "Deliberating",
            Stage::Adopted => "Adopted",
        }
    }
}

/// Card author display fields, denormalized onto the card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardAuthor {
    pub id: i64,
    pub nickname: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// One idea card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KanbanCard {
    /// Client-generated uuid, stable across moves
    pub id: String,
    /// Card text, at most 10 characters
    pub content: String,
    pub user: CardAuthor,
}

impl KanbanCard {
    pub fn new(content: String, user: CardAuthor) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            user,
        }
    }
}

/// One column with its ordered cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardSection {
    pub id: Stage,
    pub title: String,
    pub cards: Vec<KanbanCard>,
}

impl BoardSection {
    pub fn new(stage: Stage) -> Self {
        Self {
            id: stage,
            title: stage.title().to_string(),
            cards: Vec::new(),
        }
    }
}

/// The empty board every room starts from
pub fn default_sections() -> Vec<BoardSection> {
    Stage::ALL.iter().copied().map(BoardSection::new).collect()
}

/// Trim card text and enforce the length cap. Returns the text to send.
pub fn prepare_card_text(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed.chars().count() > CARD_MAX_CHARS {
        return None;
    }
    Some(trimmed.to_string())
}

/// Check the "created" stage quotas before emitting an add
///
/// Both quotas are evaluated against the latest server-pushed board, so
/// a stale client can still emit a violating add; the server re-checks.
pub fn can_add_to_created(sections: &[BoardSection], author_id: i64) -> Result<(), SharedError> {
    let created = sections
        .iter()
        .find(|s| s.id == Stage::Created)
        .ok_or_else(|| SharedError::protocol("Board has no created stage"))?;

    if created.cards.len() >= CREATED_STAGE_MAX_CARDS {
        return Err(SharedError::validation(
            "card",
            format!("The created stage is full ({} cards)", CREATED_STAGE_MAX_CARDS),
        ));
    }
    let own = created
        .cards
        .iter()
        .filter(|c| c.user.id == author_id)
        .count();
    if own >= CREATED_STAGE_MAX_PER_AUTHOR {
        return Err(SharedError::validation(
            "card",
            format!(
                "You already have {} cards in the created stage",
                CREATED_STAGE_MAX_PER_AUTHOR
            ),
        ));
    }
    Ok(())
}
