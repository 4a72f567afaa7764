//! Kanban Board State
//!
//! Client state for one board room. The server owns the board: every
//! accepted mutation comes back as a full `sections` replacement, and
//! card adds are never applied locally at all. Moves are the one
//! optimistic path: a host drag reorders the local copy and proposes
//! exactly that board to the server, whose rebroadcast then replaces
//! it (usually with the identical state).

use chrono::{DateTime, Utc};

use crate::shared::board::{
    can_add_to_created, default_sections, prepare_card_text, BoardSection, CardAuthor, KanbanCard,
    Stage,
};
use crate::shared::event::ClientEvent;

/// Board state for the current room
#[derive(Debug)]
pub struct BoardState {
    /// Latest authoritative sections
    pub sections: Vec<BoardSection>,
    /// Draft text for a new card
    pub input: String,
    /// Whether the add form is open (cards only land in `created`)
    pub adding: bool,
    /// Transient notice shown above the columns
    pub notice: Option<String>,
    notice_until: Option<DateTime<Utc>>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            sections: default_sections(),
            input: String::new(),
            adding: false,
            notice: None,
            notice_until: None,
        }
    }

    /// Authoritative board replacement
    pub fn replace(&mut self, sections: Vec<BoardSection>) {
        self.sections = sections;
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }

    /// Turn the add draft into an `addCard` event
    ///
    /// The card is not placed locally; the server's rebroadcast adds
    /// it. Quota violations clear nothing and surface as a notice.
    pub fn add_card(
        &mut self,
        room_id: &str,
        author: CardAuthor,
        now: DateTime<Utc>,
    ) -> Option<ClientEvent> {
        let content = prepare_card_text(&self.input)?;
        if let Err(e) = can_add_to_created(&self.sections, author.id) {
            self.set_notice(e.user_message(), now);
            return None;
        }
        self.input.clear();
        self.adding = false;
        Some(ClientEvent::AddCard {
            room_id: room_id.to_string(),
            section_id: Stage::Created,
            card: KanbanCard::new(content, author),
        })
    }

    /// Apply a drop and propose the resulting board
    ///
    /// Non-hosts can pick a card up, but the drop is rejected here.
    /// The local reorder is what gets proposed, so the emitted
    /// sections and the local state are the same board by definition.
    pub fn move_card(
        &mut self,
        room_id: &str,
        card_id: &str,
        to: Stage,
        index: usize,
        is_host: bool,
    ) -> Result<Option<ClientEvent>, String> {
        if !is_host {
            return Err("Only the host can move cards".to_string());
        }
        let (from_idx, card_idx) = self
            .locate(card_id)
            .ok_or_else(|| "That card is no longer on the board".to_string())?;

        let to_idx = self
            .sections
            .iter()
            .position(|s| s.id == to)
            .ok_or_else(|| "That stage is no longer on the board".to_string())?;

        // Dropping a card back where it sits is not a move
        if from_idx == to_idx && card_idx == index {
            return Ok(None);
        }

        let card = self.sections[from_idx].cards.remove(card_idx);
        let target = &mut self.sections[to_idx];
        let index = index.min(target.cards.len());
        target.cards.insert(index, card);

        Ok(Some(ClientEvent::BoardUpdate {
            room_id: room_id.to_string(),
            sections: self.sections.clone(),
        }))
    }

    fn locate(&self, card_id: &str) -> Option<(usize, usize)> {
        for (section_idx, section) in self.sections.iter().enumerate() {
            if let Some(card_idx) = section.cards.iter().position(|c| c.id == card_id) {
                return Some((section_idx, card_idx));
            }
        }
        None
    }

    pub fn set_notice(&mut self, notice: impl Into<String>, now: DateTime<Utc>) {
        self.notice = Some(notice.into());
        self.notice_until = Some(now + chrono::Duration::seconds(4));
    }

    /// Expire the notice
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.notice_until.is_some_and(|until| now >= until) {
            self.notice = None;
            self.notice_until = None;
        }
    }
}
