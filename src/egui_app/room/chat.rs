//! Chat Board State
//!
//! Message history, the keyword strip and the input draft for one chat
//! room. Everything here is client state over server-pushed data: the
//! message list is append-only after the history replay, the keyword
//! list is replaced wholesale, and user actions come back as events
//! rather than mutating locally.
//!
//! Keyword clicks resolve over the channel: the server answers with
//! the first message carrying the keyword. Answers can be slow or
//! lost, so a click retries on a fixed cadence and gives up after a
//! few attempts with an inline notice.

use chrono::{DateTime, Duration, Utc};

use crate::shared::event::ClientEvent;
use crate::shared::keyword::extract_keywords;
use crate::shared::limits::{KEYWORDS_MAX, KEYWORD_LOOKUP_ATTEMPTS, KEYWORD_LOOKUP_RETRY_SECONDS};
use crate::shared::message::{prepare_outgoing, Message, SYSTEM_AUTHOR_ID};

/// How long a located message stays highlighted
const HIGHLIGHT_MILLIS: i64 = 1000;

/// An unanswered keyword click
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordLookup {
    pub keyword: String,
    pub attempts: u32,
    pub next_attempt_at: DateTime<Utc>,
}

/// Chat state for the current room
#[derive(Debug, Default)]
pub struct ChatState {
    /// Server-ordered history plus local system announcements
    pub messages: Vec<Message>,
    /// Bare keywords, rendered with a `#` prefix
    pub keywords: Vec<String>,
    /// Input draft
    pub input: String,
    /// Transient notice shown under the input bar
    pub notice: Option<String>,
    highlight: Option<(i64, DateTime<Utc>)>,
    scroll_target: Option<i64>,
    lookup: Option<KeywordLookup>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// History replay after join
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a local announcement (countdown milestones)
    pub fn push_system(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.messages.push(Message {
            id: 0,
            user_id: SYSTEM_AUTHOR_ID,
            nickname: String::new(),
            job: String::new(),
            profile: None,
            content: content.into(),
            created_at: Some(now),
        });
    }

    /// Authoritative keyword list replacement
    pub fn replace_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }

    /// Turn the input draft into a message event
    ///
    /// Returns `None` when the draft is empty after trimming; the
    /// draft is cleared only on emission. New `#tags` that would push
    /// the room past the keyword cap still send, with an advisory
    /// notice, since the server ignores the excess.
    pub fn prepare_send(&mut self, room_id: &str, user_id: i64) -> Option<ClientEvent> {
        let content = prepare_outgoing(&self.input)?;

        self.notice = None;
        let fresh = extract_keywords(&content)
            .into_iter()
            .filter(|k| !self.keywords.contains(k))
            .count();
        if fresh > 0 && self.keywords.len() + fresh > KEYWORDS_MAX {
            self.notice = Some(format!(
                "This room already has {} keywords; extra tags are ignored",
                KEYWORDS_MAX
            ));
        }

        self.input.clear();
        Some(ClientEvent::Message {
            room_id: room_id.to_string(),
            user_id,
            content,
        })
    }

    /// Ask the server where a keyword first appears
    ///
    /// A repeated click on the keyword already in flight is ignored; a
    /// click on a different keyword replaces the pending lookup.
    pub fn click_keyword(
        &mut self,
        room_id: &str,
        keyword: &str,
        now: DateTime<Utc>,
    ) -> Option<ClientEvent> {
        if self
            .lookup
            .as_ref()
            .is_some_and(|l| l.keyword == keyword)
        {
            return None;
        }
        self.notice = None;
        self.lookup = Some(KeywordLookup {
            keyword: keyword.to_string(),
            attempts: 1,
            next_attempt_at: now + Duration::seconds(KEYWORD_LOOKUP_RETRY_SECONDS),
        });
        Some(ClientEvent::KeywordClick {
            room_id: room_id.to_string(),
            keyword: keyword.to_string(),
        })
    }

    /// Emit a keyword removal (host only; the server checks again)
    pub fn delete_keyword(
        &self,
        room_id: &str,
        keyword: &str,
        user_id: i64,
        is_host: bool,
    ) -> Result<ClientEvent, String> {
        if !is_host {
            return Err("Only the host can delete keywords".to_string());
        }
        Ok(ClientEvent::DeleteKeyword {
            room_id: room_id.to_string(),
            keyword: keyword.to_string(),
            user_id,
        })
    }

    /// Per-frame upkeep: expire the highlight, retry or give up on the
    /// pending lookup. Returns a retry event when one is due.
    pub fn tick(&mut self, room_id: &str, now: DateTime<Utc>) -> Option<ClientEvent> {
        if let Some((_, until)) = self.highlight {
            if now >= until {
                self.highlight = None;
            }
        }

        let lookup = self.lookup.as_mut()?;
        if now < lookup.next_attempt_at {
            return None;
        }
        if lookup.attempts >= KEYWORD_LOOKUP_ATTEMPTS {
            let keyword = lookup.keyword.clone();
            self.lookup = None;
            self.notice = Some(format!("No message found for '#{}'", keyword));
            return None;
        }
        lookup.attempts += 1;
        lookup.next_attempt_at = now + Duration::seconds(KEYWORD_LOOKUP_RETRY_SECONDS);
        Some(ClientEvent::KeywordClick {
            room_id: room_id.to_string(),
            keyword: lookup.keyword.clone(),
        })
    }

    /// Handle the server's answer to a keyword click
    ///
    /// Answers for keywords we are not waiting on are dropped.
    pub fn apply_location(&mut self, keyword: &str, message_id: i64, now: DateTime<Utc>) {
        if !self
            .lookup
            .as_ref()
            .is_some_and(|l| l.keyword == keyword)
        {
            return;
        }
        self.lookup = None;
        self.scroll_target = Some(message_id);
        self.highlight = Some((message_id, now + Duration::milliseconds(HIGHLIGHT_MILLIS)));
    }

    pub fn is_highlighted(&self, message_id: i64) -> bool {
        self.highlight.is_some_and(|(id, _)| id == message_id)
    }

    /// Scroll request for the next rendered frame, consumed on read
    pub fn take_scroll_target(&mut self) -> Option<i64> {
        self.scroll_target.take()
    }

    pub fn lookup_pending(&self) -> Option<&KeywordLookup> {
        self.lookup.as_ref()
    }
}
