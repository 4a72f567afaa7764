//! Room State
//!
//! Everything the client holds while inside one room: the channel, the
//! member list, the countdown and the chat/board sub-states. The views
//! call `update` once per frame; it drains the channel, applies events
//! to the sub-states and sends whatever the frame produced (milestone
//! follow-ups, keyword retries, closure requests).
//!
//! The server stays authoritative throughout. Local action methods
//! emit events and mostly do not mutate; replacements pushed by the
//! server are applied wholesale. When the channel is down, actions are
//! dropped with a notice rather than queued, since the replay on
//! reconnect restores everything that matters.

pub mod board;
pub mod chat;
pub mod countdown;
pub mod members;

use chrono::{DateTime, Duration, Utc};

use crate::egui_app::channel::{ChannelStatus, RoomChannel};
use crate::egui_app::config::Config;
use crate::shared::board::{CardAuthor, Stage};
use crate::shared::event::{ClientEvent, ServerEvent};
use crate::shared::limits::CLOSURE_DELAY_SECONDS;
use crate::shared::room::Room;
use crate::shared::user::User;

use self::board::BoardState;
use self::chat::ChatState;
use self::countdown::{milestone_label, Countdown};
use self::members::MemberTracker;

/// State for the room the user is currently in
pub struct RoomState {
    pub room: Room,
    pub user: User,
    pub channel: Option<RoomChannel>,
    pub status: ChannelStatus,
    pub members: MemberTracker,
    pub countdown: Countdown,
    pub chat: ChatState,
    pub board: BoardState,
    /// Terminal: the server closed the room, show the closed modal
    pub closed: bool,
    /// The exit confirmation modal is open
    pub show_exit_confirm: bool,
    /// Room-level notice (dropped actions, channel trouble)
    pub notice: Option<String>,
    closure_deadline: Option<DateTime<Utc>>,
    host_loss_deadline: Option<DateTime<Utc>>,
    closure_requested: bool,
}

impl RoomState {
    /// Build room state without a channel; `enter` attaches one
    pub fn new(room: Room, user: User, now: DateTime<Utc>) -> Self {
        let mut countdown = Countdown::new();
        countdown.start(room.created_at, room.duration_seconds(), now);
        Self {
            room,
            user,
            channel: None,
            status: ChannelStatus::Connecting,
            members: MemberTracker::new(),
            countdown,
            chat: ChatState::new(),
            board: BoardState::new(),
            closed: false,
            show_exit_confirm: false,
            notice: None,
            closure_deadline: None,
            host_loss_deadline: None,
            closure_requested: false,
        }
    }

    /// Enter a room: open the channel, which announces the join
    pub fn enter(config: &Config, room: Room, user: User) -> Self {
        let mut state = Self::new(room, user, Utc::now());
        state.channel = Some(RoomChannel::connect(
            config,
            &state.room.uuid,
            state.user.id,
        ));
        state
    }

    /// Whether the session user currently holds host privileges
    pub fn is_host(&self) -> bool {
        self.members.is_host(self.user.id)
    }

    /// Per-frame drive: drain the channel, then run the local clocks
    pub fn update(&mut self, now: DateTime<Utc>) {
        let events = match &self.channel {
            Some(channel) => channel.poll_events(),
            None => Vec::new(),
        };
        for event in events {
            self.apply_event(event, now);
        }

        while let Some(status) = self.channel.as_ref().and_then(|c| c.poll_status()) {
            if status != self.status {
                tracing::info!("[ROOM] Channel status: {:?}", status);
            }
            self.status = status;
        }

        for event in self.tick(now) {
            self.send(event);
        }
    }

    /// Apply one server event to the sub-states
    pub fn apply_event(&mut self, event: ServerEvent, now: DateTime<Utc>) {
        match event {
            ServerEvent::RoomInfo(room)
            | ServerEvent::RealRoom(room)
            | ServerEvent::RoomUpdated(room) => {
                self.chat.replace_keywords(room.keywords.clone());
                if !self.countdown.is_running() && !self.countdown.is_expired() {
                    self.countdown
                        .start(room.created_at, room.duration_seconds(), now);
                }
                self.room = room;
            }
            ServerEvent::PreviousMessages(messages) => self.chat.replace_messages(messages),
            ServerEvent::PreviousMembers(members) | ServerEvent::MemberUpdate(members) => {
                self.members.replace(members);
                self.check_host_presence(now);
            }
            ServerEvent::PreviousKeywords(keywords) | ServerEvent::KeywordUpdate(keywords) => {
                self.room.keywords = keywords.clone();
                self.chat.replace_keywords(keywords);
            }
            ServerEvent::Message(message) => self.chat.push_message(message),
            ServerEvent::BoardUpdate(sections) | ServerEvent::PreviousBoardData(sections) => {
                self.board.replace(sections)
            }
            ServerEvent::ServerRoomClosed => {
                tracing::info!("[ROOM] Server closed room {}", self.room.uuid);
                self.closed = true;
                self.countdown.halt();
                self.closure_deadline = None;
                self.host_loss_deadline = None;
            }
            ServerEvent::TimeRemaining(seconds) => self.countdown.set_remaining(seconds, now),
            ServerEvent::KeywordLocation {
                keyword,
                message_id,
            } => self.chat.apply_location(&keyword, message_id, now),
        }
    }

    /// Arm or disarm the host-loss closure deadline after a member push
    fn check_host_presence(&mut self, now: DateTime<Utc>) {
        if self.members.has_live_host() || self.members.active_count() == 0 {
            if self.host_loss_deadline.take().is_some() {
                tracing::info!("[ROOM] Host restored, closure cancelled");
            }
        } else if self.host_loss_deadline.is_none() && !self.closed {
            tracing::warn!(
                "[ROOM] No live host in room {}, closing in {}s",
                self.room.uuid,
                CLOSURE_DELAY_SECONDS
            );
            self.host_loss_deadline = Some(now + Duration::seconds(CLOSURE_DELAY_SECONDS));
        }
    }

    /// Run the local clocks; returns the events this frame produced
    pub(crate) fn tick(&mut self, now: DateTime<Utc>) -> Vec<ClientEvent> {
        let mut outgoing = Vec::new();
        if self.closed {
            return outgoing;
        }

        for threshold in self.countdown.tick(now) {
            self.chat.push_system(milestone_label(threshold), now);
        }
        if self.countdown.is_expired()
            && self.closure_deadline.is_none()
            && !self.closure_requested
        {
            self.closure_deadline = Some(now + Duration::seconds(CLOSURE_DELAY_SECONDS));
        }

        let due = |deadline: Option<DateTime<Utc>>| deadline.is_some_and(|d| now >= d);
        if !self.closure_requested
            && (due(self.closure_deadline) || due(self.host_loss_deadline))
        {
            self.closure_requested = true;
            outgoing.push(ClientEvent::RoomClosed {
                room_id: self.room.uuid.clone(),
            });
        }

        if let Some(event) = self.chat.tick(&self.room.uuid, now) {
            outgoing.push(event);
        }
        self.board.tick(now);

        outgoing
    }

    /// Send the input draft as a chat message
    pub fn send_chat(&mut self) {
        if self.closed {
            return;
        }
        if let Some(event) = self.chat.prepare_send(&self.room.uuid, self.user.id) {
            self.send(event);
        }
    }

    /// Ask where a keyword first appears; the answer scrolls the chat
    pub fn click_keyword(&mut self, keyword: &str, now: DateTime<Utc>) {
        if self.closed {
            return;
        }
        if let Some(event) = self.chat.click_keyword(&self.room.uuid, keyword, now) {
            self.send(event);
        }
    }

    /// Remove a keyword; hosts only
    pub fn delete_keyword(&mut self, keyword: &str) {
        if self.closed {
            return;
        }
        let is_host = self.members.is_host(self.user.id);
        match self
            .chat
            .delete_keyword(&self.room.uuid, keyword, self.user.id, is_host)
        {
            Ok(event) => self.send(event),
            Err(message) => self.chat.notice = Some(message),
        }
    }

    /// Send the card draft into the created stage
    pub fn add_card(&mut self, now: DateTime<Utc>) {
        if self.closed {
            return;
        }
        let author = CardAuthor {
            id: self.user.id,
            nickname: self.user.nickname.clone(),
            profile_image: self.user.profile_image.clone(),
        };
        if let Some(event) = self.board.add_card(&self.room.uuid, author, now) {
            self.send(event);
        }
    }

    /// Apply a drop and propose the resulting board; hosts only
    pub fn move_card(&mut self, card_id: &str, to: Stage, index: usize, now: DateTime<Utc>) {
        if self.closed {
            return;
        }
        let is_host = self.members.is_host(self.user.id);
        match self
            .board
            .move_card(&self.room.uuid, card_id, to, index, is_host)
        {
            Ok(Some(event)) => self.send(event),
            Ok(None) => {}
            Err(message) => self.board.set_notice(message, now),
        }
    }

    /// Forward an event to the channel; failures drop the action
    fn send(&mut self, event: ClientEvent) {
        let name = event.name();
        let result = match &self.channel {
            Some(channel) => channel.send(event),
            None => Err("channel not connected".to_string()),
        };
        if let Err(e) = result {
            tracing::warn!("[ROOM] Dropped '{}': {}", name, e);
            self.notice = Some("Connection lost, action not sent".to_string());
        }
    }
}
