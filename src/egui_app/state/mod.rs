//! Application State
//!
//! Central state shared across views: the session, the current view,
//! the room (when inside one) and per-surface form state. Background
//! REST calls follow one pattern throughout: spawn a thread, park the
//! receiver, drain it in a `check_*` method once per frame.

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::api::admin::{full_year_series, AdminApiClient, AdminUser};
use crate::egui_app::api::contact::{ContactApiClient, ContactRequest, InquiryType};
use crate::egui_app::api::profile::{validate_profile, ProfileApiClient, RoomHistoryEntry};
use crate::egui_app::api::rooms::RoomsApiClient;
use crate::egui_app::config::Config;
use crate::egui_app::room::RoomState;
use crate::egui_app::session::{self, Session};
use crate::egui_app::types::{AppView, LoginResponse};
use crate::shared::limits;
use crate::shared::room::{CreateRoomRequest, Room, RoomKind};
use crate::shared::user::User;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub current_view: AppView,
    /// Present while the user is inside a room
    pub room: Option<RoomState>,

    // Login
    pub login_code_input: String,
    pending_identity: Option<Receiver<Result<User, String>>>,
    pending_login: Option<Receiver<Result<LoginResponse, String>>>,

    // Lobby
    pub rooms: Vec<Room>,
    pub lobby_filter: Option<RoomKind>,
    pub lobby_page: usize,
    pub lobby_loading: bool,
    pub lobby_error: Option<String>,
    pending_rooms: Option<Receiver<Result<Vec<Room>, String>>>,

    // Create-room dialog
    pub show_create_modal: bool,
    pub create_title: String,
    pub create_kind: RoomKind,
    pub create_capacity: u32,
    pub create_duration: u32,
    pub create_keywords: String,
    pub create_error: Option<String>,
    pending_create: Option<Receiver<Result<Room, String>>>,

    // Profile
    pub profile_nickname: String,
    pub profile_job: String,
    pub profile_error: Option<String>,
    pub profile_saved: bool,
    pub show_profile_confirm: bool,
    pub history: Vec<RoomHistoryEntry>,
    pub history_loading: bool,
    pending_profile: Option<Receiver<Result<User, String>>>,
    pending_history: Option<Receiver<Result<Vec<RoomHistoryEntry>, String>>>,

    // Admin
    pub admin_users: Vec<AdminUser>,
    pub admin_page: usize,
    pub admin_loading: bool,
    pub admin_error: Option<String>,
    /// User queued for deletion, pending the confirm modal
    pub admin_delete_target: Option<(i64, String)>,
    pub admin_years: Vec<i32>,
    pub admin_year: Option<i32>,
    pub admin_signups: [u64; 12],
    pending_admin_users: Option<Receiver<Result<Vec<AdminUser>, String>>>,
    pending_admin_delete: Option<Receiver<Result<i64, String>>>,
    pending_admin_years: Option<Receiver<Result<Vec<i32>, String>>>,
    pending_admin_signups: Option<Receiver<Result<(i32, [u64; 12]), String>>>,

    // Contact
    pub contact_name: String,
    pub contact_email: String,
    pub contact_inquiry: InquiryType,
    pub contact_message: String,
    pub contact_error: Option<String>,
    pub contact_sent: bool,
    pending_contact: Option<Receiver<Result<(), String>>>,
}

impl AppState {
    /// Fresh state on the login view; callers that want the previous
    /// server session probed follow up with `fetch_identity`
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            session: Session::new(),
            current_view: AppView::Login,
            room: None,
            login_code_input: String::new(),
            pending_identity: None,
            pending_login: None,
            rooms: Vec::new(),
            lobby_filter: None,
            lobby_page: 0,
            lobby_loading: false,
            lobby_error: None,
            pending_rooms: None,
            show_create_modal: false,
            create_title: String::new(),
            create_kind: RoomKind::Chat,
            create_capacity: limits::CAPACITY_DEFAULT,
            create_duration: limits::DURATION_DEFAULT_MINUTES,
            create_keywords: String::new(),
            create_error: None,
            pending_create: None,
            profile_nickname: String::new(),
            profile_job: String::new(),
            profile_error: None,
            profile_saved: false,
            show_profile_confirm: false,
            history: Vec::new(),
            history_loading: false,
            pending_profile: None,
            pending_history: None,
            admin_users: Vec::new(),
            admin_page: 0,
            admin_loading: false,
            admin_error: None,
            admin_delete_target: None,
            admin_years: Vec::new(),
            admin_year: None,
            admin_signups: [0; 12],
            pending_admin_users: None,
            pending_admin_delete: None,
            pending_admin_signups: None,
            pending_admin_years: None,
            contact_name: String::new(),
            contact_email: String::new(),
            contact_inquiry: InquiryType::General,
            contact_message: String::new(),
            contact_error: None,
            contact_sent: false,
            pending_contact: None,
        }
    }

    /// Drain every parked receiver; called once per frame
    pub fn poll_background(&mut self) {
        self.check_identity();
        self.check_login();
        self.check_rooms();
        self.check_create();
        self.check_profile();
        self.check_history();
        self.check_admin_users();
        self.check_admin_delete();
        self.check_admin_years();
        self.check_admin_signups();
        self.check_contact();
    }

    // --- login ---

    /// Ask the server who we are
    pub fn fetch_identity(&mut self) {
        if self.pending_identity.is_some() {
            return;
        }
        self.session.loading = true;
        self.session.clear_error();

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(session::fetch_current_user(&config));
        });
        self.pending_identity = Some(rx);
    }

    fn check_identity(&mut self) {
        if let Some(ref rx) = self.pending_identity {
            if let Ok(result) = rx.try_recv() {
                self.pending_identity = None;
                self.session.loading = false;
                match result {
                    Ok(user) => {
                        tracing::info!("[AUTH] Logged in as {}", user.nickname);
                        self.session.set_user(user);
                        self.go_lobby();
                    }
                    Err(e) if e == "Not logged in" => {
                        // Expected on a fresh start, stay on the login view
                    }
                    Err(e) => {
                        tracing::warn!("[AUTH] Identity check failed: {}", e);
                        self.session.set_error(e);
                    }
                }
            }
        }
    }

    /// Exchange the pasted code for a session token
    pub fn handle_login(&mut self) {
        let code = self.login_code_input.trim().to_string();
        if code.is_empty() {
            self.session
                .set_error("Paste the code from the browser page".to_string());
            return;
        }
        self.session.loading = true;
        self.session.clear_error();

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(session::exchange_login_code(&config, code));
        });
        self.pending_login = Some(rx);
    }

    fn check_login(&mut self) {
        if let Some(ref rx) = self.pending_login {
            if let Ok(result) = rx.try_recv() {
                self.pending_login = None;
                self.session.loading = false;
                match result {
                    Ok(login) => {
                        tracing::info!("[AUTH] Login succeeded for {}", login.user.nickname);
                        self.config.set_token(Some(login.token));
                        self.session.set_user(login.user);
                        self.login_code_input.clear();
                        self.go_lobby();
                    }
                    Err(e) => {
                        tracing::warn!("[AUTH] Login failed: {}", e);
                        self.session.set_error(e);
                    }
                }
            }
        }
    }

    pub fn logout(&mut self) {
        tracing::info!("[AUTH] Logging out");
        let config = self.config.clone();
        std::thread::spawn(move || {
            if let Err(e) = session::logout(&config) {
                tracing::warn!("[AUTH] Server logout failed: {}", e);
            }
        });
        self.config.clear_token();
        self.session.clear();
        self.room = None;
        self.rooms.clear();
        self.current_view = AppView::Login;
    }

    // --- lobby ---

    pub fn go_lobby(&mut self) {
        self.current_view = AppView::Lobby;
        self.refresh_rooms();
    }

    pub fn refresh_rooms(&mut self) {
        if self.pending_rooms.is_some() {
            return;
        }
        self.lobby_loading = true;
        self.lobby_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = RoomsApiClient::new(config);
            let _ = tx.send(client.list_rooms());
        });
        self.pending_rooms = Some(rx);
    }

    fn check_rooms(&mut self) {
        if let Some(ref rx) = self.pending_rooms {
            if let Ok(result) = rx.try_recv() {
                self.pending_rooms = None;
                self.lobby_loading = false;
                match result {
                    Ok(rooms) => {
                        self.rooms = rooms;
                        let pages = self.filtered_rooms().len().div_ceil(limits::LOBBY_PAGE_SIZE);
                        self.lobby_page = self.lobby_page.min(pages.saturating_sub(1));
                    }
                    Err(e) => self.lobby_error = Some(e),
                }
            }
        }
    }

    /// Open rooms matching the lobby filter, newest first
    pub fn filtered_rooms(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|r| self.lobby_filter.is_none_or(|kind| r.kind == kind))
            .collect();
        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rooms
    }

    pub fn set_lobby_filter(&mut self, filter: Option<RoomKind>) {
        if self.lobby_filter != filter {
            self.lobby_filter = filter;
            self.lobby_page = 0;
        }
    }

    // --- create room ---

    pub fn open_create_modal(&mut self) {
        self.show_create_modal = true;
        self.create_title.clear();
        self.create_kind = RoomKind::Chat;
        self.create_capacity = limits::CAPACITY_DEFAULT;
        self.create_duration = limits::DURATION_DEFAULT_MINUTES;
        self.create_keywords.clear();
        self.create_error = None;
    }

    pub fn creating_room(&self) -> bool {
        self.pending_create.is_some()
    }

    /// Validate the form and submit it; errors stay in the dialog
    pub fn submit_create_room(&mut self) {
        if self.pending_create.is_some() {
            return;
        }
        let request = CreateRoomRequest {
            uuid: uuid::Uuid::new_v4().to_string(),
            title: self.create_title.trim().to_string(),
            kind: self.create_kind,
            max_member: self.create_capacity,
            duration: self.create_duration,
            keywords: parse_keywords(&self.create_keywords),
        };
        if let Err(e) = request.validate() {
            self.create_error = Some(e.user_message());
            return;
        }
        self.create_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = RoomsApiClient::new(config);
            let _ = tx.send(client.create_room(&request));
        });
        self.pending_create = Some(rx);
    }

    fn check_create(&mut self) {
        if let Some(ref rx) = self.pending_create {
            if let Ok(result) = rx.try_recv() {
                self.pending_create = None;
                match result {
                    Ok(room) => {
                        self.show_create_modal = false;
                        self.enter_room(room);
                    }
                    Err(e) => self.create_error = Some(e),
                }
            }
        }
    }

    // --- rooms ---

    /// Open the channel and switch to the room view for its kind
    pub fn enter_room(&mut self, room: Room) {
        let Some(user) = self.session.user.clone() else {
            return;
        };
        tracing::info!("[ROOM] Entering {} '{}'", room.uuid, room.title);
        let view = match room.kind {
            RoomKind::Chat => AppView::ChatRoom,
            RoomKind::Board => AppView::BoardRoom,
        };
        self.room = Some(RoomState::enter(&self.config, room, user));
        self.current_view = view;
    }

    /// Drop the room (closing its channel) and return to the lobby
    pub fn leave_room(&mut self) {
        if let Some(room) = self.room.take() {
            tracing::info!("[ROOM] Leaving {}", room.room.uuid);
        }
        self.go_lobby();
    }

    // --- profile ---

    pub fn go_profile(&mut self) {
        self.current_view = AppView::Profile;
        self.profile_error = None;
        self.profile_saved = false;
        self.show_profile_confirm = false;
        if let Some(user) = &self.session.user {
            self.profile_nickname = user.nickname.clone();
            self.profile_job = user.job.clone();
        }
        self.fetch_history();
    }

    fn fetch_history(&mut self) {
        if self.pending_history.is_some() {
            return;
        }
        self.history_loading = true;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = ProfileApiClient::new(config);
            let _ = tx.send(client.room_history());
        });
        self.pending_history = Some(rx);
    }

    fn check_history(&mut self) {
        if let Some(ref rx) = self.pending_history {
            if let Ok(result) = rx.try_recv() {
                self.pending_history = None;
                self.history_loading = false;
                match result {
                    Ok(history) => self.history = history,
                    Err(e) => self.profile_error = Some(e),
                }
            }
        }
    }

    pub fn profile_saving(&self) -> bool {
        self.pending_profile.is_some()
    }

    /// Whether the profile inputs differ from the stored user
    pub fn profile_dirty(&self) -> bool {
        self.session.user.as_ref().is_some_and(|user| {
            user.nickname != self.profile_nickname.trim() || user.job != self.profile_job.trim()
        })
    }

    /// Submit the profile after the confirm modal
    pub fn save_profile(&mut self) {
        if self.pending_profile.is_some() {
            return;
        }
        let nickname = self.profile_nickname.trim().to_string();
        let job = self.profile_job.trim().to_string();
        if let Err(e) = validate_profile(&nickname, &job) {
            self.profile_error = Some(e);
            return;
        }
        self.profile_error = None;
        self.profile_saved = false;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = ProfileApiClient::new(config);
            let _ = tx.send(client.update_profile(&nickname, &job));
        });
        self.pending_profile = Some(rx);
    }

    fn check_profile(&mut self) {
        if let Some(ref rx) = self.pending_profile {
            if let Ok(result) = rx.try_recv() {
                self.pending_profile = None;
                match result {
                    Ok(user) => {
                        tracing::info!("[PROFILE] Updated nickname to {}", user.nickname);
                        self.profile_nickname = user.nickname.clone();
                        self.profile_job = user.job.clone();
                        self.session.set_user(user);
                        self.profile_saved = true;
                    }
                    Err(e) => self.profile_error = Some(e),
                }
            }
        }
    }

    // --- admin ---

    pub fn go_admin(&mut self) {
        self.current_view = AppView::Admin;
        self.admin_error = None;
        self.admin_delete_target = None;
        self.fetch_admin_users();
        self.fetch_admin_years();
    }

    fn fetch_admin_users(&mut self) {
        if self.pending_admin_users.is_some() {
            return;
        }
        self.admin_loading = true;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = AdminApiClient::new(config);
            let _ = tx.send(client.list_users());
        });
        self.pending_admin_users = Some(rx);
    }

    fn check_admin_users(&mut self) {
        if let Some(ref rx) = self.pending_admin_users {
            if let Ok(result) = rx.try_recv() {
                self.pending_admin_users = None;
                self.admin_loading = false;
                match result {
                    Ok(users) => {
                        let pages = users.len().div_ceil(limits::ADMIN_PAGE_SIZE);
                        self.admin_page = self.admin_page.min(pages.saturating_sub(1));
                        self.admin_users = users;
                    }
                    Err(e) => self.admin_error = Some(e),
                }
            }
        }
    }

    pub fn admin_deleting(&self) -> bool {
        self.pending_admin_delete.is_some()
    }

    /// Delete the user confirmed in the modal
    pub fn delete_admin_user(&mut self, user_id: i64) {
        if self.pending_admin_delete.is_some() {
            return;
        }
        self.admin_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = AdminApiClient::new(config);
            let _ = tx.send(client.delete_user(user_id).map(|_| user_id));
        });
        self.pending_admin_delete = Some(rx);
    }

    fn check_admin_delete(&mut self) {
        if let Some(ref rx) = self.pending_admin_delete {
            if let Ok(result) = rx.try_recv() {
                self.pending_admin_delete = None;
                match result {
                    Ok(user_id) => {
                        tracing::info!("[ADMIN] Deleted user {}", user_id);
                        self.admin_users.retain(|u| u.id != user_id);
                        let pages = self.admin_users.len().div_ceil(limits::ADMIN_PAGE_SIZE);
                        self.admin_page = self.admin_page.min(pages.saturating_sub(1));
                    }
                    Err(e) => self.admin_error = Some(e),
                }
            }
        }
    }

    fn fetch_admin_years(&mut self) {
        if self.pending_admin_years.is_some() {
            return;
        }
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = AdminApiClient::new(config);
            let _ = tx.send(client.available_years());
        });
        self.pending_admin_years = Some(rx);
    }

    fn check_admin_years(&mut self) {
        if let Some(ref rx) = self.pending_admin_years {
            if let Ok(result) = rx.try_recv() {
                self.pending_admin_years = None;
                match result {
                    Ok(years) => {
                        self.admin_years = years;
                        if self.admin_year.is_none() {
                            if let Some(latest) = self.admin_years.iter().copied().max() {
                                self.select_admin_year(latest);
                            }
                        }
                    }
                    Err(e) => self.admin_error = Some(e),
                }
            }
        }
    }

    /// Switch the signup chart to another year
    pub fn select_admin_year(&mut self, year: i32) {
        if self.admin_year == Some(year) {
            return;
        }
        self.admin_year = Some(year);
        self.admin_signups = [0; 12];

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = AdminApiClient::new(config);
            let result = client
                .monthly_signups(year)
                .map(|signups| (year, full_year_series(&signups)));
            let _ = tx.send(result);
        });
        self.pending_admin_signups = Some(rx);
    }

    fn check_admin_signups(&mut self) {
        if let Some(ref rx) = self.pending_admin_signups {
            if let Ok(result) = rx.try_recv() {
                self.pending_admin_signups = None;
                match result {
                    // A quick year change may have outrun this response
                    Ok((year, series)) if self.admin_year == Some(year) => {
                        self.admin_signups = series;
                    }
                    Ok(_) => {}
                    Err(e) => self.admin_error = Some(e),
                }
            }
        }
    }

    // --- contact ---

    pub fn go_contact(&mut self) {
        self.current_view = AppView::Contact;
        self.contact_error = None;
        self.contact_sent = false;
        if let Some(user) = &self.session.user {
            if self.contact_name.is_empty() {
                self.contact_name = user.nickname.clone();
            }
            if self.contact_email.is_empty() {
                self.contact_email = user.email.clone();
            }
        }
    }

    pub fn contact_sending(&self) -> bool {
        self.pending_contact.is_some()
    }

    pub fn submit_contact(&mut self) {
        if self.pending_contact.is_some() {
            return;
        }
        let request = ContactRequest {
            name: self.contact_name.trim().to_string(),
            email: self.contact_email.trim().to_string(),
            inquiry: self.contact_inquiry,
            message: self.contact_message.trim().to_string(),
        };
        if let Err(e) = request.validate() {
            self.contact_error = Some(e);
            return;
        }
        self.contact_error = None;
        self.contact_sent = false;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = ContactApiClient::new(config);
            let _ = tx.send(client.send(&request));
        });
        self.pending_contact = Some(rx);
    }

    fn check_contact(&mut self) {
        if let Some(ref rx) = self.pending_contact {
            if let Ok(result) = rx.try_recv() {
                self.pending_contact = None;
                match result {
                    Ok(()) => {
                        self.contact_sent = true;
                        self.contact_message.clear();
                    }
                    Err(e) => self.contact_error = Some(e),
                }
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the free-text keyword field into bare keywords
///
/// Commas and spaces both separate; a leading `#` is tolerated since
/// that is how keywords render everywhere else.
fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split([',', ' '])
        .map(|k| k.trim().trim_start_matches('#'))
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
