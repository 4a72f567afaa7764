//! Validation Limits
//!
//! Field limits the server enforces and the client checks before
//! submission. Lengths are in characters (Unicode scalar values), not
//! bytes, so Hangul input counts the way users expect.

/// Maximum chat message length for user-authored messages
pub const MESSAGE_MAX_CHARS: usize = 80;

/// Maximum kanban card text length
pub const CARD_MAX_CHARS: usize = 10;

/// Maximum cards in the "created" stage, all authors combined
pub const CREATED_STAGE_MAX_CARDS: usize = 7;

/// Maximum cards one author may hold in the "created" stage
pub const CREATED_STAGE_MAX_PER_AUTHOR: usize = 2;

/// Maximum keywords per room
pub const KEYWORDS_MAX: usize = 3;

/// Keyword length bounds
pub const KEYWORD_MIN_CHARS: usize = 1;
pub const KEYWORD_MAX_CHARS: usize = 6;

/// Room title length bounds
pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 20;

/// Room capacity bounds and default
pub const CAPACITY_MIN: u32 = 2;
pub const CAPACITY_MAX: u32 = 10;
pub const CAPACITY_DEFAULT: u32 = 4;

/// Room duration bounds and default, in minutes
pub const DURATION_MIN_MINUTES: u32 = 5;
pub const DURATION_MAX_MINUTES: u32 = 20;
pub const DURATION_DEFAULT_MINUTES: u32 = 10;

/// Profile field limits
pub const NICKNAME_MAX_CHARS: usize = 20;
pub const JOB_MAX_CHARS: usize = 12;

/// Countdown milestone thresholds in seconds, descending
pub const MILESTONES_SECONDS: [i64; 5] = [300, 180, 60, 30, 0];

/// Rooms shown per lobby page
pub const LOBBY_PAGE_SIZE: usize = 6;

/// Users shown per admin page
pub const ADMIN_PAGE_SIZE: usize = 10;

/// Keyword lookup retry policy
pub const KEYWORD_LOOKUP_ATTEMPTS: u32 = 3;
pub const KEYWORD_LOOKUP_RETRY_SECONDS: i64 = 2;

/// Delay before the client requests closure of an expired room
pub const CLOSURE_DELAY_SECONDS: i64 = 1;
