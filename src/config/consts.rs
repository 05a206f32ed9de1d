// src/config/consts.rs

// Net config
pub const SITE_URL: &str = "https://svlabo.jp/";
pub const USER_AGENT: &str = "deck_scrape/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_POST_PAGES: usize = 2;

// Page markers
pub const TABLE_HEADER_ID: &str = "table_header";
pub const DECKLIST_BODY_ID: &str = "decklist_body";
pub const DECK_SELECT_ID: &str = "deckname_select_elm";
pub const CARD_NAME_CLASS: &str = "name_backimg2";
pub const PAGER_NEXT_CLASS: &str = "pager_next_link";
pub const POST_TITLE_MARKER: &str = "デッキリスト比較";

pub const RATING_HEADER: &str = "レート";
pub const STREAK_HEADER: &str = "連勝数";
pub const COUNT_HEADER: &str = "採用枚数";
pub const DATE_ROW_LABEL: &str = "使用日";

// The rating row ends with four summary columns that carry no rating
pub const RATING_ROW_TRAILING_CELLS: usize = 4;

// Deck format
pub const DECK_SIZE: i32 = 40;
pub const MAX_COPIES: i32 = 3;
pub const PENALTY_EPSILON: f64 = 1e-6;

// Slot thresholds on the weighted average
pub const CORE_SLOT_MIN: f64 = 2.72;
pub const EXCLUDED_SLOT_MAX: f64 = 0.28;

// Deck code
pub const SHARE_ENDPOINT: &str = "https://shadowverse-wb.com/web/Deck/share";
pub const SHARE_FORMAT_VERSION: u32 = 2;
pub const SHARE_LANG: &str = "ko";
pub const DEFAULT_CLASS_ID: u32 = 2;
pub const CODE_SEPARATOR: &str = ".";

// Results
pub const SUMMARY_ROW_NAME: &str = "총 합";
pub const NOT_APPLICABLE: &str = "N/A";
pub const INFINITE_SCORE: &str = "INF";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const POSTS_CACHE_FILE: &str = "posts.csv";
pub const DEFAULT_CATALOG_FILE: &str = "card_database.json";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "deck";
