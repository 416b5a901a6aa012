pub const OWNED_CRATES_ENDPOINT: &str = "/crates/owned";
pub const CRATE_CONTENT_ENDPOINT: &str = "/crates/content";
pub const OPEN_CRATE_ENDPOINT: &str = "/crates/open";

pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const CURRENCY_NAME: &str = "SHOTS";

// Reel card geometry: 200px card plus 20px margin on each side.
pub const CARD_WIDTH: f64 = 200.0;
pub const CARD_MARGIN: f64 = 20.0;
pub const TOTAL_CARD_WIDTH: f64 = CARD_WIDTH + CARD_MARGIN * 2.0;

// Full traversals of the prize list before the reel is allowed to stop.
pub const MIN_FULL_CYCLES: u32 = 15;
pub const MAX_FULL_CYCLES: u32 = 18;
pub const STOP_DURATION_MS: f64 = 2000.0;

// Prize wheel limits and animation.
pub const WHEEL_MIN_ITEMS: usize = 2;
pub const WHEEL_MAX_ITEMS: usize = 12;
pub const WHEEL_SPIN_DURATION_MS: f64 = 3000.0;
pub const WHEEL_MIN_SPINS: f64 = 5.0;
pub const WHEEL_MAX_SPINS: f64 = 8.0;
