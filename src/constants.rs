use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places for converted amounts and displayed rates
pub const AMOUNT_DECIMAL_PLACES: u32 = 6;

/// Flat fee rate applied to amount conversions
pub const DEFAULT_FEE_RATE: Decimal = dec!(0.01);

/// Quiet period before a buffered keystroke is committed
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;

/// Duration of the simulated exchange submission
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 3000;

/// How long a notification stays fully visible
pub const DEFAULT_NOTIFICATION_VISIBLE_MS: u64 = 2000;

/// How long a notification takes to fade out before removal
pub const DEFAULT_NOTIFICATION_FADE_MS: u64 = 300;
