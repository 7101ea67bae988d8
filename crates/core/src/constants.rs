/// Decimal precision for stored exchange rates
pub const RATE_DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display and summary rounding
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Hours after which the stored rate table is considered stale
pub const RATE_REFRESH_INTERVAL_HOURS: i64 = 24;

/// Days an invitation stays open before it is flagged as expired
pub const INVITATION_EXPIRY_DAYS: i64 = 7;
