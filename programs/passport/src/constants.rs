pub const SEED_IDENTITY: &[u8] = b"identity";
pub const SEED_SCORE: &[u8] = b"score";
pub const SEED_TRANSFER_REQUEST: &[u8] = b"transfer_request";

/// How long a transfer request stays claimable after initiation.
pub const TRANSFER_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Credit scores live on a 0-1000 scale.
pub const SCORE_MAX: u16 = 1000;
pub const SCORE_HIGH_THRESHOLD: u16 = 700;
pub const SCORE_MEDIUM_THRESHOLD: u16 = 500;
