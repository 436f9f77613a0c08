//! Constant values shared across tests.

/// Email of the default fixture user.
pub static TEST_EMAIL: &str = "rider@example.com";

/// Plain-text password of every fixture user.
pub static TEST_PASSWORD: &str = "correct horse battery";

/// Bcrypt cost used in tests, the lowest bcrypt accepts so hashing stays fast.
pub const TEST_PASSWORD_HASH_COST: u32 = 4;
