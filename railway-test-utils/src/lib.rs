//! Test harness for the railway crate.
//!
//! Tests configure their environment with [`TestBuilder`] and receive a [`TestContext`]
//! holding an in-memory SQLite database and an in-memory session. Fixture helpers reached
//! through the context (`test.booking()`, `test.user()`) insert records directly.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD_HASH_COST},
        fixtures::booking::{mock_timestamp, BookedJourney},
        TestBuilder, TestContext, TestError,
    };
}
