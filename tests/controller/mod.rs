//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and the
//! session handling around authentication and ordering.

mod auth;
mod journey;
mod order;
mod station;

use railway_test_utils::prelude::*;

use crate::util::json_body;
