//! Fuzzing library for oauth-login.
//!
//! Targets cover JSON deserialization of the provider's token and user
//! payloads and parsing of the raw OAuth callback query, all of which
//! arrive from outside the trust boundary.
//!
//! # Usage
//!
//! ```bash
//! cd crates/login-fuzz
//! cargo +nightly fuzz run fuzz_token_parse -- -max_total_time=60
//! ```

pub use oauth_login::models;
