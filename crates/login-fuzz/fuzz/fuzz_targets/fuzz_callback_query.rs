#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_login::server::oauth::handlers::CallbackQuery;

fuzz_target!(|data: &[u8]| {
    // Raw callback query strings come straight from the browser
    if let Ok(raw) = std::str::from_utf8(data) {
        if CallbackQuery::parse(raw).is_ok() {
            assert!(!raw.contains(';'), "accepted a semicolon separator");
        }
    }
});
