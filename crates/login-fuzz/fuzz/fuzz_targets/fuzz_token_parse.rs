#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_login::models::TokenResponse;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only yield a token or an error
    if let Ok(response) = serde_json::from_slice::<TokenResponse>(data) {
        let _ = response.into_access_token();
    }
});
