#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_login::models::UserProfile;

fuzz_target!(|data: &[u8]| {
    // A parsed profile must always serialize back for /userinfo
    if let Ok(profile) = serde_json::from_slice::<UserProfile>(data) {
        let _ = serde_json::to_vec(&profile).unwrap();
    }
});
