//! Fuzz target for extracting language codes from tier IDs.

#![no_main]

use eafkit::eaf::fuzz_language_code;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tier_id) = std::str::from_utf8(data) {
        let _ = fuzz_language_code(tier_id);
    }
});
