//! Fuzz target for EAF XML parsing and document assembly.
//!
//! This fuzzer feeds arbitrary byte sequences to the EAF reader,
//! checking for panics, crashes, or hangs.

#![no_main]

use eafkit::eaf::io_eaf_xml::from_eaf_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }
    let _ = from_eaf_slice(data);
});
