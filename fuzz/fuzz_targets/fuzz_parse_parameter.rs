#![no_main]

use libfuzzer_sys::fuzz_target;
use media_type::Parameter;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(parameter) = Parameter::parse(s) {
            assert!(media_type::is_restricted_name(parameter.name()));
        }
    }
});
