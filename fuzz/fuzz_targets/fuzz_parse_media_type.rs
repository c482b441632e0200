#![no_main]

use libfuzzer_sys::fuzz_target;
use media_type::MediaType;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Some(media_type) = MediaType::maybe(s) else {
            return;
        };

        // empty quoted values serialize as `name=`, which is not a token
        if media_type.parameters().iter().any(|p| p.value().is_empty()) {
            return;
        }

        let serialized = media_type.to_string();
        assert_eq!(MediaType::parse(&serialized).as_ref(), Ok(&media_type));
    }
});
