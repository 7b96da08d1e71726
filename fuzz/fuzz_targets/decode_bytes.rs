#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtfile::de::from_bytes;
use nbtfile::ser::to_bytes;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must be writable again.
    if let Ok(tag) = from_bytes(data) {
        let _bs = to_bytes(&tag).unwrap();
    }
});
