#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtfile::de::from_bytes;
use nbtfile::ser::to_bytes;
use nbtfile::{Compound, NamedTag, Value};

fuzz_target!(|v: Value| {
    let mut root = Compound::new();
    root.insert("", v);
    let tag = NamedTag::new("", root);

    // Writing can legitimately fail, eg for strings that are too long.
    if let Ok(bs) = to_bytes(&tag) {
        let back = from_bytes(&bs).unwrap();
        assert_eq!(to_bytes(&back).unwrap(), bs);
    }
});
