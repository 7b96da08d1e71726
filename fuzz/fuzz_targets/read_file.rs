#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtfile::{Compression, NbtFile};

fuzz_target!(|data: &[u8]| {
    let _ = NbtFile::read_from(data, Compression::Uncompressed);
    let _ = NbtFile::read_from(data, Compression::Gzip);
});
