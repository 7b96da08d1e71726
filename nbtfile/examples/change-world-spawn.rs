//! This executable takes a path to a level.dat file for a world, and spits out
//! a new level.dat file in the current directory. The data is changed so that
//! the world spawn is set to 0,0.

use nbtfile::{Compression, NbtFile, Value};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let mut leveldat = NbtFile::open(&args[1], Compression::Gzip).unwrap();

    let data = leveldat
        .root_mut()
        .and_then(|root| root.get_mut("Data"))
        .and_then(Value::as_compound_mut)
        .expect("level.dat should have a Data compound");

    data.insert("SpawnX", 0i32);
    data.insert("SpawnY", 100i32);
    data.insert("SpawnZ", 0i32);

    leveldat.save("level.dat").unwrap();
}
