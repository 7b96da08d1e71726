//! nbtfile reads and writes NBT files: a compressed, self-describing binary
//! tree of named and typed values, as used by *Minecraft: Java Edition* for
//! things like `level.dat` and player data.
//!
//! * For the in-memory tree see [`Value`], [`List`], [`Compound`] and
//!   [`NamedTag`].
//! * For reading and writing raw (uncompressed) NBT see [`de`] and [`ser`].
//! * For whole files, including the compression envelope, see [`NbtFile`].
//!
//! # Quick example
//!
//! Load a `level.dat`, move the world spawn and save it again.
//!
//! ```no_run
//! use nbtfile::{Compression, NbtFile, Value};
//!
//! # fn main() -> nbtfile::error::Result<()> {
//! let mut file = NbtFile::open("level.dat", Compression::Gzip)?;
//!
//! if let Some(root) = file.root_mut() {
//!     if let Some(data) = root.get_mut("Data").and_then(Value::as_compound_mut) {
//!         data.insert("SpawnX", 0i32);
//!         data.insert("SpawnY", 100i32);
//!         data.insert("SpawnZ", 0i32);
//!     }
//! }
//!
//! file.save("level.dat")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Format
//!
//! Every tag starts with a one byte [`Tag`]. Inside a compound the tag is
//! followed by its name, then its payload. List elements have neither a tag
//! byte nor a name, the list declares the element tag once. All numbers are
//! big-endian.

use serde::Serialize;

pub mod de;
pub mod error;
pub mod ser;

mod display;
mod file;
mod value;

pub use file::*;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Serialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
}

// Written out by hand rather than derived, the tags will very rarely change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
        }
    }
}

impl Tag {
    /// The name used for this tag in the text rendering, eg `TAG_Compound`.
    pub fn type_name(self) -> &'static str {
        match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
        }
    }
}
