//! Decoding of raw, uncompressed NBT into [`NamedTag`] and [`Value`] trees.
//!
//! Decoding works on anything implementing [`Read`]. Each tag is decoded
//! after its one byte [`Tag`] has been read by the caller, since that byte is
//! what decides which decoder runs. [`from_reader`] and [`from_bytes`] do that
//! first read for you.
//!
//! ```
//! # use nbtfile::de::from_bytes;
//! # use nbtfile::{Value, error::Result};
//! # fn main() -> Result<()> {
//! let input = [
//!     0x0a, 0x00, 0x00, // compound, empty name
//!     0x08, 0x00, 0x08, b'g', b'r', b'e', b'e', b't', b'i', b'n', b'g',
//!     0x00, 0x02, b'h', b'i', // string "greeting" = "hi"
//!     0x00, // end
//! ];
//!
//! let root = from_bytes(&input)?;
//! assert_eq!(root.name, "");
//! let greeting = root.value.as_compound().and_then(|c| c.get("greeting"));
//! assert_eq!(greeting.and_then(Value::as_str), Some("hi"));
//! # Ok(())
//! # }
//! ```
//!
//! Every length in NBT is signed. Negative lengths are rejected as invalid
//! NBT, as is running out of input before a declared length is satisfied.

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, List, NamedTag, Tag, Value};

/// Maximum nesting of lists and compounds accepted when decoding or encoding.
pub const MAX_DEPTH: usize = 512;

// Upper bound, in bytes, on what is reserved up front for a declared length.
// Longer values grow as their bytes actually arrive.
pub(crate) const PREALLOC_LIMIT: usize = 64 * 1024;

/// Number of `T` to reserve for a declared length of `len`, keeping the
/// reservation within [`PREALLOC_LIMIT`] bytes.
pub(crate) fn prealloc_capacity<T>(len: usize) -> usize {
    len.min(PREALLOC_LIMIT / std::mem::size_of::<T>().max(1))
}

pub(crate) trait ReadNbt: Read {
    fn read_tag(&mut self) -> Result<Tag> {
        let tag = self.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32::<BigEndian>()?;
        usize::try_from(len).map_err(|_| Error::negative_len(len))
    }

    fn read_size_prefixed_str(&mut self) -> Result<String> {
        let len = self.read_i16::<BigEndian>()?;
        let len = usize::try_from(len).map_err(|_| Error::negative_len(len.into()))?;
        let buf = self.read_bytes(len)?;

        String::from_utf8(buf).map_err(|e| Error::nonunicode_string(e.as_bytes()))
    }

    /// Read exactly `len` bytes, however many reads that takes.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(prealloc_capacity::<u8>(len));
        Read::take(&mut *self, len as u64).read_to_end(&mut buf)?;

        if buf.len() != len {
            return Err(Error::unexpected_eof());
        }

        Ok(buf)
    }
}

impl<T> ReadNbt for T where T: Read + ?Sized {}

/// Read one tag byte followed by that named tag. This is how any complete
/// piece of NBT starts.
pub fn from_reader<R: Read>(mut reader: R) -> Result<NamedTag> {
    let tag = reader.read_tag()?;
    decode(&mut reader, tag, true)
}

/// Decode a named tag from the start of `input`. Trailing bytes are ignored.
pub fn from_bytes(input: &[u8]) -> Result<NamedTag> {
    from_reader(input)
}

/// Decode a tag whose type byte, `tag`, has already been consumed. If
/// `read_name` is set the name is read first, otherwise the tag is given the
/// empty name.
pub fn decode<R: Read + ?Sized>(reader: &mut R, tag: Tag, read_name: bool) -> Result<NamedTag> {
    decode_at(reader, tag, read_name, 0)
}

/// Decode the payload for `tag`: the value without a type byte or name, as
/// stored for list elements.
pub fn decode_payload<R: Read + ?Sized>(reader: &mut R, tag: Tag) -> Result<Value> {
    payload_at(reader, tag, 0)
}

/// Decode the entries of a compound up to and including its End tag.
pub fn decode_compound<R: Read + ?Sized>(reader: &mut R) -> Result<Compound> {
    compound_at(reader, 1)
}

fn decode_at<R: Read + ?Sized>(
    reader: &mut R,
    tag: Tag,
    read_name: bool,
    depth: usize,
) -> Result<NamedTag> {
    let name = if read_name {
        reader.read_size_prefixed_str()?
    } else {
        String::new()
    };

    let value = payload_at(reader, tag, depth)?;
    Ok(NamedTag { name, value })
}

fn payload_at<R: Read + ?Sized>(reader: &mut R, tag: Tag, depth: usize) -> Result<Value> {
    Ok(match tag {
        // End tags have no name or value.
        Tag::End => return Err(Error::unexpected_end()),
        Tag::Byte => Value::Byte(reader.read_i8()?),
        Tag::Short => Value::Short(reader.read_i16::<BigEndian>()?),
        Tag::Int => Value::Int(reader.read_i32::<BigEndian>()?),
        Tag::Long => Value::Long(reader.read_i64::<BigEndian>()?),
        Tag::Float => Value::Float(reader.read_f32::<BigEndian>()?),
        Tag::Double => Value::Double(reader.read_f64::<BigEndian>()?),
        Tag::String => Value::String(reader.read_size_prefixed_str()?),
        Tag::ByteArray => {
            let len = reader.read_len()?;
            let bytes = reader.read_bytes(len)?;
            Value::ByteArray(bytes.into_iter().map(|b| b as i8).collect())
        }
        Tag::IntArray => {
            let len = reader.read_len()?;
            let mut ints = Vec::with_capacity(prealloc_capacity::<i32>(len));
            for _ in 0..len {
                ints.push(reader.read_i32::<BigEndian>()?);
            }
            Value::IntArray(ints)
        }
        Tag::List => Value::List(list_at(reader, depth + 1)?),
        Tag::Compound => Value::Compound(compound_at(reader, depth + 1)?),
    })
}

fn list_at<R: Read + ?Sized>(reader: &mut R, depth: usize) -> Result<List> {
    if depth > MAX_DEPTH {
        return Err(Error::too_deep(MAX_DEPTH));
    }

    let element = reader.read_tag()?;
    let len = reader.read_len()?;

    if element == Tag::End && len > 0 {
        return Err(Error::format(format!(
            "invalid nbt: list of {} end tags",
            len
        )));
    }

    // Grown per element. Each level of nested lists may declare i32::MAX.
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(payload_at(reader, element, depth)?);
    }

    Ok(List::from_values(element, values))
}

fn compound_at<R: Read + ?Sized>(reader: &mut R, depth: usize) -> Result<Compound> {
    if depth > MAX_DEPTH {
        return Err(Error::too_deep(MAX_DEPTH));
    }

    let mut compound = Compound::new();
    loop {
        let tag = reader.read_tag()?;
        if tag == Tag::End {
            break;
        }

        // A repeated name replaces the earlier value.
        let NamedTag { name, value } = decode_at(reader, tag, true, depth)?;
        compound.insert(name, value);
    }

    Ok(compound)
}
