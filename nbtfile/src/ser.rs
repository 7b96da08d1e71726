//! Encoding of [`NamedTag`] and [`Value`] trees to raw, uncompressed NBT.
//!
//! Use [`to_bytes`] or [`to_writer`] for a complete piece of NBT. Encoding
//! fails rather than produce NBT that cannot be read back, for example a list
//! holding values of a different type than its element tag, or a string too
//! long for its 16 bit length.
//!
//! ```
//! # use nbtfile::{Compound, List, NamedTag, Tag, Value};
//! # use nbtfile::error::Result;
//! # fn main() -> Result<()> {
//! let mut root = Compound::new();
//! root.insert("ints", List::from_values(Tag::Int, vec![Value::Int(1), Value::Int(-2)]));
//!
//! let bytes = nbtfile::ser::to_bytes(&NamedTag::new("", root))?;
//! assert_eq!(bytes[0], u8::from(Tag::Compound));
//! # Ok(())
//! # }
//! ```

use std::convert::TryFrom;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::de::MAX_DEPTH;
use crate::error::{Error, Result};
use crate::{Compound, List, NamedTag, Tag, Value};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len = i16::try_from(s.len()).map_err(|_| {
            Error::format(format!(
                "string of {} bytes is too long for nbt, max is {}",
                s.len(),
                i16::MAX
            ))
        })?;
        self.write_i16::<BigEndian>(len)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::format("len too large"))?;
        self.write_i32::<BigEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write + ?Sized {}

/// Write `tag` as a complete piece of NBT: type byte, name and payload.
pub fn to_writer<W: Write>(mut writer: W, tag: &NamedTag) -> Result<()> {
    encode(&mut writer, &tag.name, &tag.value, true)
}

/// Encode `tag` into a new buffer.
pub fn to_bytes(tag: &NamedTag) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    to_writer(&mut buf, tag)?;
    Ok(buf)
}

/// Write the type byte for `value`, then `name` if `write_name` is set, then
/// the payload.
pub fn encode<W: Write + ?Sized>(
    writer: &mut W,
    name: &str,
    value: &Value,
    write_name: bool,
) -> Result<()> {
    encode_at(writer, name, value, write_name, 0)
}

/// Write only the payload of `value`, as stored for list elements.
pub fn encode_payload<W: Write + ?Sized>(writer: &mut W, value: &Value) -> Result<()> {
    payload_at(writer, value, 0)
}

/// Write the entries of a compound followed by its End tag.
pub fn encode_compound<W: Write + ?Sized>(writer: &mut W, compound: &Compound) -> Result<()> {
    compound_at(writer, compound, 1)
}

fn encode_at<W: Write + ?Sized>(
    writer: &mut W,
    name: &str,
    value: &Value,
    write_name: bool,
    depth: usize,
) -> Result<()> {
    writer.write_tag(value.tag())?;
    if write_name {
        writer.write_size_prefixed_str(name)?;
    }
    payload_at(writer, value, depth)
}

fn payload_at<W: Write + ?Sized>(writer: &mut W, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Byte(v) => writer.write_i8(*v)?,
        Value::Short(v) => writer.write_i16::<BigEndian>(*v)?,
        Value::Int(v) => writer.write_i32::<BigEndian>(*v)?,
        Value::Long(v) => writer.write_i64::<BigEndian>(*v)?,
        Value::Float(v) => writer.write_f32::<BigEndian>(*v)?,
        Value::Double(v) => writer.write_f64::<BigEndian>(*v)?,
        Value::String(v) => writer.write_size_prefixed_str(v)?,
        Value::ByteArray(v) => {
            writer.write_len(v.len())?;
            let bytes: Vec<u8> = v.iter().map(|&b| b as u8).collect();
            writer.write_all(&bytes)?;
        }
        Value::IntArray(v) => {
            writer.write_len(v.len())?;
            for i in v {
                writer.write_i32::<BigEndian>(*i)?;
            }
        }
        Value::List(list) => list_at(writer, list, depth + 1)?,
        Value::Compound(compound) => compound_at(writer, compound, depth + 1)?,
    }
    Ok(())
}

fn list_at<W: Write + ?Sized>(writer: &mut W, list: &List, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::too_deep(MAX_DEPTH));
    }

    let element = list.element();
    if element == Tag::End && !list.is_empty() {
        return Err(Error::format("cannot write non-empty list with element tag End"));
    }

    if let Some(wrong) = list.iter().find(|v| v.tag() != element) {
        return Err(Error::format(format!(
            "list element type mismatch: declared {:?}, found {:?}",
            element,
            wrong.tag()
        )));
    }

    writer.write_tag(element)?;
    writer.write_len(list.len())?;
    for v in list {
        payload_at(writer, v, depth)?;
    }
    Ok(())
}

fn compound_at<W: Write + ?Sized>(writer: &mut W, compound: &Compound, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::too_deep(MAX_DEPTH));
    }

    for (name, value) in compound {
        encode_at(writer, name, value, true, depth)?;
    }
    writer.write_tag(Tag::End)
}
