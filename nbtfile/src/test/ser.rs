use super::builder::Builder;
use crate::de::from_bytes;
use crate::error::{ErrorKind, Result};
use crate::ser::{encode, encode_compound, encode_payload, to_bytes};
use crate::{Compound, List, NamedTag, Tag, Value};

fn payload(v: impl Into<Value>) -> Result<Vec<u8>> {
    let mut buf = vec![];
    encode_payload(&mut buf, &v.into())?;
    Ok(buf)
}

#[test]
fn primitives() -> Result<()> {
    assert_eq!(payload(-1i8)?, [0xff]);
    assert_eq!(payload(0x0102i16)?, [0x01, 0x02]);
    assert_eq!(payload(-2i32)?, [0xff, 0xff, 0xff, 0xfe]);
    assert_eq!(payload(1i64)?, [0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(payload(1.0f32)?, 1.0f32.to_be_bytes());
    assert_eq!(payload(-0.5f64)?, (-0.5f64).to_be_bytes());
    Ok(())
}

#[test]
fn encode_with_and_without_name() -> Result<()> {
    let mut named = vec![];
    encode(&mut named, "abc", &Value::Short(1234), true)?;
    assert_eq!(named, Builder::new().short("abc", 1234).build());

    let mut unnamed = vec![];
    encode(&mut unnamed, "abc", &Value::Short(1234), false)?;
    assert_eq!(
        unnamed,
        Builder::new().tag(Tag::Short).short_payload(1234).build()
    );
    Ok(())
}

#[test]
fn empty_string() -> Result<()> {
    assert_eq!(payload("")?, [0, 0]);
    Ok(())
}

#[test]
fn multibyte_string_length_is_in_bytes() -> Result<()> {
    let s = "héllo 🦀";
    let bytes = payload(s)?;
    assert_eq!(bytes.len(), 2 + s.len());
    assert_eq!(&bytes[..2], &(s.len() as i16).to_be_bytes());
    assert_eq!(&bytes[2..], s.as_bytes());
    Ok(())
}

#[test]
fn string_too_long() {
    let s = "a".repeat(i16::MAX as usize + 1);
    let err = payload(s).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn string_at_max_length() -> Result<()> {
    let s = "a".repeat(i16::MAX as usize);
    assert_eq!(payload(s)?.len(), 2 + i16::MAX as usize);
    Ok(())
}

#[test]
fn int_list_exact_bytes() -> Result<()> {
    let list = List::from_values(Tag::Int, vec![Value::Int(1), Value::Int(-2), Value::Int(3)]);

    let expected = Builder::new()
        .tag(Tag::Int)
        .int_payload(3)
        .int_payload(1)
        .int_payload(-2)
        .int_payload(3)
        .build();

    assert_eq!(payload(list.clone())?, expected);
    assert_eq!(
        crate::de::decode_payload(&mut expected.as_slice(), Tag::List)?,
        Value::List(list)
    );
    Ok(())
}

#[test]
fn empty_list() -> Result<()> {
    assert_eq!(payload(List::empty())?, [0, 0, 0, 0, 0]);
    assert_eq!(payload(List::new(Tag::Compound))?, [10, 0, 0, 0, 0]);
    Ok(())
}

#[test]
fn heterogeneous_list_is_rejected() {
    let list = List::from_values(Tag::Int, vec![Value::Int(1), Value::Byte(2)]);
    let mut buf = vec![];
    let err = encode_payload(&mut buf, &Value::List(list)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(buf.is_empty());
}

#[test]
fn non_empty_list_of_end_is_rejected() {
    let mut list = List::empty();
    list.push(1i32);

    let err = payload(list).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn list_from_vec_infers_element() -> Result<()> {
    let list = List::from(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(list.element(), Tag::String);

    let bytes = payload(list)?;
    assert_eq!(bytes[0], u8::from(Tag::String));
    Ok(())
}

#[test]
fn byte_array() -> Result<()> {
    assert_eq!(
        payload(vec![1i8, -1, 3])?,
        Builder::new()
            .int_payload(3)
            .byte_array_payload(&[1, -1, 3])
            .build()
    );
    Ok(())
}

#[test]
fn int_array() -> Result<()> {
    assert_eq!(
        payload(vec![1i32, -1])?,
        Builder::new().int_payload(2).int_array_payload(&[1, -1]).build()
    );
    Ok(())
}

#[test]
fn empty_compound_is_one_byte() -> Result<()> {
    let mut buf = vec![];
    encode_compound(&mut buf, &Compound::new())?;
    assert_eq!(buf, [0]);
    Ok(())
}

#[test]
fn greeting_example() -> Result<()> {
    let mut root = Compound::new();
    root.insert("greeting", "hi");

    let bytes = to_bytes(&NamedTag::new("", root))?;

    let mut expected = vec![0x0a, 0x00, 0x00, 0x08, 0x00, 0x08];
    expected.extend_from_slice(b"greeting");
    expected.extend_from_slice(&[0x00, 0x02]);
    expected.extend_from_slice(b"hi");
    expected.push(0x00);

    assert_eq!(bytes, expected);
    Ok(())
}

#[test]
fn compound_matches_builder() -> Result<()> {
    let mut inner = Compound::new();
    inner.insert("x", 1i8);

    let mut root = Compound::new();
    root.insert("name", "Steve");
    root.insert("inner", inner);
    root.insert("scores", List::from_values(Tag::Long, vec![Value::Long(5)]));

    let expected = Builder::new()
        .start_compound("player")
        .string("name", "Steve")
        .start_compound("inner")
        .byte("x", 1)
        .end_compound()
        .start_list("scores", Tag::Long, 1)
        .long_payload(5)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&NamedTag::new("player", root))?, expected);
    Ok(())
}

fn sample() -> Compound {
    let mut pos = List::new(Tag::Double);
    pos.push(1.5f64);
    pos.push(-64.0f64);
    pos.push(3.25f64);

    let mut inventory = List::new(Tag::Compound);
    for (slot, id) in [(0i8, "minecraft:stone"), (1, "minecraft:dirt")] {
        let mut item = Compound::new();
        item.insert("Slot", slot);
        item.insert("id", id);
        item.insert("Count", 64i8);
        inventory.push(item);
    }

    let mut root = Compound::new();
    root.insert("DataVersion", 3465i32);
    root.insert("Health", 20.0f32);
    root.insert("Age", 123456789012i64);
    root.insert("Fire", -20i16);
    root.insert("Pos", pos);
    root.insert("Inventory", inventory);
    root.insert("Seed", vec![1i8, 2, 3]);
    root.insert("UUID", vec![1i32, -2, 3, -4]);
    root.insert("Empty", List::empty());
    root.insert("Nested", List::from(vec![Value::List(List::empty())]));
    root.insert("Name", "Alex ❤");
    root.insert("Flag", true);
    root
}

#[test]
fn round_trip() -> Result<()> {
    let tag = NamedTag::new("root", sample());
    let bytes = to_bytes(&tag)?;
    assert_eq!(from_bytes(&bytes)?, tag);
    Ok(())
}

#[test]
fn round_trip_keeps_compound_order() -> Result<()> {
    let forward: Compound = vec![("a", 1i32), ("b", 2), ("c", 3)].into_iter().collect();
    let backward: Compound = vec![("c", 3i32), ("b", 2), ("a", 1)].into_iter().collect();

    let decoded = from_bytes(&to_bytes(&NamedTag::new("", backward.clone()))?)?;
    assert_eq!(decoded.value, Value::Compound(backward));
    assert_ne!(decoded.value, Value::Compound(forward));
    Ok(())
}
