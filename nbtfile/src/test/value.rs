use crate::{Compound, List, NamedTag, Tag, Value};

#[test]
fn value_tags() {
    assert_eq!(Value::from(1i8).tag(), Tag::Byte);
    assert_eq!(Value::from(1u16).tag(), Tag::Short);
    assert_eq!(Value::from(1i32).tag(), Tag::Int);
    assert_eq!(Value::from(1u64).tag(), Tag::Long);
    assert_eq!(Value::from(1f32).tag(), Tag::Float);
    assert_eq!(Value::from(1f64).tag(), Tag::Double);
    assert_eq!(Value::from(vec![1i8]).tag(), Tag::ByteArray);
    assert_eq!(Value::from("s").tag(), Tag::String);
    assert_eq!(Value::from(List::empty()).tag(), Tag::List);
    assert_eq!(Value::from(Compound::new()).tag(), Tag::Compound);
    assert_eq!(Value::from(vec![1i32]).tag(), Tag::IntArray);
    assert_eq!(Value::from(true), Value::Byte(1));
}

#[test]
fn accessors() {
    assert_eq!(Value::Short(-3).as_i64(), Some(-3));
    assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    assert_eq!(Value::String("x".into()).as_i64(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert!(Value::Int(1).as_compound().is_none());
    assert!(Value::from(List::empty()).as_list().is_some());
}

#[test]
fn compound_insert_replaces_in_place() {
    let mut c = Compound::new();
    assert_eq!(c.insert("a", 1i32), None);
    c.insert("b", 2i32);
    assert_eq!(c.insert("a", "again"), Some(Value::Int(1)));

    let entries: Vec<_> = c.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    assert_eq!(
        entries,
        [("a", Value::from("again")), ("b", Value::Int(2))]
    );
}

#[test]
fn compound_remove_keeps_order() {
    let mut c: Compound = vec![("a", 1i32), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(c.remove("b"), Some(Value::Int(2)));
    assert_eq!(c.remove("b"), None);

    let names: Vec<_> = c.names().cloned().collect();
    assert_eq!(names, ["a", "c"]);
    assert!(c.contains_key("c"));
    assert!(!c.contains_key("b"));
}

#[test]
fn compound_equality_is_ordered() {
    let ab: Compound = vec![("a", 1i32), ("b", 2)].into_iter().collect();
    let ba: Compound = vec![("b", 2i32), ("a", 1)].into_iter().collect();
    let ab2: Compound = vec![("a", 1i32), ("b", 2)].into_iter().collect();

    assert_eq!(ab, ab2);
    assert_ne!(ab, ba);
    assert_ne!(ab, Compound::new());
}

#[test]
fn compound_get_mut() {
    let mut c = Compound::new();
    c.insert("n", 1i32);
    *c.get_mut("n").unwrap() = Value::Int(5);
    assert_eq!(c["n"], Value::Int(5));

    for (_, v) in c.iter_mut() {
        *v = Value::Int(6);
    }
    assert_eq!(c.get("n"), Some(&Value::Int(6)));
}

#[test]
fn list_does_not_enforce_element_on_push() {
    let mut list = List::new(Tag::Int);
    list.push(1i32);
    list.push("not an int");

    assert_eq!(list.len(), 2);
    assert_eq!(list.element(), Tag::Int);
}

#[test]
fn list_values() {
    let mut list = List::new(Tag::Byte);
    assert!(list.is_empty());
    list.push(1i8);
    list.values_mut().push(Value::Byte(2));

    assert_eq!(list.get(1), Some(&Value::Byte(2)));
    assert_eq!(list.clone().into_values(), vec![Value::Byte(1), Value::Byte(2)]);

    let sum: i64 = list.iter().filter_map(Value::as_i64).sum();
    assert_eq!(sum, 3);
}

#[test]
fn list_element_is_part_of_equality() {
    assert_ne!(List::empty(), List::new(Tag::Int));
}

#[test]
fn named_tag_equality() {
    assert_eq!(NamedTag::new("a", 1i32), NamedTag::new("a", 1i32));
    assert_ne!(NamedTag::new("a", 1i32), NamedTag::new("b", 1i32));
    assert_ne!(NamedTag::new("a", 1i32), NamedTag::new("a", 1i64));
}

#[test]
fn serialize_to_json() {
    let mut root = Compound::new();
    root.insert("name", "Steve");
    root.insert("pos", List::from_values(Tag::Int, vec![Value::Int(1), Value::Int(2)]));
    root.insert("bytes", vec![1i8, -1]);

    let json = serde_json::to_string(&Value::Compound(root)).unwrap();
    assert_eq!(json, r#"{"name":"Steve","pos":[1,2],"bytes":[1,-1]}"#);
}
