use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::Tag;

/// Value is a complete NBT payload. It owns its data. Compounds and Lists are
/// recursively held, so a single `Value` can be an entire tree.
///
/// A value does not know its own name. Names belong to the place a value is
/// stored: the key in a [`Compound`], or the [`NamedTag`] wrapping a root.
/// List elements have no name at all.
///
/// ```
/// # use nbtfile::{Compound, List, Tag, Value};
/// let mut pos = List::new(Tag::Double);
/// pos.push(1.5f64);
/// pos.push(64.0f64);
/// pos.push(-3.25f64);
///
/// let mut player = Compound::new();
/// player.insert("Name", "Steve");
/// player.insert("Pos", pos);
///
/// let value = Value::Compound(player);
/// assert_eq!(value.tag(), Tag::Compound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl Value {
    /// The tag that would be written before this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// A value together with its name, as found at the root of NBT data or as a
/// child of a compound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTag {
    pub name: String,
    pub value: Value,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }
}

/// An ordered sequence of unnamed values that all share the element tag.
///
/// The element tag is recorded once for the whole list. It is not checked
/// when values are added; writing a list containing a value of a different
/// type fails instead. Empty lists conventionally use [`Tag::End`].
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    values: Vec<Value>,
}

impl List {
    pub fn new(element: Tag) -> Self {
        Self {
            element,
            values: Vec::new(),
        }
    }

    /// An empty list with element tag End.
    pub fn empty() -> Self {
        Self::new(Tag::End)
    }

    pub fn from_values(element: Tag, values: Vec<Value>) -> Self {
        Self { element, values }
    }

    /// The declared element tag.
    pub fn element(&self) -> Tag {
        self.element
    }

    pub fn set_element(&mut self, element: Tag) {
        self.element = element;
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<Value> {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Takes the element tag from the first value, or End for an empty vector.
impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        let element = values.first().map(Value::tag).unwrap_or(Tag::End);
        Self { element, values }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// The element tag is implied by the values in self-describing formats.
impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

/// A mapping of unique names to values, kept in insertion order.
///
/// Two compounds are equal only if they hold the same entries in the same
/// order, so a compound read back from written NBT compares equal to the
/// original.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Compound(IndexMap<String, Value>);

impl Compound {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a value under `name`. If the name is already present the value
    /// is replaced in place, keeping its original position, and the old value
    /// is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    /// Remove the value under `name`, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    pub fn names(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut compound = Compound::new();
        for (k, v) in iter {
            compound.insert(k, v);
        }
        compound
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::ops::Index<&str> for Compound {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        &self.0[name]
    }
}

#[cfg(feature = "arbitrary1")]
fn het_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        let element = u.arbitrary::<Tag>()?;
        let values = match element {
            Tag::End => vec![],
            Tag::Byte => het_list(u, Byte)?,
            Tag::Short => het_list(u, Short)?,
            Tag::Int => het_list(u, Int)?,
            Tag::Long => het_list(u, Long)?,
            Tag::Float => het_list(u, Float)?,
            Tag::Double => het_list(u, Double)?,
            Tag::ByteArray => het_list(u, ByteArray)?,
            Tag::String => het_list(u, String)?,
            Tag::List => het_list(u, List)?,
            Tag::Compound => het_list(u, Compound)?,
            Tag::IntArray => het_list(u, IntArray)?,
        };

        Ok(Self::from_values(element, values))
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary_iter::<(std::string::String, Value)>()?
            .collect::<arbitrary::Result<Compound>>()
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::List => List(u.arbitrary()?),
            Tag::Compound => Compound(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary()?),
        })
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
