//! Human readable rendering of NBT trees, one tag per line:
//!
//! ```text
//! TAG_Compound("hello world"): 1 entries
//! {
//!   TAG_String("name"): Bananrama
//! }
//! ```

use std::fmt::{self, Display, Formatter};

use crate::{Compound, List, NamedTag, NbtFile, Tag, Value};

const INDENT: usize = 2;

fn write_header(f: &mut Formatter<'_>, tag: Tag, name: Option<&str>, indent: usize) -> fmt::Result {
    write!(f, "{:indent$}{}", "", tag.type_name(), indent = indent)?;
    match name {
        Some(name) if !name.is_empty() => write!(f, "(\"{}\")", name),
        _ => Ok(()),
    }
}

fn write_tag(f: &mut Formatter<'_>, name: Option<&str>, value: &Value, indent: usize) -> fmt::Result {
    write_header(f, value.tag(), name, indent)?;

    match value {
        Value::Byte(v) => writeln!(f, ": {}", v),
        Value::Short(v) => writeln!(f, ": {}", v),
        Value::Int(v) => writeln!(f, ": {}", v),
        Value::Long(v) => writeln!(f, ": {}", v),
        Value::Float(v) => writeln!(f, ": {}", v),
        Value::Double(v) => writeln!(f, ": {}", v),
        Value::String(v) => writeln!(f, ": {}", v),
        Value::ByteArray(v) => writeln!(f, ": [{} bytes]", v.len()),
        Value::IntArray(v) => writeln!(f, ": [{} ints]", v.len()),
        Value::List(list) => write_list(f, list, indent),
        Value::Compound(compound) => write_compound(f, compound, indent),
    }
}

fn write_list(f: &mut Formatter<'_>, list: &List, indent: usize) -> fmt::Result {
    writeln!(
        f,
        ": {} entries of type {}",
        list.len(),
        list.element().type_name()
    )?;
    writeln!(f, "{:indent$}{{", "", indent = indent)?;
    for v in list {
        write_tag(f, None, v, indent + INDENT)?;
    }
    writeln!(f, "{:indent$}}}", "", indent = indent)
}

fn write_compound(f: &mut Formatter<'_>, compound: &Compound, indent: usize) -> fmt::Result {
    writeln!(f, ": {} entries", compound.len())?;
    writeln!(f, "{:indent$}{{", "", indent = indent)?;
    for (name, v) in compound {
        write_tag(f, Some(name.as_str()), v, indent + INDENT)?;
    }
    writeln!(f, "{:indent$}}}", "", indent = indent)
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tag(f, None, self, 0)
    }
}

impl Display for NamedTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_tag(f, Some(self.name.as_str()), &self.value, 0)
    }
}

impl Display for NbtFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => {
                write_header(f, Tag::Compound, Some(self.name()), 0)?;
                write_compound(f, root, 0)
            }
            None => writeln!(f, "(empty)"),
        }
    }
}
