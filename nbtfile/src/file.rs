use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::str::FromStr;

use flate2::read::{GzDecoder, GzEncoder, ZlibDecoder, ZlibEncoder};
use log::debug;

use crate::de::{self, ReadNbt};
use crate::error::{Error, Result};
use crate::ser::{self, WriteNbt};
use crate::{Compound, Tag};

/// Compression schemes that NBT files are typically wrapped in. Files such as
/// `level.dat` use Gzip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Compression {
    #[default]
    Gzip = 1,
    Zlib = 2,
    Uncompressed = 3,
}

impl Compression {
    /// Decompress everything `reader` produces into a buffer. Any failure,
    /// including a truncated compressed stream, is an IO error.
    pub fn decompress<R: Read>(self, mut reader: R) -> Result<Vec<u8>> {
        let mut buf = vec![];
        match self {
            Compression::Gzip => GzDecoder::new(reader).read_to_end(&mut buf),
            Compression::Zlib => ZlibDecoder::new(reader).read_to_end(&mut buf),
            Compression::Uncompressed => reader.read_to_end(&mut buf),
        }
        .map_err(Error::io)?;

        Ok(buf)
    }

    /// Compress `data` into a new buffer.
    pub fn compress(self, data: &[u8]) -> Result<Vec<u8>> {
        let level = flate2::Compression::default();
        let mut buf = vec![];
        match self {
            Compression::Gzip => GzEncoder::new(data, level).read_to_end(&mut buf),
            Compression::Zlib => ZlibEncoder::new(data, level).read_to_end(&mut buf),
            Compression::Uncompressed => {
                buf.extend_from_slice(data);
                Ok(data.len())
            }
        }
        .map_err(Error::io)?;

        Ok(buf)
    }
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gzip" | "gz" => Ok(Compression::Gzip),
            "zlib" => Ok(Compression::Zlib),
            "none" | "uncompressed" => Ok(Compression::Uncompressed),
            _ => Err(format!("unknown compression scheme: {}", s)),
        }
    }
}

/// A complete NBT file: a single named root compound, wrapped in compression.
///
/// The root is optional so that a file can be created empty and filled in
/// later, but saving a file with no root is an error.
///
/// Loading either installs a completely decoded tree or fails and leaves the
/// file as it was. The file does not remember where it was loaded from; every
/// save is given its destination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbtFile {
    name: String,
    root: Option<Compound>,
    compression: Compression,
}

impl NbtFile {
    /// Create a file with the given root, compressed with Gzip.
    pub fn new(name: impl Into<String>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root: Some(root),
            compression: Compression::default(),
        }
    }

    /// Use `compression` for subsequent saves.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Read a file from `reader`, decompressing with `compression`.
    pub fn read_from<R: Read>(reader: R, compression: Compression) -> Result<Self> {
        let (name, root) = read_root(reader, compression)?;
        Ok(Self {
            name,
            root: Some(root),
            compression,
        })
    }

    /// Open and read the file at `path`.
    pub fn open(path: impl AsRef<Path>, compression: Compression) -> Result<Self> {
        let file = open_existing(path.as_ref())?;
        Self::read_from(file, compression)
    }

    /// Replace the root with the one read from `reader`, decompressing with
    /// this file's compression. On error the current root is kept.
    pub fn load_from<R: Read>(&mut self, reader: R) -> Result<()> {
        let (name, root) = read_root(reader, self.compression)?;
        self.name = name;
        self.root = Some(root);
        Ok(())
    }

    /// Replace the root with the one in the file at `path`. On error the
    /// current root is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = open_existing(path.as_ref())?;
        self.load_from(file)
    }

    /// Encode and compress the root, then write it to `writer`. Nothing is
    /// written if encoding fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let data = self.to_compressed_bytes()?;
        writer.write_all(&data).map_err(Error::io)?;
        writer.flush().map_err(Error::io)?;
        Ok(())
    }

    /// Save to `path`, creating or truncating it. The file is only touched once
    /// the data has been completely encoded and compressed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_compressed_bytes()?;
        std::fs::write(path, &data).map_err(Error::io)?;
        debug!("saved {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn to_compressed_bytes(&self) -> Result<Vec<u8>> {
        let root = self.root.as_ref().ok_or_else(Error::no_root)?;

        let mut raw = vec![];
        raw.write_tag(Tag::Compound)?;
        raw.write_size_prefixed_str(&self.name)?;
        ser::encode_compound(&mut raw, root)?;

        let data = self.compression.compress(&raw)?;
        debug!(
            "encoded {} bytes of nbt, {} after {:?} compression",
            raw.len(),
            data.len(),
            self.compression
        );
        Ok(data)
    }

    /// The name of the root compound, usually empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn root(&self) -> Option<&Compound> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Compound> {
        self.root.as_mut()
    }

    pub fn set_root(&mut self, root: Compound) {
        self.root = Some(root);
    }

    pub fn take_root(&mut self) -> Option<Compound> {
        self.root.take()
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }
}

fn open_existing(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::not_found(path),
        _ => Error::io(e),
    })
}

fn read_root<R: Read>(reader: R, compression: Compression) -> Result<(String, Compound)> {
    let data = compression.decompress(reader)?;
    debug!("decompressed {} bytes of nbt", data.len());

    let mut input = data.as_slice();

    // The first tag must be a compound, nothing else is a valid root.
    match input.first() {
        Some(&tag) if tag == u8::from(Tag::Compound) => {}
        first => return Err(Error::no_root_compound(first.copied())),
    }
    input.read_tag()?;

    let name = input.read_size_prefixed_str()?;
    let root = de::decode_compound(&mut input)?;
    Ok((name, root))
}
