//! Font descriptors and ordered fallback chains.

use std::fmt;
use std::path::{Path, PathBuf};

/// Identifies one font resource: a file, a face inside it, and the alias
/// the render backend knows it by.
///
/// Descriptors are immutable and hash by value, so they double as the key
/// of the glyph-coverage cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    path: PathBuf,
    face_index: u32,
    alias: String,
}

impl FontDescriptor {
    /// Descriptor for face 0 of `path`, registered under `alias`.
    pub fn new(path: impl Into<PathBuf>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            face_index: 0,
            alias: alias.into(),
        }
    }

    /// Select a face inside a TrueType collection (.ttc).
    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Name the render backend registers this font under.
    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_index == 0 {
            write!(f, "{} ({})", self.alias, self.path.display())
        } else {
            write!(
                f,
                "{} ({}#{})",
                self.alias,
                self.path.display(),
                self.face_index
            )
        }
    }
}

/// Ordered fallback chain, most preferred font first.
///
/// The order encodes script priority and is kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FontChain {
    fonts: Vec<FontDescriptor>,
}

impl FontChain {
    pub fn new(fonts: Vec<FontDescriptor>) -> Self {
        Self { fonts }
    }

    /// Append a font with lower priority than every font already present.
    pub fn push(&mut self, font: FontDescriptor) {
        self.fonts.push(font);
    }

    /// Most preferred font, if any.
    pub fn primary(&self) -> Option<&FontDescriptor> {
        self.fonts.first()
    }

    pub fn get(&self, index: usize) -> Option<&FontDescriptor> {
        self.fonts.get(index)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FontDescriptor> {
        self.fonts.iter()
    }

    pub fn as_slice(&self) -> &[FontDescriptor] {
        &self.fonts
    }
}

impl FromIterator<FontDescriptor> for FontChain {
    fn from_iter<I: IntoIterator<Item = FontDescriptor>>(iter: I) -> Self {
        Self {
            fonts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FontChain {
    type Item = &'a FontDescriptor;
    type IntoIter = std::slice::Iter<'a, FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}
