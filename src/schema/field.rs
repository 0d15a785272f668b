//! Field-level schema types: base type tags, array sizes, field definitions.

use alloc::string::String;
use core::fmt::{self, Display};

/// An autoSql base type tag.
///
/// The tag set is open: tags this crate does not recognize are carried in
/// [`BaseType::Other`] verbatim instead of being rejected, so schemas using
/// newer autoSql types still parse and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseType {
    /// Short text, up to 255 characters.
    String,
    /// Long text, unbounded.
    Lstring,
    /// Signed 8-bit integer.
    Byte,
    /// Unsigned 8-bit integer.
    Ubyte,
    /// Signed 16-bit integer.
    Short,
    /// Unsigned 16-bit integer.
    Ushort,
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    Uint,
    /// Single character (or fixed character array with a size).
    Char,
    /// Single-precision floating point.
    Float,
    /// Double-precision floating point.
    Double,
    /// Enumerated value tag. Sub-block bodies are not parsed.
    Enum,
    /// Set-of-values tag. Sub-block bodies are not parsed.
    Set,
    /// Embedded object tag. Sub-block bodies are not parsed.
    Object,
    /// Embedded table tag. Sub-block bodies are not parsed.
    Table,
    /// Any tag not recognized above, preserved verbatim.
    Other(String),
}

impl BaseType {
    /// The textual tag as it appears in autoSql source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Lstring => "lstring",
            Self::Byte => "byte",
            Self::Ubyte => "ubyte",
            Self::Short => "short",
            Self::Ushort => "ushort",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Enum => "enum",
            Self::Set => "set",
            Self::Object => "object",
            Self::Table => "table",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for BaseType {
    fn from(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "lstring" => Self::Lstring,
            "byte" => Self::Byte,
            "ubyte" => Self::Ubyte,
            "short" => Self::Short,
            "ushort" => Self::Ushort,
            "int" => Self::Int,
            "uint" => Self::Uint,
            "char" => Self::Char,
            "float" => Self::Float,
            "double" => Self::Double,
            "enum" => Self::Enum,
            "set" => Self::Set,
            "object" => Self::Object,
            "table" => Self::Table,
            _ => Self::Other(tag.into()),
        }
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field type: base tag plus an optional fixed array size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldType {
    /// The base type tag.
    pub base: BaseType,
    /// Fixed array size for array-like spellings such as `char[1]`;
    /// `None` for scalar types.
    pub size: Option<usize>,
}

impl FieldType {
    /// A scalar type with no array size.
    #[must_use]
    pub fn scalar(base: BaseType) -> Self {
        Self { base, size: None }
    }

    /// A fixed-size array type such as `char[1]`.
    #[must_use]
    pub fn array(base: BaseType, size: usize) -> Self {
        Self {
            base,
            size: Some(size),
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(size) = self.size {
            write!(f, "[{size}]")?;
        }
        Ok(())
    }
}

/// One typed, named, commented column declaration within a table definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDefinition {
    /// The field's type.
    pub field_type: FieldType,
    /// The field's name. Names need not be unique within a table.
    pub name: String,
    /// Free-text description, always quoted in source, may be empty.
    pub comment: String,
}

impl FieldDefinition {
    /// Create a new field definition.
    #[must_use]
    pub fn new(
        field_type: FieldType,
        name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            field_type,
            name: name.into(),
            comment: comment.into(),
        }
    }
}

impl Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}; \"{}\"", self.field_type, self.name, self.comment)
    }
}
