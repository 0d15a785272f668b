//! The parsed representation of one autoSql `table` block.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};

use super::field::FieldDefinition;

/// The complete parsed representation of one autoSql `table` block.
///
/// A table definition is constructed once per parse (or assembled by hand)
/// and is plain immutable data afterwards. Field order is column order and
/// is semantically significant; duplicate field names are legal and are
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableDefinition {
    /// Table name from the header line.
    pub name: String,
    /// Free-text description from the quoted header line.
    pub description: String,
    /// Ordered field list; non-empty for a valid table.
    pub fields: Vec<FieldDefinition>,
}

impl TableDefinition {
    /// Create a new table definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields,
        }
    }

    /// Field names in column order, duplicates included.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Index of the first field with the given name.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Re-emit the table as autoSql source text.
    ///
    /// The emitted text re-parses to a table equal to `self`; the layout is
    /// one field per line, matching the conventional autoSql spelling.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl Display for TableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "table {}", self.name)?;
        writeln!(f, "\"{}\"", self.description)?;
        writeln!(f, "(")?;
        for field in &self.fields {
            writeln!(f, "{field}")?;
        }
        writeln!(f, ")")
    }
}
