//! In-memory model of an autoSql table definition.
mod field;
mod table;

pub use field::{BaseType, FieldDefinition, FieldType};
pub use table::TableDefinition;
