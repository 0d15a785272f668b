//! The standard BED column schema and BED-with-extra-columns assembly.
//!
//! BED readers know the format of the leading standard columns up front;
//! only the trailing extra columns need type classification from observed
//! values. [`standard_fields`] supplies the fixed part and [`autosql_table`]
//! assembles a full [`TableDefinition`] from both.

use alloc::format;
use alloc::vec::Vec;

use crate::classifier::Classifier;
use crate::schema::{BaseType, FieldDefinition, FieldType, TableDefinition};

/// The number of standard BED columns.
pub const BED_COLUMNS: usize = 12;

/// The autoSql definitions of the twelve standard BED columns, in order.
///
/// `blockSizes` and `chromStarts` are sized per record by the `blockCount`
/// column; their tags carry the whole `int[blockCount]` spelling as opaque
/// base types, since fixed array sizes cannot express them.
#[must_use]
pub fn standard_fields() -> Vec<FieldDefinition> {
    [
        (
            FieldType::scalar(BaseType::String),
            "chrom",
            "Reference sequence chromosome or scaffold",
        ),
        (
            FieldType::scalar(BaseType::Uint),
            "chromStart",
            "Start position of feature on chromosome",
        ),
        (
            FieldType::scalar(BaseType::Uint),
            "chromEnd",
            "End position of feature on chromosome",
        ),
        (FieldType::scalar(BaseType::String), "name", "Name of feature"),
        (FieldType::scalar(BaseType::Uint), "score", "Score"),
        (
            FieldType::array(BaseType::Char, 1),
            "strand",
            "+ or - for strand",
        ),
        (
            FieldType::scalar(BaseType::Uint),
            "thickStart",
            "Coding region start",
        ),
        (
            FieldType::scalar(BaseType::Uint),
            "thickEnd",
            "Coding region end",
        ),
        (FieldType::scalar(BaseType::Uint), "reserved", "Color set"),
        (
            FieldType::scalar(BaseType::Int),
            "blockCount",
            "The number of blocks in feature",
        ),
        (
            FieldType::scalar(BaseType::Other("int[blockCount]".into())),
            "blockSizes",
            "Block sizes",
        ),
        (
            FieldType::scalar(BaseType::Other("int[blockCount]".into())),
            "chromStarts",
            "Block start positions",
        ),
    ]
    .into_iter()
    .map(|(field_type, name, comment)| FieldDefinition::new(field_type, name, comment))
    .collect()
}

/// Assemble a table definition for a BED file with `bed_columns` standard
/// columns followed by one classified extra column per supplied classifier.
///
/// Extra columns are named `column_1`, `column_2`, ... after their position
/// among the extra columns, with a generated comment naming the classified
/// type.
///
/// # Panics
///
/// Panics if `bed_columns` is outside `3..=12`.
#[must_use]
pub fn autosql_table(
    name: &str,
    description: &str,
    bed_columns: usize,
    extra: &[Classifier],
) -> TableDefinition {
    assert!(
        (3..=BED_COLUMNS).contains(&bed_columns),
        "BED files have between 3 and 12 standard columns"
    );

    let mut fields = standard_fields();
    fields.truncate(bed_columns);

    for (index, classifier) in extra.iter().enumerate() {
        let data_type = classifier.data_type();
        let number = index + 1;
        let comment = format!("Column #{number} with {data_type} values");
        fields.push(FieldDefinition::new(
            FieldType::scalar(data_type),
            format!("column_{number}"),
            comment,
        ));
    }

    TableDefinition::new(name, description, fields)
}
