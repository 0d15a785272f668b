//! Integration tests for parsing autoSql table definitions.
//!
//! The `ars` fixture mirrors a real UCSC-style schema for autonomously
//! replicating sequences: twelve columns, one duplicated field name, one
//! fixed-size character array.

use autosql_rs::{BaseType, ParseError, parse};

const ARS: &str = "table ars\n\
\"T\"\n\
(\n\
string chrom; \"Reference sequence chromosome or scaffold\"\n\
uint chromStart; \"Start position in chromosome\"\n\
uint chromEnd; \"End position in chromosome\"\n\
string name; \"Name of item\"\n\
uint score; \"Score from 0-1000\"\n\
char[1] strand; \"+ or -\"\n\
string alias; \"Alias of item\"\n\
string id; \"ID of item\"\n\
string name; \"Accession of item\"\n\
string note; \"Note on item\"\n\
string dbxref; \"Database cross-reference\"\n\
string gene; \"Associated gene\"\n\
)\n";

// =============================================================================
// Header and field extraction
// =============================================================================

#[test]
fn test_header_extraction() {
    let table = parse(ARS).expect("Failed to parse fixture");
    assert_eq!(table.name, "ars");
    assert_eq!(table.description, "T");
}

#[test]
fn test_field_order_preserved() {
    let table = parse(ARS).expect("Failed to parse fixture");
    assert_eq!(
        table.field_names(),
        [
            "chrom",
            "chromStart",
            "chromEnd",
            "name",
            "score",
            "strand",
            "alias",
            "id",
            "name",
            "note",
            "dbxref",
            "gene",
        ]
    );
}

#[test]
fn test_duplicate_names_not_deduplicated() {
    let table = parse(ARS).expect("Failed to parse fixture");
    assert_eq!(table.fields.len(), 12);
    let name_count = table.fields.iter().filter(|f| f.name == "name").count();
    assert_eq!(name_count, 2);
    // The first match wins for index lookup.
    assert_eq!(table.field_index("name"), Some(3));
}

#[test]
fn test_type_and_size_extraction() {
    let table = parse(ARS).expect("Failed to parse fixture");

    let strand = &table.fields[5];
    assert_eq!(strand.name, "strand");
    assert_eq!(strand.field_type.base, BaseType::Char);
    assert_eq!(strand.field_type.size, Some(1));

    let chrom = &table.fields[0];
    assert_eq!(chrom.field_type.base, BaseType::String);
    assert_eq!(chrom.field_type.size, None);
}

#[test]
fn test_comments_preserved() {
    let table = parse(ARS).expect("Failed to parse fixture");
    assert_eq!(
        table.fields[0].comment,
        "Reference sequence chromosome or scaffold"
    );
    assert_eq!(table.fields[5].comment, "+ or -");
}

// =============================================================================
// Layout independence
// =============================================================================

#[test]
fn test_line_boundaries_are_insignificant() {
    let one_line = ARS.replace('\n', " ");
    assert_eq!(parse(&one_line).unwrap(), parse(ARS).unwrap());
}

#[test]
fn test_crlf_line_endings() {
    let crlf = ARS.replace('\n', "\r\n");
    assert_eq!(parse(&crlf).unwrap(), parse(ARS).unwrap());
}

#[test]
fn test_trailing_semicolons_after_comments() {
    // Some sources terminate each comment with `;`; both spellings parse
    // identically. Only field lines get the extra terminator, not the
    // quoted description.
    let with_semicolons: String = ARS
        .lines()
        .map(|line| {
            if line.contains("; \"") {
                format!("{line};\n")
            } else {
                format!("{line}\n")
            }
        })
        .collect();
    assert_eq!(parse(&with_semicolons).unwrap(), parse(ARS).unwrap());
}

// =============================================================================
// Error taxonomy
// =============================================================================

#[test]
fn test_truncated_fixture_fails_with_unbalanced_parentheses() {
    let truncated = ARS.trim_end().strip_suffix(')').unwrap();
    assert!(matches!(
        parse(truncated),
        Err(ParseError::UnbalancedParentheses { .. })
    ));
}

#[test]
fn test_missing_comment_fails_with_malformed_field() {
    let broken = ARS.replace(" \"Score from 0-1000\"", "");
    assert!(matches!(
        parse(&broken),
        Err(ParseError::MalformedField { .. })
    ));
}

#[test]
fn test_empty_table_rejected() {
    assert!(matches!(
        parse("table x \"d\" ( )"),
        Err(ParseError::EmptyFieldList { .. })
    ));
}

#[test]
fn test_missing_header_rejected() {
    assert!(matches!(
        parse("( string a; \"x\" )"),
        Err(ParseError::MalformedHeader { .. })
    ));
}

#[test]
fn test_second_table_rejected() {
    let two_tables = format!("{ARS}{ARS}");
    assert!(matches!(
        parse(&two_tables),
        Err(ParseError::TrailingInput { .. })
    ));
}

#[test]
fn test_errors_carry_positions() {
    let truncated = ARS.trim_end().strip_suffix(')').unwrap();
    match parse(truncated) {
        Err(ParseError::UnbalancedParentheses { pos }) => {
            assert_eq!(pos, truncated.len());
        }
        other => panic!("expected UnbalancedParentheses, got {other:?}"),
    }
}

// =============================================================================
// Open type tag set
// =============================================================================

#[test]
fn test_unrecognized_tags_are_opaque() {
    let source = "table t \"d\" ( bigint position; \"Large coordinate\" )";
    let table = parse(source).unwrap();
    assert_eq!(
        table.fields[0].field_type.base,
        BaseType::Other("bigint".into())
    );
    assert_eq!(table.fields[0].field_type.base.as_str(), "bigint");
}
