//! autoSql type inference for raw column values.
//!
//! Converters that derive a schema from data (for example, naming the extra
//! columns of a BED file) observe column values as strings and need the
//! narrowest autoSql type that holds all of them. [`value_type`] classifies
//! a single value, [`widen`] combines two types into their least common
//! type, and [`Classifier`] folds the two over a stream of values.

use crate::schema::BaseType;

/// The smallest autoSql integer type that holds `value`.
///
/// Non-negative values map to `ubyte`/`ushort`/`uint`; negative values map
/// to `byte`/`short`/`int`. Returns `None` outside the `uint`/`int` range.
#[must_use]
pub fn integer_type(value: i64) -> Option<BaseType> {
    if value < 0 {
        if value >= -128 {
            Some(BaseType::Byte)
        } else if value >= -32_768 {
            Some(BaseType::Short)
        } else if value >= -2_147_483_648 {
            Some(BaseType::Int)
        } else {
            None
        }
    } else if value < 256 {
        Some(BaseType::Ubyte)
    } else if value < 65_536 {
        Some(BaseType::Ushort)
    } else if value < 4_294_967_296 {
        Some(BaseType::Uint)
    } else {
        None
    }
}

/// The most appropriate autoSql type for a raw column value.
///
/// Integers classify via [`integer_type`]; integers beyond the `uint`/`int`
/// range and real numbers classify as `float`; everything else is `string`
/// below 256 characters and `lstring` from there.
#[must_use]
pub fn value_type(value: &str) -> BaseType {
    if let Ok(integer) = value.parse::<i64>() {
        if let Some(ty) = integer_type(integer) {
            return ty;
        }
        return BaseType::Float;
    }
    if value.parse::<f64>().is_ok() {
        return BaseType::Float;
    }
    if value.chars().count() < 256 {
        BaseType::String
    } else {
        BaseType::Lstring
    }
}

/// Numeric lattice position of a base type.
enum Numeric {
    /// Integer types, by signedness and width rank (1 = 8-bit, 3 = 32-bit).
    Int {
        /// Whether the type is signed.
        signed: bool,
        /// Width rank.
        rank: u8,
    },
    /// Floating-point types, by width rank (1 = `float`, 2 = `double`).
    Real {
        /// Width rank.
        rank: u8,
    },
}

fn numeric_class(ty: &BaseType) -> Option<Numeric> {
    match ty {
        BaseType::Byte => Some(Numeric::Int {
            signed: true,
            rank: 1,
        }),
        BaseType::Short => Some(Numeric::Int {
            signed: true,
            rank: 2,
        }),
        BaseType::Int => Some(Numeric::Int {
            signed: true,
            rank: 3,
        }),
        BaseType::Ubyte => Some(Numeric::Int {
            signed: false,
            rank: 1,
        }),
        BaseType::Ushort => Some(Numeric::Int {
            signed: false,
            rank: 2,
        }),
        BaseType::Uint => Some(Numeric::Int {
            signed: false,
            rank: 3,
        }),
        BaseType::Float => Some(Numeric::Real { rank: 1 }),
        BaseType::Double => Some(Numeric::Real { rank: 2 }),
        _ => None,
    }
}

fn signed_of_rank(rank: u8) -> BaseType {
    match rank {
        1 => BaseType::Byte,
        2 => BaseType::Short,
        _ => BaseType::Int,
    }
}

fn unsigned_of_rank(rank: u8) -> BaseType {
    match rank {
        1 => BaseType::Ubyte,
        2 => BaseType::Ushort,
        _ => BaseType::Uint,
    }
}

/// The least common autoSql type of two types.
///
/// Text dominates numerics (`lstring` over `string`); floating point
/// dominates integers (`double` over `float`); same-signedness integers
/// take the larger width; mixed-signedness integers take the signed type
/// one width above the unsigned operand, capped at `int`. Tags with no
/// widening semantics (`char`, sub-block tags, opaque tags) fall back to
/// `string` when combined with anything else.
#[must_use]
pub fn widen(left: &BaseType, right: &BaseType) -> BaseType {
    if left == right {
        return left.clone();
    }
    if *left == BaseType::Lstring || *right == BaseType::Lstring {
        return BaseType::Lstring;
    }
    if *left == BaseType::String || *right == BaseType::String {
        return BaseType::String;
    }
    match (numeric_class(left), numeric_class(right)) {
        (Some(a), Some(b)) => combine_numeric(&a, &b),
        _ => BaseType::String,
    }
}

fn combine_numeric(left: &Numeric, right: &Numeric) -> BaseType {
    match (left, right) {
        (Numeric::Real { rank: a }, Numeric::Real { rank: b }) => {
            if a.max(b) == &2 {
                BaseType::Double
            } else {
                BaseType::Float
            }
        }
        (Numeric::Real { rank }, Numeric::Int { .. })
        | (Numeric::Int { .. }, Numeric::Real { rank }) => {
            if *rank == 2 {
                BaseType::Double
            } else {
                BaseType::Float
            }
        }
        (
            Numeric::Int {
                signed: left_signed,
                rank: left_rank,
            },
            Numeric::Int {
                signed: right_signed,
                rank: right_rank,
            },
        ) => {
            if left_signed == right_signed {
                let rank = *left_rank.max(right_rank);
                if *left_signed {
                    signed_of_rank(rank)
                } else {
                    unsigned_of_rank(rank)
                }
            } else {
                let (signed_rank, unsigned_rank) = if *left_signed {
                    (*left_rank, *right_rank)
                } else {
                    (*right_rank, *left_rank)
                };
                // signed_of_rank saturates at `int`, so no explicit cap.
                signed_of_rank(signed_rank.max(unsigned_rank + 1))
            }
        }
    }
}

/// Incremental autoSql type classifier for one column of observed values.
///
/// Feed every observed value through [`Classifier::add_value`]; the reported
/// [`Classifier::data_type`] is the narrowest type holding all of them.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    data_type: Option<BaseType>,
}

impl Classifier {
    /// Create a classifier with no observed values.
    #[must_use]
    pub fn new() -> Self {
        Self { data_type: None }
    }

    /// Observe one column value.
    pub fn add_value(&mut self, value: &str) {
        let observed = value_type(value);
        self.data_type = Some(match self.data_type.take() {
            Some(current) => widen(&current, &observed),
            None => observed,
        });
    }

    /// The narrowest type holding every observed value, `string` when no
    /// value has been observed yet.
    #[must_use]
    pub fn data_type(&self) -> BaseType {
        self.data_type.clone().unwrap_or(BaseType::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_integer_type_boundaries() {
        let cases = [
            (255, BaseType::Ubyte),
            (-128, BaseType::Byte),
            (-129, BaseType::Short),
            (256, BaseType::Ushort),
            (65_535, BaseType::Ushort),
            (-32_768, BaseType::Short),
            (65_537, BaseType::Uint),
            (-32_769, BaseType::Int),
            (4_294_967_295, BaseType::Uint),
            (-2_147_483_648, BaseType::Int),
        ];
        for (value, expected) in cases {
            assert_eq!(integer_type(value), Some(expected), "value {value}");
        }
        assert_eq!(integer_type(4_294_967_296), None);
        assert_eq!(integer_type(-2_147_483_649), None);
    }

    #[test]
    fn test_value_type_classification() {
        assert_eq!(value_type("255"), BaseType::Ubyte);
        assert_eq!(value_type("-3"), BaseType::Byte);
        assert_eq!(value_type("1.5"), BaseType::Float);
        assert_eq!(value_type("1e10"), BaseType::Float);
        // Integers beyond the uint range degrade to float.
        assert_eq!(value_type("4294967296"), BaseType::Float);
        assert_eq!(value_type("5fa"), BaseType::String);
        let short_text: String = core::iter::repeat_n('a', 255).collect();
        assert_eq!(value_type(&short_text), BaseType::String);
        let long_text: String = core::iter::repeat_n('a', 256).collect();
        assert_eq!(value_type(&long_text), BaseType::Lstring);
    }

    #[test]
    fn test_widen_fixed_points() {
        let triplets = [
            (BaseType::Ubyte, BaseType::Byte, BaseType::Short),
            (BaseType::Uint, BaseType::Byte, BaseType::Int),
            (BaseType::Int, BaseType::Float, BaseType::Float),
            (BaseType::String, BaseType::Byte, BaseType::String),
            (BaseType::Lstring, BaseType::String, BaseType::Lstring),
        ];
        for (left, right, expected) in triplets {
            assert_eq!(widen(&left, &right), expected, "{left:?} + {right:?}");
            assert_eq!(widen(&right, &left), expected, "{right:?} + {left:?}");
        }
    }

    #[test]
    fn test_widen_same_signedness_takes_wider() {
        assert_eq!(widen(&BaseType::Ubyte, &BaseType::Uint), BaseType::Uint);
        assert_eq!(widen(&BaseType::Byte, &BaseType::Short), BaseType::Short);
    }

    #[test]
    fn test_widen_floats() {
        assert_eq!(widen(&BaseType::Float, &BaseType::Double), BaseType::Double);
        assert_eq!(widen(&BaseType::Uint, &BaseType::Double), BaseType::Double);
    }

    #[test]
    fn test_widen_opaque_falls_back_to_string() {
        assert_eq!(widen(&BaseType::Char, &BaseType::Uint), BaseType::String);
        assert_eq!(
            widen(&BaseType::Other("bigint".into()), &BaseType::Float),
            BaseType::String
        );
    }

    #[test]
    fn test_classifier_accumulates() {
        let mut classifier = Classifier::new();
        assert_eq!(classifier.data_type(), BaseType::String);

        classifier.add_value("12");
        assert_eq!(classifier.data_type(), BaseType::Ubyte);

        classifier.add_value("-3");
        assert_eq!(classifier.data_type(), BaseType::Short);

        classifier.add_value("70000");
        assert_eq!(classifier.data_type(), BaseType::Int);

        classifier.add_value("2.5");
        assert_eq!(classifier.data_type(), BaseType::Float);

        classifier.add_value("not a number");
        assert_eq!(classifier.data_type(), BaseType::String);
    }
}
