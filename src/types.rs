//! Value kinds and the assignability lattice.
//!
//! Nothing here looks at symbols: a right-hand token is classified purely by
//! its spelling, and identifiers come back as [`ValueKind::Identifier`] for the
//! caller to resolve.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Declared type of a variable or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Double,
    Boolean,
    Char,
    Str,
}

impl VarType {
    pub const ALL: [VarType; 5] = [
        VarType::Int,
        VarType::Double,
        VarType::Boolean,
        VarType::Char,
        VarType::Str,
    ];

    /// Source keyword for this type.
    pub fn keyword(self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Double => "double",
            VarType::Boolean => "boolean",
            VarType::Char => "char",
            VarType::Str => "String",
        }
    }

    pub fn from_keyword(word: &str) -> Option<VarType> {
        VarType::ALL.into_iter().find(|t| t.keyword() == word)
    }

    /// Types a condition operand may have.
    pub fn is_condition_type(self) -> bool {
        matches!(self, VarType::Boolean | VarType::Int | VarType::Double)
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What a right-hand token denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Double,
    Boolean,
    Char,
    Str,
    /// A name that still has to be resolved against the symbol table.
    Identifier,
}

impl From<VarType> for ValueKind {
    fn from(ty: VarType) -> Self {
        match ty {
            VarType::Int => ValueKind::Int,
            VarType::Double => ValueKind::Double,
            VarType::Boolean => ValueKind::Boolean,
            VarType::Char => ValueKind::Char,
            VarType::Str => ValueKind::Str,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int => f.write_str("int"),
            ValueKind::Double => f.write_str("double"),
            ValueKind::Boolean => f.write_str("boolean"),
            ValueKind::Char => f.write_str("char"),
            ValueKind::Str => f.write_str("String"),
            ValueKind::Identifier => f.write_str("identifier"),
        }
    }
}

static INT_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("int literal regex"));
static DOUBLE_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("double literal regex"));
static BOOLEAN_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(true|false|-?[0-9]+(\.[0-9]+)?)$").expect("boolean literal regex"));
static CHAR_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^'.'$").expect("char literal regex"));
static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^".*"$"#).expect("string literal regex"));
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]\w*|_[A-Za-z0-9]\w*)$").expect("identifier regex"));

/// Classify a literal or identifier token.
///
/// The checks run in a fixed order and the first hit wins, so `7` is an
/// `int` and never reaches the numeric-permissive boolean pattern.
/// `None` means the token is not a legal right-hand side at all.
pub fn classify(token: &str) -> Option<ValueKind> {
    if INT_LITERAL.is_match(token) {
        Some(ValueKind::Int)
    } else if DOUBLE_LITERAL.is_match(token) {
        Some(ValueKind::Double)
    } else if BOOLEAN_LITERAL.is_match(token) {
        Some(ValueKind::Boolean)
    } else if CHAR_LITERAL.is_match(token) {
        Some(ValueKind::Char)
    } else if STRING_LITERAL.is_match(token) {
        Some(ValueKind::Str)
    } else if IDENTIFIER.is_match(token) {
        Some(ValueKind::Identifier)
    } else {
        None
    }
}

/// Whether a value of kind `source` may be stored in a `target` slot.
///
/// `Identifier` is never assignable as such; resolve it first and ask again
/// with the declared type of the variable it names.
pub fn assignable(target: VarType, source: ValueKind) -> bool {
    match target {
        VarType::Boolean => matches!(source, ValueKind::Boolean | ValueKind::Double | ValueKind::Int),
        VarType::Double => matches!(source, ValueKind::Double | ValueKind::Int),
        VarType::Int => source == ValueKind::Int,
        VarType::Char => source == ValueKind::Char,
        VarType::Str => source == ValueKind::Str,
    }
}

/// Whether `token` is a syntactically legal variable name.
pub fn is_identifier(token: &str) -> bool {
    IDENTIFIER.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_win_over_doubles_and_booleans() {
        assert_eq!(classify("42"), Some(ValueKind::Int));
        assert_eq!(classify("-3"), Some(ValueKind::Int));
        assert_eq!(classify("4.5"), Some(ValueKind::Double));
        assert_eq!(classify("-0.25"), Some(ValueKind::Double));
    }

    #[test]
    fn literal_kinds() {
        assert_eq!(classify("true"), Some(ValueKind::Boolean));
        assert_eq!(classify("false"), Some(ValueKind::Boolean));
        assert_eq!(classify("'c'"), Some(ValueKind::Char));
        assert_eq!(classify("\"hello, world\""), Some(ValueKind::Str));
        assert_eq!(classify("\"\""), Some(ValueKind::Str));
    }

    #[test]
    fn identifiers_and_garbage() {
        assert_eq!(classify("count"), Some(ValueKind::Identifier));
        assert_eq!(classify("_x1"), Some(ValueKind::Identifier));
        assert_eq!(classify("_"), None);
        assert_eq!(classify("__"), None);
        assert_eq!(classify("1.2.3"), None);
        assert_eq!(classify("'ab'"), None);
        assert_eq!(classify("5."), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn lattice_table() {
        use ValueKind as K;
        assert!(assignable(VarType::Boolean, K::Int));
        assert!(assignable(VarType::Boolean, K::Double));
        assert!(assignable(VarType::Boolean, K::Boolean));
        assert!(!assignable(VarType::Boolean, K::Str));
        assert!(assignable(VarType::Double, K::Int));
        assert!(!assignable(VarType::Double, K::Boolean));
        assert!(!assignable(VarType::Int, K::Double));
        assert!(assignable(VarType::Char, K::Char));
        assert!(!assignable(VarType::Str, K::Char));
        for ty in VarType::ALL {
            assert!(!assignable(ty, K::Identifier));
            assert!(assignable(ty, ty.into()));
        }
    }

    #[test]
    fn keywords_round_trip() {
        assert_eq!(VarType::from_keyword("String"), Some(VarType::Str));
        assert_eq!(VarType::from_keyword("string"), None);
        assert_eq!(VarType::Double.to_string(), "double");
    }
}
