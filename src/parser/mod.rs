//! Line classifier for sjcheck sources
//!
//! The language is strictly line oriented: every line is exactly one
//! statement, one block opener, one block end, a comment or blank. This
//! module sorts raw lines into those categories and extracts their fields;
//! it keeps no state and knows nothing about symbols.

pub mod cursor;
pub mod line;
mod patterns;

pub use cursor::Cursor;
pub use line::{
    classify_line, parse_conditions, parse_signature, AssignItem, Call, ConditionHeader, DeclItem, Declaration,
    Line, LoopKeyword, Param, Signature,
};

/// Classify every line of `source`, paired with its 1-based line number.
pub fn classify_source(source: &str) -> Vec<(usize, Line<'_>)> {
    source.lines().enumerate().map(|(i, l)| (i + 1, classify_line(l))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_small_program() {
        let source = r#"
int x = 5;
void f(int a) {
    // body
    return;
}
"#;
        let categories: Vec<_> = classify_source(source).into_iter().map(|(_, l)| l.category()).collect();
        assert_eq!(
            categories,
            vec!["blank", "declaration", "method-signature", "unknown", "return", "block-end"]
        );
    }
}
