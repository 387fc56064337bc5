// Line grammar, compiled once.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const NAME: &str = r"(?:[A-Za-z]\w*|_[A-Za-z0-9]\w*)";
pub(crate) const TYPE: &str = r"(?:int|double|boolean|char|String)";
pub(crate) const VALUE: &str = r#"(?:"[^"]*"|'[^']*'|[^\s,;=()"']+)"#;

// Words that can never start a method call.
pub(crate) const RESERVED: &[&str] = &[
    "if", "while", "return", "void", "final", "int", "double", "boolean", "char", "String",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid line pattern {pattern:?}: {e}"))
}

pub(crate) static BLANK: Lazy<Regex> = Lazy::new(|| compile(r"^\s*$"));

pub(crate) static BLOCK_END: Lazy<Regex> = Lazy::new(|| compile(r"^\s*\}\s*$"));

pub(crate) static RETURN: Lazy<Regex> = Lazy::new(|| compile(r"^\s*return\s*;\s*$"));

pub(crate) static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    let item = format!(r"{NAME}(?:\s*=\s*{VALUE})?");
    compile(&format!(
        r"^\s*(?P<final>final\s+)?(?P<type>{TYPE})\s+(?P<items>{item}(?:\s*,\s*{item})*)\s*;\s*$"
    ))
});

pub(crate) static DECLARATION_ITEM: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?P<name>{NAME})(?:\s*=\s*(?P<value>{VALUE}))?")));

pub(crate) static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    let item = format!(r"{NAME}\s*=\s*{VALUE}");
    compile(&format!(r"^\s*(?P<items>{item}(?:\s*,\s*{item})*)\s*;\s*$"))
});

pub(crate) static ASSIGNMENT_ITEM: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?P<name>{NAME})\s*=\s*(?P<value>{VALUE})")));

pub(crate) static CONDITIONAL: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?P<keyword>if|while)\s*\((?P<condition>.*)\)\s*\{\s*$"));

pub(crate) static CONDITION_OPERATOR: Lazy<Regex> = Lazy::new(|| compile(r"\|\||&&"));

pub(crate) static CONDITION_LITERAL: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:true|false|-?[0-9]+(?:\.[0-9]+)?)$"));

pub(crate) static METHOD_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^\s*void\s+(?P<name>[A-Za-z]\w*)\s*\((?P<params>[^)]*)\)\s*\{\s*$")
});

pub(crate) static PARAMETER: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(r"^(?P<final>final\s+)?(?P<type>{TYPE})\s+(?P<name>{NAME})$"))
});

pub(crate) static METHOD_CALL: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?P<name>[A-Za-z]\w*)\s*\((?P<args>.*)\)\s*;\s*$"));
