use super::patterns::*;
use crate::review::ConditionalError;
use crate::types::VarType;

/// One source line, sorted into exactly one grammatical category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'src> {
    Blank,
    Comment,
    BlockEnd,
    Return,
    Declaration(Declaration<'src>),
    Assignment(Vec<AssignItem<'src>>),
    Conditional(ConditionHeader<'src>),
    MethodSignature(Signature<'src>),
    MethodCall(Call<'src>),
    Unknown,
}

impl Line<'_> {
    pub fn category(&self) -> &'static str {
        match self {
            Line::Blank => "blank",
            Line::Comment => "comment",
            Line::BlockEnd => "block-end",
            Line::Return => "return",
            Line::Declaration(_) => "declaration",
            Line::Assignment(_) => "assignment",
            Line::Conditional(_) => "conditional",
            Line::MethodSignature(_) => "method-signature",
            Line::MethodCall(_) => "method-call",
            Line::Unknown => "unknown",
        }
    }

    /// Lines that neither declare nor check anything.
    pub fn is_inert(&self) -> bool {
        matches!(self, Line::Blank | Line::Comment)
    }
}

/// `[final] TYPE item, item, ...;` with the qualifier and type shared by all items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'src> {
    pub is_final: bool,
    pub ty: VarType,
    pub items: Vec<DeclItem<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclItem<'src> {
    pub name: &'src str,
    pub value: Option<&'src str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignItem<'src> {
    pub target: &'src str,
    pub value: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKeyword {
    If,
    While,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionHeader<'src> {
    pub keyword: LoopKeyword,
    /// Text between the outer parentheses, untrimmed.
    pub condition: &'src str,
}

impl<'src> ConditionHeader<'src> {
    pub fn variables(&self) -> Result<Vec<&'src str>, ConditionalError> {
        parse_conditions(self.condition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature<'src> {
    pub name: &'src str,
    pub params: Vec<Param<'src>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'src> {
    pub name: &'src str,
    pub ty: VarType,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call<'src> {
    pub name: &'src str,
    pub args: Vec<&'src str>,
}

/// Sort a raw line into its category and pull out its fields.
pub fn classify_line(line: &str) -> Line<'_> {
    if BLANK.is_match(line) {
        return Line::Blank;
    }
    if line.starts_with("//") {
        return Line::Comment;
    }
    if BLOCK_END.is_match(line) {
        return Line::BlockEnd;
    }
    if RETURN.is_match(line) {
        return Line::Return;
    }
    if let Some(decl) = parse_declaration(line) {
        return Line::Declaration(decl);
    }
    if let Some(items) = parse_assignment(line) {
        return Line::Assignment(items);
    }
    if let Some(header) = parse_conditional(line) {
        return Line::Conditional(header);
    }
    if let Some(sig) = parse_signature(line) {
        return Line::MethodSignature(sig);
    }
    if let Some(call) = parse_call(line) {
        return Line::MethodCall(call);
    }
    Line::Unknown
}

fn parse_declaration(line: &str) -> Option<Declaration<'_>> {
    let caps = DECLARATION.captures(line)?;
    let ty = VarType::from_keyword(caps.name("type")?.as_str())?;
    let items = DECLARATION_ITEM
        .captures_iter(caps.name("items")?.as_str())
        .filter_map(|item| {
            Some(DeclItem {
                name: item.name("name")?.as_str(),
                value: item.name("value").map(|v| v.as_str()),
            })
        })
        .collect();
    Some(Declaration { is_final: caps.name("final").is_some(), ty, items })
}

fn parse_assignment(line: &str) -> Option<Vec<AssignItem<'_>>> {
    let caps = ASSIGNMENT.captures(line)?;
    let items = ASSIGNMENT_ITEM
        .captures_iter(caps.name("items")?.as_str())
        .filter_map(|item| {
            Some(AssignItem { target: item.name("name")?.as_str(), value: item.name("value")?.as_str() })
        })
        .collect();
    Some(items)
}

fn parse_conditional(line: &str) -> Option<ConditionHeader<'_>> {
    let caps = CONDITIONAL.captures(line)?;
    let keyword = match caps.name("keyword")?.as_str() {
        "if" => LoopKeyword::If,
        _ => LoopKeyword::While,
    };
    Some(ConditionHeader { keyword, condition: caps.name("condition")?.as_str() })
}

/// Parse a `void name(params) {` line. A malformed parameter list means the
/// line is not a signature at all.
pub fn parse_signature(line: &str) -> Option<Signature<'_>> {
    let caps = METHOD_SIGNATURE.captures(line)?;
    let name = caps.name("name")?.as_str();
    let raw = caps.name("params")?.as_str();
    let mut params = Vec::new();
    if !raw.trim().is_empty() {
        for piece in raw.split(',') {
            let p = PARAMETER.captures(piece.trim())?;
            params.push(Param {
                name: p.name("name")?.as_str(),
                ty: VarType::from_keyword(p.name("type")?.as_str())?,
                is_final: p.name("final").is_some(),
            });
        }
    }
    Some(Signature { name, params })
}

fn parse_call(line: &str) -> Option<Call<'_>> {
    let caps = METHOD_CALL.captures(line)?;
    let name = caps.name("name")?.as_str();
    if RESERVED.contains(&name) {
        return None;
    }
    let raw = caps.name("args")?.as_str();
    let args = if raw.trim().is_empty() {
        Vec::new()
    } else {
        let args = split_arguments(raw);
        if args.iter().any(|a| a.is_empty()) {
            return None;
        }
        args
    };
    Some(Call { name, args })
}

// Split on commas that are not inside a quoted literal; pieces come back trimmed.
fn split_arguments(raw: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, ch) in raw.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(ch),
            (None, ',') => {
                pieces.push(raw[start..i].trim());
                start = i + 1;
            }
            (None, _) => {}
        }
    }
    pieces.push(raw[start..].trim());
    pieces
}

/// Check the operands of a condition and return the variable names among
/// them, in order. Literal operands are accepted and dropped.
pub fn parse_conditions(condition: &str) -> Result<Vec<&str>, ConditionalError> {
    let text = condition.trim();
    if text.is_empty() {
        return Err(ConditionalError::Empty);
    }
    for op in ["||", "&&"] {
        if text.starts_with(op) || text.ends_with(op) {
            return Err(ConditionalError::DanglingOperator { condition: text.to_string() });
        }
    }
    let mut names = Vec::new();
    for operand in CONDITION_OPERATOR.split(text).map(str::trim) {
        if CONDITION_LITERAL.is_match(operand) {
            continue;
        }
        if crate::types::is_identifier(operand) {
            names.push(operand);
        } else {
            return Err(ConditionalError::Malformed { operand: operand.to_string() });
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_and_structural_lines() {
        assert_eq!(classify_line(""), Line::Blank);
        assert_eq!(classify_line("   \t"), Line::Blank);
        assert_eq!(classify_line("// note"), Line::Comment);
        assert_eq!(classify_line("  // indented"), Line::Unknown);
        assert_eq!(classify_line("  }  "), Line::BlockEnd);
        assert_eq!(classify_line("return ;"), Line::Return);
        assert_eq!(classify_line("return 5;"), Line::Unknown);
    }

    #[test]
    fn declaration_items_keep_source_order() {
        let Line::Declaration(decl) = classify_line("final double a = 1.5, b, c = a;") else {
            panic!("expected declaration");
        };
        assert!(decl.is_final);
        assert_eq!(decl.ty, VarType::Double);
        let items: Vec<_> = decl.items.iter().map(|i| (i.name, i.value)).collect();
        assert_eq!(items, vec![("a", Some("1.5")), ("b", None), ("c", Some("a"))]);
    }

    #[test]
    fn string_values_may_contain_commas() {
        let Line::Declaration(decl) = classify_line(r#"String s = "a, b", t;"#) else {
            panic!("expected declaration");
        };
        assert_eq!(decl.items.len(), 2);
        assert_eq!(decl.items[0].value, Some(r#""a, b""#));
        assert_eq!(decl.items[1].name, "t");
    }

    #[test]
    fn assignments() {
        let Line::Assignment(items) = classify_line("x = 3, y = z ;") else {
            panic!("expected assignment");
        };
        assert_eq!(items, vec![AssignItem { target: "x", value: "3" }, AssignItem { target: "y", value: "z" }]);
        assert_eq!(classify_line("x = 3 + 4;"), Line::Unknown);
    }

    #[test]
    fn signatures() {
        let Line::MethodSignature(sig) = classify_line("void foo(int a, final String b) {") else {
            panic!("expected signature");
        };
        assert_eq!(sig.name, "foo");
        assert_eq!(sig.params.len(), 2);
        assert!(sig.params[1].is_final);
        assert_eq!(sig.params[1].ty, VarType::Str);

        let Line::MethodSignature(empty) = classify_line("void bar( ) {") else {
            panic!("expected signature");
        };
        assert!(empty.params.is_empty());
        assert_eq!(classify_line("void bad(int) {"), Line::Unknown);
        assert_eq!(classify_line("int bad() {"), Line::Unknown);
    }

    #[test]
    fn calls_and_conditionals() {
        let Line::MethodCall(call) = classify_line(r#"  foo(1, "a,b", x);"#) else {
            panic!("expected call");
        };
        assert_eq!(call.args, vec!["1", r#""a,b""#, "x"]);
        assert_eq!(classify_line("foo(1,,2);"), Line::Unknown);
        assert!(matches!(classify_line("if (x) ;"), Line::Unknown));

        let Line::Conditional(header) = classify_line("while (a || true && b) {") else {
            panic!("expected conditional");
        };
        assert_eq!(header.keyword, LoopKeyword::While);
        assert_eq!(header.variables().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn malformed_conditions() {
        assert_eq!(parse_conditions("  "), Err(ConditionalError::Empty));
        assert!(matches!(parse_conditions("|| a"), Err(ConditionalError::DanglingOperator { .. })));
        assert!(matches!(parse_conditions("a &&"), Err(ConditionalError::DanglingOperator { .. })));
        assert!(matches!(parse_conditions("a || || b"), Err(ConditionalError::Malformed { .. })));
        assert!(matches!(parse_conditions("\"s\""), Err(ConditionalError::Malformed { .. })));
        assert_eq!(parse_conditions("-1.5 || 3").unwrap(), Vec::<&str>::new());
    }
}
