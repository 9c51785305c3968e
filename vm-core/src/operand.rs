use std::fmt;

/// A typed leaf of the instruction AST, as produced by the parser and
/// consumed by the VM's operand resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Register(u32),
    Immediate(i64),
    Address(String),
    StringLiteral(String),
    LabelRef(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Register(n) => write!(f, "r{}", n),
            Operand::Immediate(i) => write!(f, "#{}", i),
            Operand::Address(a) => write!(f, "@{}", a),
            Operand::StringLiteral(s) => write!(f, "\"{}\"", escape(s)),
            Operand::LabelRef(name) => write!(f, "{}", name),
        }
    }
}

/// Inverse of the parser's unescaping: the exact set of backslash escapes
/// `vm-asm` accepts in a string literal, so formatting a parsed operand and
/// re-parsing it round-trips.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}
