use std::fmt;

use serde::Serialize;

/// A single token produced by the scanner.
///
/// The lexeme is the source text exactly as it appeared, delimiters and
/// comment markers included. Tokens are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub category: Category,
    pub lexeme: String,
}

impl Token {
    pub fn new(category: Category, lexeme: impl Into<String>) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.category, self.lexeme)
    }
}

/// Lexical categories assigned by the scanner.
///
/// This is a closed set: every token carries exactly one category, and
/// `Unknown` absorbs anything no other category claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Number,
    StringLiteral,
    Identifier,
    Operator,
    ReservedWord,
    Delimiter,
    Comment,
    Type,
    Function,
    Macro,
    Unknown,
}

/// Reserved words of the recognized language, matched as whole identifiers.
///
/// `use` is absent on purpose: the library-import rule owns it, and a `use`
/// outside a well-formed import lexes as a plain identifier.
pub fn is_reserved_word(ident: &str) -> bool {
    matches!(
        ident,
        "fn" | "let"
            | "if"
            | "else"
            | "while"
            | "for"
            | "return"
            | "match"
            | "impl"
            | "trait"
            | "as"
            | "in"
            | "async"
            | "await"
            | "dyn"
            | "struct"
            | "enum"
            | "const"
            | "static"
            | "type"
            | "unsafe"
            | "mod"
            | "pub"
            | "self"
            | "crate"
            | "super"
            | "mut"
            | "continue"
            | "break"
            | "loop"
    )
}

/// Built-in type names, matched as whole identifiers.
///
/// `&str` is listed for completeness but cannot win a match: the operator
/// rule claims `&` at higher priority.
pub fn is_type_name(ident: &str) -> bool {
    matches!(
        ident,
        "i32" | "u32" | "i64" | "u64" | "f32" | "f64" | "String" | "&str" | "bool" | "char"
    )
}
