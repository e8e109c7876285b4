use super::cursor::Cursor;
use super::token::{is_reserved_word, is_type_name, Category, Token};

/// Anchored matcher: the byte length a category claims when its match
/// starts at byte 0 of the remaining input, or `None` for no match.
pub type MatchFn = fn(&str) -> Option<usize>;

/// Post-match extractor for rules whose emitted lexemes are not the whole
/// matched slice (call heads, library imports).
pub type ExtractFn = fn(&str, &mut Vec<Token>);

/// One entry of the classifier table.
pub struct Rule {
    /// Category of the rule's principal token.
    pub category: Category,
    pub matches: MatchFn,
    /// When set, splits the matched slice into tokens; otherwise the whole
    /// slice is emitted as one token of `category`.
    pub extract: Option<ExtractFn>,
}

/// The classifier table, in priority order.
///
/// The scanner takes the first rule that matches at the cursor, not the
/// longest match across rules, so this order is the disambiguation policy:
/// `foo!` is a macro even though `foo` alone would be a call head or an
/// identifier, and a reserved word followed by `(` lexes as a call head.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Comment,
        matches: match_comment,
        extract: None,
    },
    Rule {
        category: Category::StringLiteral,
        matches: match_string,
        extract: None,
    },
    Rule {
        category: Category::Number,
        matches: match_number,
        extract: None,
    },
    Rule {
        category: Category::Macro,
        matches: match_macro,
        extract: None,
    },
    Rule {
        category: Category::Operator,
        matches: match_operator,
        extract: None,
    },
    Rule {
        category: Category::Function,
        matches: match_function,
        extract: Some(extract_function),
    },
    Rule {
        category: Category::ReservedWord,
        matches: match_reserved_word,
        extract: None,
    },
    Rule {
        category: Category::ReservedWord,
        matches: match_import,
        extract: Some(extract_import),
    },
    Rule {
        category: Category::Type,
        matches: match_type,
        extract: None,
    },
    Rule {
        category: Category::Delimiter,
        matches: match_delimiter,
        extract: None,
    },
    Rule {
        category: Category::Identifier,
        matches: match_identifier,
        extract: None,
    },
];

/// Multi-character operators, longest first so `..=` wins over `..`.
const COMPOUND_OPERATORS: &[&str] = &[
    "..=", "..", "::", "==", "!=", "<=", ">=", "&&", "||", "->", "=>", "+=", "-=", "*=", "/=",
    "%=",
];

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|'];

const DELIMITER_CHARS: &[char] = &['{', '}', '(', ')', ';', ',', '.', ':'];

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `//` to end of line, or `/* ... */` closed at the first `*/`.
fn match_comment(input: &str) -> Option<usize> {
    let mut cur = Cursor::new(input);
    if !cur.eat('/') {
        return None;
    }
    if cur.eat('/') {
        cur.eat_while(|c| c != '\n');
        return Some(cur.offset());
    }
    if cur.eat('*') {
        while let Some(ch) = cur.advance() {
            if ch == '*' && cur.eat('/') {
                return Some(cur.offset());
            }
        }
        // Unterminated: no match, `/` and `*` fall to the operator rule.
        return None;
    }
    None
}

/// `"` then any run of (escaped char | char other than `"` and `\`) then a
/// closing `"`. Literals may span newlines. Unterminated: no match, the
/// opening `"` falls through to the unknown fallback.
fn match_string(input: &str) -> Option<usize> {
    let mut cur = Cursor::new(input);
    if !cur.eat('"') {
        return None;
    }
    loop {
        match cur.advance()? {
            '"' => return Some(cur.offset()),
            '\\' => {
                cur.advance()?;
            }
            _ => {}
        }
    }
}

/// `0x` plus one-or-more hex digits, or a decimal integer/float. The
/// fractional part is only taken when `.` is immediately followed by a
/// digit, so `3.` lexes as a number and a delimiter.
fn match_number(input: &str) -> Option<usize> {
    let mut cur = Cursor::new(input);
    if !cur.peek().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }

    if cur.peek() == Some('0') && cur.peek_second() == Some('x') {
        let mut hex = Cursor::new(input);
        hex.advance();
        hex.advance();
        let prefix = hex.offset();
        hex.eat_while(|c| c.is_ascii_hexdigit());
        if hex.offset() > prefix {
            return Some(hex.offset());
        }
        // `0x` with no digits: the `0` still lexes as a decimal literal.
    }

    cur.eat_while(|c| c.is_ascii_digit());
    if cur.peek() == Some('.') && cur.peek_second().is_some_and(|c| c.is_ascii_digit()) {
        cur.advance();
        cur.eat_while(|c| c.is_ascii_digit());
    }
    Some(cur.offset())
}

/// An identifier immediately followed by `!`.
fn match_macro(input: &str) -> Option<usize> {
    let len = match_identifier(input)?;
    input[len..].starts_with('!').then_some(len + 1)
}

/// A compound operator, or a single character from the operator set.
fn match_operator(input: &str) -> Option<usize> {
    for op in COMPOUND_OPERATORS {
        if input.starts_with(op) {
            return Some(op.len());
        }
    }
    input.starts_with(OPERATOR_CHARS).then_some(1)
}

/// An identifier, optional whitespace, then `(`.
fn match_function(input: &str) -> Option<usize> {
    let name = match_identifier(input)?;
    let mut cur = Cursor::new(&input[name..]);
    cur.eat_while(|c| c.is_ascii_whitespace());
    cur.eat('(').then_some(name + cur.offset())
}

/// A call head emits the identifier alone plus a synthetic `(` delimiter;
/// any whitespace between them is consumed without a token.
fn extract_function(matched: &str, tokens: &mut Vec<Token>) {
    let name_end = matched
        .find(|c: char| !is_ident_continue(c))
        .unwrap_or(matched.len());
    tokens.push(Token::new(Category::Function, &matched[..name_end]));
    tokens.push(Token::new(Category::Delimiter, "("));
}

/// A reserved word, as a whole identifier: `lettuce` is not `let`.
fn match_reserved_word(input: &str) -> Option<usize> {
    let len = match_identifier(input)?;
    is_reserved_word(&input[..len]).then_some(len)
}

/// `use` + whitespace + a `::`-separated identifier path + `;`.
fn match_import(input: &str) -> Option<usize> {
    let kw = match_identifier(input)?;
    if &input[..kw] != "use" {
        return None;
    }

    let mut ws = Cursor::new(&input[kw..]);
    ws.eat_while(|c| c.is_ascii_whitespace());
    if ws.offset() == 0 {
        return None;
    }

    let mut pos = kw + ws.offset();
    pos += match_identifier(&input[pos..])?;
    while input[pos..].starts_with("::") {
        match match_identifier(&input[pos + 2..]) {
            Some(segment) => pos += 2 + segment,
            None => break,
        }
    }

    let mut tail = Cursor::new(&input[pos..]);
    tail.eat_while(|c| c.is_ascii_whitespace());
    tail.eat(';').then_some(pos + tail.offset())
}

/// An import emits `use` and the bare path; the whitespace around the path
/// and the trailing `;` are consumed without tokens of their own.
fn extract_import(matched: &str, tokens: &mut Vec<Token>) {
    tokens.push(Token::new(Category::ReservedWord, "use"));
    let path = matched[3..matched.len() - 1].trim();
    tokens.push(Token::new(Category::Identifier, path));
}

/// A built-in type name, as a whole identifier: `i32x` is an identifier.
fn match_type(input: &str) -> Option<usize> {
    let len = match_identifier(input)?;
    is_type_name(&input[..len]).then_some(len)
}

fn match_delimiter(input: &str) -> Option<usize> {
    input.starts_with(DELIMITER_CHARS).then_some(1)
}

/// An identifier run: letter or underscore, then letters, digits, or
/// underscores. Also the measuring primitive for the word-shaped rules.
fn match_identifier(input: &str) -> Option<usize> {
    let mut cur = Cursor::new(input);
    if !cur.peek().is_some_and(is_ident_start) {
        return None;
    }
    cur.eat_while(is_ident_continue);
    Some(cur.offset())
}
