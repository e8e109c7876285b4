use super::rules::RULES;
use super::token::{Category, Token};

/// Drives the classifier table over one in-memory source buffer.
///
/// Rules are tried in table order at every position and the first anchored
/// match wins; anything no rule claims becomes a one-character `Unknown`
/// token. Scanning therefore never fails and always covers the whole
/// input.
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Scan the entire source, consuming the scanner.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.pos < self.source.len() {
            let rest = &self.source[self.pos..];
            let hit = RULES
                .iter()
                .find_map(|rule| (rule.matches)(rest).map(|len| (rule, len)));

            match hit {
                Some((rule, len)) => {
                    debug_assert!(len > 0, "a rule match must consume input");
                    let slice = &rest[..len];
                    match rule.extract {
                        Some(extract) => extract(slice, &mut tokens),
                        None => tokens.push(Token::new(rule.category, slice)),
                    }
                    self.pos += len;
                }
                None => match rest.chars().next() {
                    // Fallback advances one character; every other arm
                    // advances by a full match.
                    Some(ch) => {
                        tokens.push(Token::new(Category::Unknown, ch.to_string()));
                        self.pos += ch.len_utf8();
                    }
                    None => break,
                },
            }
        }

        tokens
    }
}

/// Tokenize `source` in full.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}
