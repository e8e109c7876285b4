pub mod lexer;

pub use lexer::{tokenize, Category, Scanner, Token};
