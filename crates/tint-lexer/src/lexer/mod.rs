pub mod cursor;
pub mod rules;
pub mod token;

mod scanner;

pub use scanner::{tokenize, Scanner};
pub use token::{Category, Token};
