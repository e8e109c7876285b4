use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use ariadne::{Color, Fmt};
use clap::Parser;

use tint_lexer::{tokenize, Category, Token};

/// Terminal syntax colorizer.
#[derive(Parser)]
#[command(
    name = "tint",
    version,
    about,
    long_about = "Terminal syntax colorizer.\n\nTokenizes a Rust-like source subset and prints it back with each token\ncolored by lexical category. Unrecognized characters render in red.\n\nExamples:\n  tint demos/sample.rs            Highlight a file\n  cat main.rs | tint              Highlight stdin\n  tint --legend demos/sample.rs   Print the color legend first\n  tint --emit-tokens main.rs      Dump the token stream\n  tint --emit-json main.rs        Token list as JSON"
)]
struct Cli {
    /// Input source file (stdin when omitted).
    input: Option<PathBuf>,

    /// Print the color legend before the output.
    #[arg(long)]
    legend: bool,

    /// Emit one `Category "lexeme"` line per token instead of colored text.
    #[arg(long = "emit-tokens")]
    emit_tokens: bool,

    /// Emit the token list as JSON to stdout.
    #[arg(long = "emit-json")]
    emit_json: bool,

    /// Disable color output.
    #[arg(long)]
    plain: bool,
}

/// Legend order mirrors the palette, most common categories first.
const LEGEND: &[(Category, &str)] = &[
    (Category::Number, "Numbers"),
    (Category::StringLiteral, "String literals"),
    (Category::Identifier, "Identifiers"),
    (Category::Function, "Functions"),
    (Category::Operator, "Operators"),
    (Category::ReservedWord, "Reserved words"),
    (Category::Delimiter, "Delimiters"),
    (Category::Comment, "Comments"),
    (Category::Type, "Types"),
    (Category::Macro, "Macros"),
    (Category::Unknown, "Unknown tokens"),
];

fn main() {
    let cli = Cli::parse();

    if cli.legend {
        print_legend(cli.plain);
    }

    let source = match read_source(cli.input.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            let name = cli
                .input
                .as_ref()
                .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            eprintln!("error: could not read '{}': {}", name, e);
            process::exit(1);
        }
    };

    let tokens = tokenize(&source);

    if cli.emit_json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize tokens: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if cli.emit_tokens {
        for token in &tokens {
            println!("{:<13?} {:?}", token.category, token.lexeme);
        }
        return;
    }

    render(&tokens, cli.plain);
}

fn read_source(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Print the token stream verbatim, one color per category.
///
/// Lexemes are emitted exactly as scanned (whitespace included, as Unknown
/// tokens), so the output reproduces the source text.
fn render(tokens: &[Token], plain: bool) {
    for token in tokens {
        if plain {
            print!("{}", token.lexeme);
        } else {
            print!("{}", token.lexeme.as_str().fg(color_for(token.category)));
        }
    }
}

fn print_legend(plain: bool) {
    println!("Token colors:");
    for (category, label) in LEGEND {
        if plain {
            println!("  {}", label);
        } else {
            println!("  {}", label.fg(color_for(*category)));
        }
    }
    println!();
}

/// One display color per category. The match is exhaustive, so a new
/// category cannot ship without a color.
fn color_for(category: Category) -> Color {
    match category {
        Category::Number => Color::Green,
        Category::StringLiteral => Color::Yellow,
        Category::Identifier => Color::Cyan,
        Category::Function => Color::Fixed(208),
        Category::Operator => Color::Fixed(206),
        Category::ReservedWord => Color::Blue,
        Category::Delimiter => Color::White,
        Category::Comment => Color::Fixed(8),
        Category::Type => Color::Fixed(3),
        Category::Macro => Color::Magenta,
        Category::Unknown => Color::Red,
    }
}
