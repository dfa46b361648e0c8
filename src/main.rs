use std::{
    fs,
    io::{self, Read},
    process,
};

use clap::Parser;
use commandline::Options;
use letlex::{lexer::lex_with, prelude::*, report::describe};

mod commandline;

/// Tokenized when no input file is given.
const EXAMPLE: &str = "
  let a = 1;
  let b = a;
";

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(options.log_verbosity())
        .init()?;

    let content = read_input(options.file.as_deref())?;

    let lexed = lex_with(&content, options.lex_options());

    for token in lexed.tokens.iter() {
        println!("{:<24} {:?}", token.to_string(), token.source.lookup(&content));
    }

    if !lexed.diagnostics.is_empty() {
        println!();
        for diagnostic in lexed.diagnostics.iter() {
            println!("{}\n", describe(diagnostic, &content));
        }
    }

    if options.deny_diagnostics && !lexed.diagnostics.is_empty() {
        error!("Lexer reported {} diagnostics", lexed.diagnostics.len());
        process::exit(1);
    }

    Ok(())
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        None => {
            info!("No input file given, tokenizing the built-in example");
            Ok(EXAMPLE.to_string())
        }
        Some("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            Ok(content)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read input file {path}"))
        }
    }
}
