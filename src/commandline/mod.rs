use clap::Parser;
use letlex::lexer::{LexOptions, UnterminatedPolicy};

#[derive(Debug, Parser)]
#[clap(about = "Tokenizes programs written in the let language")]
pub struct Options {
    /// File to tokenize. Use `-` for standard input; omit to tokenize a
    /// built-in example program.
    pub file: Option<String>,
    /// Increase log output; repeat for more detail
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Silence all log output
    #[clap(short, long)]
    pub quiet: bool,
    /// Discard string literals that are still open at the end of the input
    #[clap(long)]
    pub drop_unterminated: bool,
    /// Exit with a failure status if the lexer reported any diagnostics
    #[clap(long)]
    pub deny_diagnostics: bool,
}

impl Options {
    /// Log verbosity as understood by `stderrlog`: warnings are always shown
    /// unless `--quiet` is given.
    pub fn log_verbosity(&self) -> usize {
        1 + usize::from(self.verbose)
    }

    pub fn lex_options(&self) -> LexOptions {
        let policy = if self.drop_unterminated {
            UnterminatedPolicy::Drop
        } else {
            UnterminatedPolicy::Emit
        };
        LexOptions::default().with_unterminated_strings(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["letlex"]);

        assert_eq!(options.file, None);
        assert_eq!(options.verbose, 0);
        assert!(!options.quiet);
        assert_eq!(options.lex_options(), LexOptions::default());
    }

    #[test]
    fn repeated_verbose_raises_verbosity() {
        let options = Options::parse_from(["letlex", "-vvv"]);

        assert_eq!(options.log_verbosity(), 4);
    }

    #[test]
    fn drop_unterminated_selects_drop_policy() {
        let options = Options::parse_from(["letlex", "--drop-unterminated", "main.let"]);

        assert_eq!(options.file.as_deref(), Some("main.let"));
        assert_eq!(options.log_verbosity(), 1);
        assert_eq!(
            options.lex_options().unterminated_strings,
            UnterminatedPolicy::Drop
        );
    }
}
