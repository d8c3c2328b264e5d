use std::io::{Read, Write};
use std::process::ExitCode;

use arithlex::{ScanError, Scanner};
use codespan_reporting::files::SimpleFile;

use crate::cli::Cli;
use crate::editor::{Editor, EditorRead};
use crate::report::Reporter;

enum Input {
    Text { name: String, source: String },
    Repl,
}

pub struct Driver {
    input:      Input,
    keep_going: bool,
    reporter:   Reporter,
}

impl Driver {
    pub fn from_config(cfg: Cli) -> std::io::Result<Self> {
        let input = if cfg.stdin {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Input::Text {
                name: "<stdin>".to_string(),
                source,
            }
        } else if let Some(path) = cfg.file {
            let source = std::fs::read_to_string(&path)?;
            Input::Text { name: path, source }
        } else if let Some(source) = cfg.expr {
            Input::Text {
                name: "<expr>".to_string(),
                source,
            }
        } else {
            Input::Repl
        };

        Ok(Self {
            input,
            keep_going: cfg.keep_going,
            reporter: Reporter::new(cfg.max_errors, cfg.plain, cfg.quiet),
        })
    }

    pub fn run(self) -> std::io::Result<ExitCode> {
        match &self.input {
            Input::Text { name, source } => {
                if self.process(name, source)? {
                    Ok(ExitCode::SUCCESS)
                } else {
                    Ok(ExitCode::FAILURE)
                }
            }
            Input::Repl => {
                self.repl()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Prints the tokens of `source` and reports its errors. Returns whether
    /// the source scanned cleanly.
    fn process(&self, name: &str, source: &str) -> std::io::Result<bool> {
        let errors = tokenize(source, self.keep_going, &mut std::io::stdout().lock())?;
        tracing::debug!(input = name, errors = errors.len(), "tokenized");

        self.reporter.report(&errors, &SimpleFile::new(name, source));
        Ok(errors.is_empty())
    }

    fn repl(&self) -> std::io::Result<()> {
        let mut editor = Editor::default();
        loop {
            let input = match editor.read()? {
                EditorRead::Line(input) => input,
                EditorRead::Skip => continue,
                EditorRead::Quit => break,
            };

            self.process("<repl>", &input)?;
        }

        Ok(())
    }
}

/// Writes one token per line to `out`. Stops at the first unrecognized
/// character unless `keep_going` is set, and returns the errors seen.
pub fn tokenize<W: Write>(
    source: &str,
    keep_going: bool,
    out: &mut W,
) -> std::io::Result<Vec<ScanError>> {
    let mut errors = Vec::new();

    for item in Scanner::new(source) {
        match item {
            Ok(token) => writeln!(out, "{token}")?,
            Err(err) => {
                errors.push(err);
                if !keep_going {
                    break;
                }
            }
        }
    }

    Ok(errors)
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(source: &str, keep_going: bool) -> (String, Vec<ScanError>) {
        let mut out = Vec::new();
        let errors = tokenize(source, keep_going, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), errors)
    }

    #[test]
    fn prints_tokens() {
        let (out, errors) = run("3 + 4 * (2 - 1)", false);
        assert!(errors.is_empty());
        assert_eq!(
            out,
            "Number(\"3\")\nPlus(\"+\")\nNumber(\"4\")\nMultiply(\"*\")\nLeftParen(\"(\")\n\
             Number(\"2\")\nMinus(\"-\")\nNumber(\"1\")\nRightParen(\")\")\nEndOfInput\n"
        );
    }

    #[test]
    fn stops_at_first_error() {
        let (out, errors) = run("3 & 4 $", false);
        assert_eq!(out, "Number(\"3\")\n");
        assert_eq!(
            errors,
            [ScanError::UnrecognizedCharacter {
                character: '&',
                position:  2,
            }]
        );
    }

    #[test]
    fn keep_going_reports_everything() {
        let (out, errors) = run("3 & 4 $", true);
        assert_eq!(out, "Number(\"3\")\nNumber(\"4\")\nEndOfInput\n");
        let positions: Vec<_> = errors.iter().map(ScanError::position).collect();
        assert_eq!(positions, [2, 6]);
    }

    #[test]
    fn empty_input() {
        let (out, errors) = run("", false);
        assert!(errors.is_empty());
        assert_eq!(out, "EndOfInput\n");
    }
}
