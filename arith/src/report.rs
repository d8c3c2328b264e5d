use arithlex::ScanError;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

pub trait Report {
    fn diagnose(&self) -> Diagnostic<()>;

    /// `error:<line>:<column>: <message>`
    fn plain(&self, source: &str) -> String;
}

impl Report for ScanError {
    fn diagnose(&self) -> Diagnostic<()> {
        Diagnostic::error().with_message(self).with_label(
            Label::primary((), self.span()).with_message(format!("at offset {}", self.position())),
        )
    }

    fn plain(&self, source: &str) -> String {
        let (line, column) = self
            .span()
            .locate(source)
            .map_or((0, 0), |loc| (loc.line, loc.column));
        format!("error:{line}:{column}: {self} at offset {}", self.position())
    }
}

/// Renders diagnostics for one source to stderr.
pub struct Reporter {
    max_errors: usize,
    plain:      bool,
    quiet:      bool,
}

impl Reporter {
    #[must_use]
    pub const fn new(max_errors: usize, plain: bool, quiet: bool) -> Self {
        Self {
            max_errors,
            plain,
            quiet,
        }
    }

    pub fn report<E: Report>(&self, errors: &[E], file: &SimpleFile<&str, &str>) {
        if self.quiet || errors.is_empty() {
            return;
        }

        if self.plain {
            for line in self.plain_lines(errors, file) {
                eprintln!("{line}");
            }
            return;
        }

        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();
        let mut writer = writer.lock();
        let mut displayed = 0;
        for e in errors.iter().take(self.max_errors) {
            let _ = term::emit(&mut writer, &config, file, &e.diagnose());
            displayed += 1;
        }

        let footer =
            Diagnostic::error().with_message(summary(file.name(), errors.len(), displayed));
        let _ = term::emit(&mut writer, &config, file, &footer);
    }

    /// One line per reported error followed by the summary line.
    fn plain_lines<E: Report>(&self, errors: &[E], file: &SimpleFile<&str, &str>) -> Vec<String> {
        let mut lines: Vec<_> = errors
            .iter()
            .take(self.max_errors)
            .map(|e| e.plain(file.source()))
            .collect();
        let displayed = lines.len();
        lines.push(format!("error: {}", summary(file.name(), errors.len(), displayed)));
        lines
    }
}

fn summary(name: &str, total: usize, displayed: usize) -> String {
    format!(
        "could not tokenize {name} due to {total} previous {} ({displayed} emitted)",
        if total > 1 { "errors" } else { "error" },
    )
}
