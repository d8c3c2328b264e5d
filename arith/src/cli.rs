use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

/// Tokenize arithmetic expressions
#[derive(clap::Parser, Debug, Clone, Default)]
#[clap(styles = CARGO_STYLING)]
pub struct Cli {
    /// Expression to tokenize; starts a REPL when no input is given
    pub expr: Option<String>,

    /// Read input from a file
    #[arg(long, value_name = "PATH", conflicts_with_all = ["expr", "stdin"])]
    pub file: Option<String>,

    /// Read input from stdin
    #[arg(long, default_value_t = false, conflicts_with = "expr")]
    pub stdin: bool,

    /// Report every unrecognized character instead of stopping at the first
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,

    /// Maximum amount of errors to report
    #[arg(long, value_name = "max-errors", default_value_t = 4)]
    pub max_errors: usize,

    /// Report errors on a single line without source snippets
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Do not print error messages
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default `tracing` directive when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "arith=debug,arithlex=debug",
            _ => "arith=trace,arithlex=trace",
        }
    }
}

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);
