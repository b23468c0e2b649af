//! CLI argument parsing
//!
//! Grammar:
//! ```text
//! lcnt [options] <filename> [logfile]
//!
//! [options]  - /l for line counts, /s for sizes, /ls (or /sl) for both
//! <filename> - *.sln or *.csproj file to process
//! [logfile]  - optional log file to append calculated data and timestamp
//! ```
//!
//! With a single argument the options default to line counts only. With two
//! or more arguments the first must be an options token; arguments past the
//! third are ignored.

use regex::Regex;

/// Options-token pattern: `/` followed by one or two of `l`/`s`, any case.
const OPTIONS_TOKEN: &str = r"(?i)^/[ls]{1,2}$";

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: print usage and exit successfully.
    Usage,
    /// An options token was supplied but did not match the accepted pattern.
    BadOptions,
    /// A file to process.
    Count {
        options: Options,
        file_name: String,
        log_file: Option<String>,
    },
}

/// Which metrics to report. The output order is fixed: lines, then size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub lines: bool,
    pub size: bool,
}

impl Default for Options {
    /// Omitted options select line counts only.
    fn default() -> Self {
        Options {
            lines: true,
            size: false,
        }
    }
}

/// Parse CLI arguments from std::env::args()
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Invocation {
    // Skip program name
    let argv: Vec<String> = args.into_iter().skip(1).collect();

    match argv.len() {
        0 => Invocation::Usage,
        1 => Invocation::Count {
            options: Options::default(),
            file_name: argv[0].clone(),
            log_file: None,
        },
        _ => match parse_options(&argv[0]) {
            Some(options) => Invocation::Count {
                options,
                file_name: argv[1].clone(),
                log_file: argv.get(2).cloned(),
            },
            None => Invocation::BadOptions,
        },
    }
}

/// Validate an options token and extract the selected metrics.
fn parse_options(token: &str) -> Option<Options> {
    let re = Regex::new(OPTIONS_TOKEN).expect("Invalid regex");
    if !re.is_match(token) {
        return None;
    }

    let letters = token.to_ascii_lowercase();
    Some(Options {
        lines: letters.contains('l'),
        size: letters.contains('s'),
    })
}
