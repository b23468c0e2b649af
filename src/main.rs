//! lcnt — source lines counter for Visual Studio solutions and projects

use lcnt::cli::{parse_args, run_count, Invocation, EXIT_SUCCESS};

fn main() {
    // Diagnostics go to stderr behind RUST_LOG; stdout carries only results.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let code = match parse_args(args) {
        Invocation::Usage => {
            print_usage();
            EXIT_SUCCESS
        }
        Invocation::BadOptions => {
            println!("Incorrect options.");
            EXIT_SUCCESS
        }
        Invocation::Count {
            options,
            file_name,
            log_file,
        } => run_count(options, &file_name, log_file.as_deref()),
    };

    std::process::exit(code);
}

/// Print usage message
fn print_usage() {
    println!("Source lines counter for Visual Studio projects");
    println!();
    println!("Usage: lcnt [options] <filename> [logfile]");
    println!("  [options]  - /l to get number of LOCs, /s for source files size or /ls for both");
    println!("  <filename> - *.sln or *.csproj file to process");
    println!("  [logfile]  - optional log file to append calculated data and timestamp");
    println!();
}
