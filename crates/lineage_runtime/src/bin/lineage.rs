//! Lineage CLI entry point.

use lineage_runtime::{Repl, RuntimeConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    quiet: bool,
    // Debug flags
    dump_queries: bool,
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-q" | "--quiet" => config.quiet = true,
            "--debug" => config.dump_queries = true,
            "--verbose" => config.verbose = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

/// Logs go to stderr so they never mix with answers.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("LINEAGE_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lineage {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.verbose);

    let runtime = RuntimeConfig::batch()
        .with_echo(!config.quiet)
        .with_parse_dump(config.dump_queries);
    let mut repl = Repl::new(runtime)?;

    for file in &config.files {
        repl.eval_file(file)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    // Interactive input is never echoed; the banner only greets an empty session.
    let settings = repl.session_mut().config_mut();
    settings.echo = false;
    settings.banner = config.files.is_empty();

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLineage\x1b[0m - Ask questions about family trees in plain English

\x1b[1mUSAGE:\x1b[0m
    lineage [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run files and exit (no REPL)
    -q, --quiet        Do not echo lines read from files

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --debug            Dump each parsed query before its answer
    --verbose          Log at debug level (LINEAGE_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    lineage                          Start interactive REPL
    lineage family.txt               Run family.txt, then start REPL
    lineage -b family.txt            Run family.txt and exit
    LINEAGE_LOG=trace lineage -b f   Trace every classified word

\x1b[1mSENTENCES:\x1b[0m
    start Alice 1900                           Start a new family
    Alice had Bob 1920, Carol 1922             Register births
    who are Alice's children                   List relatives
    who are the children of Bob's sibling      Chain relations
    how many are Alice's grandchildren         Count relatives
    is Bob Alice's child                       Yes or no
    print Alice                                Show a pedigree
    what                                       Forest statistics
    clear                                      Start over
    Ctrl+D                                     Exit REPL"
    );
}
