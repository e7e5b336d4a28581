//! Coursebook CLI entry point.

use coursebook_runtime::{Repl, RuntimeConfig, logging};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    verbose: bool,
    log_json: bool,
    dump: bool,
    date_format: Option<String>,
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

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--log-json" => config.log_json = true,
            "--dump" => config.dump = true,
            "--date-format" => {
                let Some(format) = args.next() else {
                    return Err("--date-format requires a value".into());
                };
                config.date_format = Some(format);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.scripts.push(PathBuf::from(arg)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("coursebook {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = RuntimeConfig::default()
        .with_verbose(cli.verbose)
        .with_json_logs(cli.log_json)
        .with_banner(cli.scripts.is_empty());
    if let Some(format) = cli.date_format {
        config = config.with_date_format(format);
    }
    config.validate()?;

    logging::init(&config)?;
    tracing::debug!(?config, "starting coursebook");

    let mut repl = Repl::new(config)?;
    let mut stdout = io::stdout();

    for script in &cli.scripts {
        repl.eval_file(script, &mut stdout)?;
    }

    if cli.dump {
        let snapshot = repl.session().catalog().snapshot();
        serde_json::to_writer_pretty(&mut stdout, &snapshot)?;
        writeln!(stdout)?;
    }

    if cli.batch_mode {
        return Ok(());
    }

    repl.run(&mut stdout)?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCoursebook\x1b[0m - course types, courses, offerings and registrations

\x1b[1mUSAGE:\x1b[0m
    coursebook [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Command files to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Run scripts and exit (no REPL)
    -v, --verbose          Debug-level logs on stderr
        --log-json         Emit logs as JSON lines
        --dump             Print the catalog as JSON after running scripts
        --date-format FMT  strftime format for registration dates (default %Y-%m-%d)

\x1b[1mENVIRONMENT:\x1b[0m
    COURSEBOOK_LOG, RUST_LOG    Log filter directives

\x1b[1mEXAMPLES:\x1b[0m
    coursebook                       Start interactive REPL
    coursebook setup.cb              Run setup.cb, then start REPL
    coursebook -b --dump setup.cb    Run setup.cb, print JSON, exit

Type `help` inside the REPL for the command reference."
    );
}
