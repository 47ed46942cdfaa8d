use anyhow::{Context, Result};
use clap::Parser;
use mdspeak::{estimate, ExitCode, Invocation, Report, SpeakError, HELP};
use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    iter,
};

const END_OF_OPTIONS: &str = "--";

/// Positional arguments are interpreted by count, so clap only collects them.
#[derive(Parser, Debug)]
#[command(
    name = "mdspeak",
    about = "Estimate how long a markdown file takes to read aloud",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// <FILE_PATH> followed by an optional speed option
    #[arg(
        value_name = "ARGS",
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<OsString>,
}

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = parse_cli(env::args_os());
    match run(cli) {
        Ok(exit) | Err(exit) => std::process::ExitCode::from(exit as u8),
    }
}

/// Parses `args` (program name first) without letting clap consume any of them.
///
/// clap drops the first `--` it sees, so one is inserted ahead of the user's
/// arguments and everything after it, including a literal `--`, reaches
/// [`Invocation::parse`] untouched.
fn parse_cli<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("mdspeak"));
    Cli::parse_from(
        iter::once(bin)
            .chain(iter::once(OsString::from(END_OF_OPTIONS)))
            .chain(args),
    )
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let invocation = Invocation::parse(&cli.args).map_err(|err| handle_error(&err))?;

    let Some(config) = invocation.config() else {
        log::debug!("{invocation:?}: printing help");
        return print_stdout(HELP).map_err(handle_output_error);
    };

    let report = estimate(&config).map_err(|err| handle_error(&err))?;
    print_report(&report).map_err(handle_output_error)
}

fn print_report(report: &Report) -> Result<ExitCode> {
    print_stdout(&report.to_string()).context("Failed to print report")
}

fn print_stdout(text: &str) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match handle.write_all(text.as_bytes()) {
        Ok(_) => {}
        Err(err) if should_ignore_pipe_error(&err) => return Ok(ExitCode::Success),
        Err(err) => return Err(err).context("Failed to write to stdout"),
    }

    match handle.flush() {
        Ok(_) => Ok(ExitCode::Success),
        Err(err) if should_ignore_pipe_error(&err) => Ok(ExitCode::Success),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}

fn handle_error(err: &SpeakError) -> ExitCode {
    eprintln!("error: {err}");
    if err.wants_help() {
        eprintln!();
        eprint!("{HELP}");
    }
    err.exit_code()
}

fn handle_output_error(err: anyhow::Error) -> ExitCode {
    eprintln!("error: {err:#}");
    ExitCode::Failure
}
