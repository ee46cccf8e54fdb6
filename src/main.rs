use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bitgen::error::{EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};
use bitgen::report::TreeStyle;
use bitgen::run::run;
use bitgen::WidthPolicy;
use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(name = "bitgen")]
#[command(about = "Generate the truth table (LUT) of a boolean formula")]
struct Args {
    /// Formula, e.g. `a && !b`. Read from stdin if omitted.
    formula: Option<String>,

    /// Read the formula from a file
    #[arg(short, long, conflicts_with = "formula")]
    file: Option<PathBuf>,

    /// Use exactly one bit per identifier instead of the lut2/lut4 buckets
    #[arg(long)]
    exact: bool,

    /// Print the tree with real operator symbols
    #[arg(long)]
    symbols: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn read_input(args: &Args) -> io::Result<String> {
    if let Some(formula) = &args.formula {
        return Ok(formula.clone());
    }
    if let Some(path) = &args.file {
        debug!("Reading formula from {}", path.display());
        return std::fs::read_to_string(path);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            // `--help` and `--version` also arrive here, on stdout
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            return Ok(ExitCode::from(code));
        }
    };

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Could not read formula: {}", e);
            return Ok(ExitCode::from(EXIT_IO));
        }
    };

    let style = if args.symbols { TreeStyle::Symbols } else { TreeStyle::Legacy };
    let policy = if args.exact { WidthPolicy::Exact } else { WidthPolicy::Snapped };

    let outcome = run(&input, style, policy);
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    io::stdout().flush()?;

    Ok(ExitCode::from(outcome.exit_code))
}
