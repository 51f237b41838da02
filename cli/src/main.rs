use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;

use contest_kit::accum::{Limits, checked_total};
use contest_kit::errors::InputError;
use contest_kit::scan::{Bounds, DEFAULT_COUNT_CEILING, Scanner};

mod exit_codes;

#[derive(Parser)]
#[command(
    name = "ckit",
    version,
    about = "Sum a counted list of integers from stdin, refusing bad input and overflow"
)]
struct Cli {
    /// Upper bound for the leading element count
    #[arg(
        long,
        default_value_t = DEFAULT_COUNT_CEILING,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    max_count: i64,

    /// Smallest admissible element value
    #[arg(long, default_value_t = i64::MIN, allow_negative_numbers = true)]
    min_value: i64,

    /// Largest admissible element value
    #[arg(long, default_value_t = i64::MAX, allow_negative_numbers = true)]
    max_value: i64,
}

impl Cli {
    fn limits(&self) -> Limits {
        Limits {
            count: Bounds::count(self.max_count),
            element: Bounds::new(self.min_value, self.max_value),
        }
    }
}

/// Reads `n` and then `n` integers from stdin, writing the checked total
/// plus a newline to stdout. All failures bubble up to `main`.
fn run(limits: Limits) -> Result<(), InputError> {
    let stdin = io::stdin();
    let mut scanner = Scanner::new(stdin.lock());
    let total = checked_total(&mut scanner, limits)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    writeln!(stdout, "{total}")?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let limits = cli.limits();
    log::debug!(
        "accepting counts in {:?} and elements in {:?}",
        limits.count,
        limits.element
    );
    let code = match run(limits) {
        Ok(()) => exit_codes::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            exit_codes::INPUT_ERROR
        }
    };
    process::exit(code);
}
