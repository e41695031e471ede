use std::io::{stdout, BufWriter, Write};

use indicatif::{ProgressBar, ProgressStyle};
use padlock::{load_lock, run, Config, Dictionary, Error, Report};

/// Exit status for a bad or missing wheel file.
const EXIT_CONFIGURATION: i32 = 2;
/// Exit status for dictionary and output failures.
const EXIT_RUN: i32 = 1;

fn solve(config: &Config, progress: &ProgressBar) -> Result<Report, Error> {
    progress.set_message("Reading wheels");
    let lock = load_lock(&config.wheels)?;

    progress.set_message(format!(
        "Checking words against {} wheels of {} letters",
        lock.wheel_count(),
        lock.letters_per_wheel()
    ));
    let words = Dictionary::open(&config.dictionary, lock.wheel_count())?;

    let mut out = BufWriter::new(stdout().lock());
    let result = run(&lock, words, &mut out, progress);
    // Matches found before an error still get printed.
    out.flush().map_err(Error::Output)?;
    let report = result?;

    writeln!(out, "{}", report).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)?;

    Ok(report)
}

fn main() {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({pos} words)") {
        progress.set_style(style);
    }

    let config = Config::default();
    match solve(&config, &progress) {
        Ok(report) => {
            progress.finish_with_message(format!("{} distinct words matched", report.distinct()));
        }
        Err(err) => {
            progress.finish_and_clear();
            eprintln!("ERROR: {}", err);
            std::process::exit(if err.is_configuration() {
                EXIT_CONFIGURATION
            } else {
                EXIT_RUN
            });
        }
    }
}
