// sortty: step through sorting algorithms forwards and backwards

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::algorithms::Algorithm;
use sortty::interpreter::engine::{StepOutcome, Stepper};
use sortty::sink::{RecordingSink, SinkEvent};
use sortty::ui::{App, TuiSink};

/// Input used when no values are given
const DEMO_VALUES: [i32; 10] = [38, 27, 43, 3, 9, 82, 10, 57, 21, 64];

#[derive(Parser, Debug)]
#[command(
    name = "sortty",
    version,
    about = "Step through sorting algorithms forwards and backwards.",
    allow_negative_numbers = true
)]
struct Args {
    /// Algorithm to run: bubble, selection, insertion, gnome, quick, merge, heap or radix.
    algorithm: Algorithm,

    /// Values to sort (defaults to a small demo array).
    values: Vec<i32>,

    /// Read values from a file (whitespace or comma separated) instead.
    #[arg(long, value_name = "PATH", conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Run a second algorithm on the same input side by side.
    #[arg(long, value_name = "ALGORITHM")]
    versus: Option<Algorithm>,

    /// Duration of one animated move in milliseconds.
    #[arg(long, default_value_t = 300)]
    move_ms: u64,

    /// Estimated memory limit for the step history in megabytes.
    #[arg(long, default_value_t = 256)]
    history_limit_mb: usize,

    /// Print a step trace to stdout instead of starting the TUI.
    #[arg(long, default_value_t = false)]
    headless: bool,
}

fn read_values(path: &Path) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let mut values = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let value = token
            .parse::<i32>()
            .map_err(|e| format!("'{}' in {}: {}", token, path.display(), e))?;
        values.push(value);
    }
    Ok(values)
}

/// Run one algorithm to the end, printing every executed line and its events
fn run_headless(
    algorithm: Algorithm,
    values: Vec<i32>,
    limit: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stepper = Stepper::with_history_limit(algorithm, values, RecordingSink::new(), limit)?;
    stepper.sink_mut().drain();
    let pseudocode = algorithm.pseudocode();

    println!("{} sort on {:?}", algorithm, stepper.array().to_vec().unwrap_or_default());
    loop {
        let outcome = stepper.step_forward()?;
        let events = stepper.sink_mut().drain();
        if outcome == StepOutcome::Finished {
            break;
        }

        let current = stepper.current();
        let text = pseudocode.get(current.line().index()).map_or("", |t| t.trim());
        let operations: Vec<String> = events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Swap(i, j) => Some(format!("swap {} {}", i, j)),
                SinkEvent::Insert(from, to) => Some(format!("insert {} → {}", from, to)),
                SinkEvent::CompareGreater(i, j, result) => {
                    Some(format!("{} > {}: {}", i, j, result))
                }
                SinkEvent::MaxValue(i) => Some(format!("max at {}", i)),
                SinkEvent::BucketNumber(i, b) => Some(format!("{} belongs in bucket {}", i, b)),
                SinkEvent::MoveToBucket(i, b) => Some(format!("{} → bucket {}", i, b)),
                SinkEvent::MoveFromBucket(i, b, v) => {
                    Some(format!("bucket {} → {} ({})", b, i, v))
                }
                _ => None,
            })
            .collect();

        println!(
            "{:>5}  {:>2}  {:<44} {}{}",
            stepper.history_len() - 1,
            current.line().to_string(),
            text,
            current.variables(),
            if operations.is_empty() {
                String::new()
            } else {
                format!("  [{}]", operations.join("; "))
            }
        );
    }

    println!(
        "sorted {:?} in {} steps: {} comparisons, {} swaps",
        stepper.array().to_vec().unwrap_or_default(),
        stepper.history_len() - 1,
        stepper.comparisons(),
        stepper.swaps()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let values = match &args.file {
        Some(path) => match read_values(path) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: cannot read values: {}", e);
                std::process::exit(1);
            }
        },
        None if args.values.is_empty() => DEMO_VALUES.to_vec(),
        None => args.values.clone(),
    };
    let limit = args.history_limit_mb.saturating_mul(1024 * 1024);

    if args.headless {
        for algorithm in std::iter::once(args.algorithm).chain(args.versus) {
            if let Err(e) = run_headless(algorithm, values.clone(), limit) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let move_duration = Duration::from_millis(args.move_ms);
    let mut steppers = Vec::new();
    for algorithm in std::iter::once(args.algorithm).chain(args.versus) {
        match Stepper::with_history_limit(algorithm, values.clone(), TuiSink::new(move_duration), limit) {
            Ok(stepper) => steppers.push(stepper),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
    eprintln!("Sorting {} values...", values.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(steppers, args.move_ms);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
