use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use truthtable::interpreter::table::generator::{DEFAULT_MAX_VARIABLES, Generator};

/// Expressions shown by `--demo`.
const SAMPLES: [&str; 7] = ["p \\land q",
                            "p \\lor q",
                            "\\lnot p",
                            "p \\rightarrow q",
                            "p \\leftrightarrow q",
                            "(p \\land q) \\lor \\lnot r",
                            "p \\land (q \\lor r)"];

/// truthtable prints the truth table of a propositional-logic expression
/// written with LaTeX operators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints debug logs to stderr. `RUST_LOG` is used otherwise.
    #[arg(short, long)]
    verbose: bool,

    /// Prints the tables of a few sample expressions and exits.
    #[arg(short, long)]
    demo: bool,

    /// Rejects expressions with more distinct variables than this.
    #[arg(short, long, default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: usize,

    /// The expression to tabulate. Starts an interactive prompt when omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let generator = Generator::with_max_variables(args.max_variables);

    if args.demo {
        run_demo(&generator);
        return ExitCode::SUCCESS;
    }

    match args.expression {
        Some(expression) => match generator.generate(expression.trim()) {
            Ok(table) => {
                println!("{table}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        },
        None => {
            run_prompt(&generator);
            ExitCode::SUCCESS
        },
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run_demo(generator: &Generator) {
    println!("Testing with sample expressions:\n");
    for expression in SAMPLES {
        match generator.generate(expression) {
            Ok(table) => println!("Expression: {expression}\n{table}\n"),
            Err(e) => println!("Error with '{expression}': {e}\n"),
        }
    }
}

fn print_banner() {
    println!("LaTeX Truth Table Generator");
    println!("Supported operators:");
    println!("  \\land (and), \\lor (or), \\lnot (not)");
    println!("  \\rightarrow (implies), \\leftrightarrow (iff)");
    println!("Example: (p \\land q) \\rightarrow (r \\lor \\lnot p)");
    println!();
}

/// Reads expressions line by line until `quit` or end of input. Errors are
/// reported and the loop carries on.
fn run_prompt(generator: &Generator) {
    print_banner();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter LaTeX expression (or 'quit' to exit): ");
        if let Err(e) = io::stdout().flush() {
            error!("failed to flush stdout: {e}");
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("failed to read input: {e}");
                break;
            },
            None => {
                println!();
                break;
            },
        };

        let expression = line.trim();
        if expression.eq_ignore_ascii_case("quit") {
            break;
        }
        if expression.is_empty() {
            continue;
        }

        match generator.generate(expression) {
            Ok(table) => {
                info!(rows = table.rows().len(), "generated table");
                println!("\nTruth Table:\n{table}\n");
            },
            Err(e) => {
                println!("Error: {e}");
                println!("Please check your expression syntax.\n");
            },
        }
    }
}
