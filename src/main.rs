//! # Desk Calculator
//!
//! A scientific desk calculator for the terminal.
//!

use clap::Parser;
use deskcalc::mach::{evaluate, format_result, AngleMode, Calculator, MATH_ERROR};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "deskcalc", version, about = "A scientific desk calculator")]
struct Args {
    /// Angle unit for sin, cos and tan: deg, rad or grad.
    #[arg(long, default_value_t = AngleMode::Deg)]
    mode: AngleMode,

    /// Evaluate one expression, print the result and exit.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    eval: Option<String>,

    /// No colours or styling.
    #[arg(long)]
    plain: bool,
}

fn main() {
    let args = Args::parse();
    init_logging();
    if let Some(expression) = args.eval {
        match evaluate(&expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(error) => {
                error!(%error, %expression, "evaluation failed");
                println!("{}", MATH_ERROR);
                std::process::exit(1);
            }
        }
        return;
    }
    if let Err(error) = deskcalc::term::main_loop(Calculator::new(args.mode), args.plain) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("DESKCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
