use anyhow::Result;
use clap::{Parser, Subcommand};
use kata_runner::RunnerConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Scaffold and check coding-exercise solutions.
///
/// Every solution is a small program that runs its own cases through
/// `kata_runner::Suite` and prints a colorized report.
///
/// EXAMPLES:
///     kata new "Two Sum"                 Create src/bin/two_sum.rs
///     kata new "Two Sum" -f two_sum_v2   Choose the function name
///     kata demo                          Run the sample suite
///
/// ENVIRONMENT VARIABLES:
///     NO_COLOR          Set to disable colored output
///     KATA_BACKTRACE    Set to '0' to omit backtraces for panicking cases
///     KATA_LOG          Log filter, e.g. 'debug' (default: warn)
#[derive(Parser)]
#[command(name = "kata")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a solution file for a new problem
    ///
    /// Renders the solution template with a `Solution` stub and a `main`
    /// that runs the cases you add. The output directory is taken from
    /// --dir, then `scaffold.dir` in kata.toml, then src/bin.
    ///
    /// EXAMPLES:
    ///     kata new "Two Sum"
    ///     kata new "Two Sum" --dir solutions --force
    #[command(visible_alias = "n")]
    New {
        /// Problem name, e.g. "Two Sum"
        problem: String,
        /// Function name (defaults to the problem name in snake case)
        #[arg(long, short = 'f')]
        function: Option<String>,
        /// Output directory
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,
        /// Overwrite an existing solution
        #[arg(long)]
        force: bool,
    },

    /// Run a sample suite that shows every verdict
    Demo,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KATA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = RunnerConfig::from_env();

    // Command-line flag overrides environment variable
    if cli.no_color {
        config.no_color = true;
    }
    if config.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::New {
            problem,
            function,
            dir,
            force,
        } => {
            commands::new::run(commands::new::NewArgs {
                problem,
                function,
                dir,
                force,
                cwd: std::env::current_dir()?,
            })?;
        }
        Commands::Demo => {
            commands::demo::run(&config);
        }
    }

    Ok(())
}
