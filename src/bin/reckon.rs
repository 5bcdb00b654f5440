use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use reckon::{Number, ReckonError, Repl, Session, evaluate};

#[derive(Parser)]
#[command(author, version, about = "Interactive arithmetic calculator")]
struct Args {
    /// Do not print the greeting line before the first prompt
    #[arg(long, global = true)]
    no_banner: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read expressions line by line until end of input or `exit`
    Repl,
    /// Evaluate a single expression and exit
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
}

fn main() -> Result<ExitCode, ReckonError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            run_repl(args.no_banner)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Eval { expression } => Ok(eval_once(&expression)),
    }
}

fn run_repl(no_banner: bool) -> Result<(), ReckonError> {
    if io::stdin().is_terminal() {
        debug!("stdin is a terminal, using line editor");
        let mut repl = Repl::new();
        if no_banner {
            repl = repl.without_banner();
        }
        return repl.run();
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    if no_banner {
        session = session.without_banner();
    }
    session.run()?;
    Ok(())
}

fn eval_once(expression: &str) -> ExitCode {
    match evaluate(expression) {
        Ok(value) => {
            println!("Result: {}", Number(value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
