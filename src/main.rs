use std::{
    fs::File,
    io::{self, BufReader, IsTerminal as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use shunt::{Session, SessionOptions};
use tracing_subscriber::EnvFilter;

/// shunt evaluates arithmetic, boolean and bitwise expressions with variables.
///
/// With no expression and no file, lines are read from standard input until
/// end of file.
#[derive(Parser, Debug)]
#[command(name = "shunt", version, about, long_about = None)]
struct Args {
    /// Evaluate each line of this file in one session.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Print the lexed tokens of each line.
    #[arg(long)]
    tokens: bool,

    /// Print the postfix order of each line.
    #[arg(long)]
    postfix: bool,

    /// A single expression to evaluate.
    expression: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let mut session = Session::with_options(SessionOptions { show_tokens:  args.tokens,
                                                             show_postfix: args.postfix, });
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let failures = if let Some(expression) = &args.expression {
        session.run(expression.as_bytes(), &mut out, &mut err, None)?
    } else if let Some(path) = &args.file {
        let file = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
        session.run(BufReader::new(file), &mut out, &mut err, None)
               .with_context(|| format!("read script '{}'", path.display()))?
    } else {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal().then_some("> ");
        session.run(stdin.lock(), &mut out, &mut err, prompt)?;
        return Ok(());
    };

    anyhow::ensure!(failures == 0, "{failures} line(s) failed to evaluate");

    Ok(())
}
