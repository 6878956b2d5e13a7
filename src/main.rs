use std::{fs, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treecalc::{Node, parse, tokenize};

/// Expressions evaluated when neither expressions nor a file are given.
const DEMO_EXPRESSIONS: &[&str] = &["3.5 + 4.5",
                                    "5.4 - 3.2",
                                    "4.2 * 1.2",
                                    "6.7 / 3.1",
                                    "(3.5 + 3.2) * 2",
                                    "4.2 / (1.2 * 2.3)",
                                    "2^3",
                                    "-5 + 2",
                                    "sin(0)",
                                    "cos(0)",
                                    "tan(0)",
                                    "cot(1.5708)",
                                    "ln(2.71)",
                                    "log(100)",
                                    "sqrt(144)",
                                    "2^3.5",
                                    "2^-0.5",
                                    "sinh(1)",
                                    "cosh(1)",
                                    "tanh(1)",
                                    "coth(1)",
                                    "sech(1)",
                                    "csch(1)",
                                    "5!"];

/// treecalc evaluates arithmetic expressions by building and walking an
/// explicit expression tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line. Blank lines and lines
    /// starting with `#` are skipped; in `expr = expected` lines only `expr`
    /// is evaluated.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Also prints the token stream of each expression.
    #[arg(long)]
    tokens: bool,

    /// Also prints the fully parenthesized tree of each expression.
    #[arg(long)]
    tree: bool,

    /// Raises the log level; repeat for more detail (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate. The bundled demo runs when none are given.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                 EnvFilter::new(directive_for_verbosity(args.verbose))
                             }))
                             .with_ansi(false)
                             .with_writer(std::io::stderr)
                             .init();

    let expressions = match collect_expressions(&args) {
        Ok(expressions) => expressions,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };
    debug!(count = expressions.len(), "evaluating expressions");

    let mut failures = 0_usize;
    for expression in &expressions {
        if let Err(message) = run(expression, &args) {
            eprintln!("{expression}: {message}");
            failures += 1;
        }
    }

    if failures > 0 {
        debug!(failures, "some expressions failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Gathers the expressions to evaluate, in order: the file's lines first,
/// then the positional arguments, or the demo list when both are empty.
fn collect_expressions(args: &Args) -> Result<Vec<String>, String> {
    let mut expressions = Vec::new();

    if let Some(path) = &args.file {
        let content = fs::read_to_string(path).map_err(|e| {
                                                  format!("Failed to read the input file '{}': {e}",
                                                          path.display())
                                              })?;
        expressions.extend(expressions_in(&content));
    }
    expressions.extend(args.expressions.iter().cloned());

    if args.file.is_none() && expressions.is_empty() {
        expressions.extend(DEMO_EXPRESSIONS.iter().map(ToString::to_string));
    }
    Ok(expressions)
}

/// Extracts the expressions from the text of an expression file.
fn expressions_in(content: &str) -> impl Iterator<Item = String> + '_ {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               line.split_once('=')
                   .map_or(line, |(expression, _)| expression.trim_end())
                   .to_string()
           })
}

/// Evaluates one expression and prints it, with the requested extras.
fn run(expression: &str, args: &Args) -> Result<(), String> {
    if args.tokens {
        let tokens = tokenize(expression).map_err(|e| e.to_string())?;
        let rendered = tokens.iter()
                             .map(ToString::to_string)
                             .collect::<Vec<_>>()
                             .join(" ");
        println!("tokens: {rendered}");
    }

    let tree: Node = parse(expression).map_err(|e| e.to_string())?;
    if args.tree {
        println!("tree: {tree}");
    }

    let value = tree.evaluate().map_err(|e| e.to_string())?;
    println!("{expression} = {value}");
    Ok(())
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "treecalc=info",
        1 => "treecalc=debug",
        _ => "treecalc=trace",
    }
}
