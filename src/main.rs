use std::path::Path;

use anyhow::Context as _;
use clap::Parser;
use reckon::{Definition, Expression, batch::document::Document};
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions with implicit multiplication,
/// variadic functions and positional arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon that `contents` is a JSON batch document instead of an
    /// expression.
    #[arg(short, long)]
    file: bool,

    /// Positional argument, referenced as `$0`, `$1`, ... (repeatable).
    #[arg(short, long = "arg", allow_negative_numbers = true)]
    args: Vec<f64>,

    /// Binding as `name=value` for a constant or `name=expression` for a
    /// sub-expression (repeatable).
    #[arg(short, long = "define", value_parser = parse_definition)]
    defines: Vec<(String, String)>,

    /// Logs analysis and evaluation to stderr. Filter with `RUST_LOG`.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn parse_definition(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected name=value, found '{raw}'"))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new("reckon=trace")
                                                  }))
                                 .with_writer(std::io::stderr)
                                 .init();
    }

    if let Err(e) = run(&args) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.file {
        let document = Document::load(Path::new(&args.contents))?;
        for outcome in document.run()? {
            println!("{outcome}");
        }
        return Ok(());
    }

    let mut expression = Expression::new(args.contents.as_str());
    for (name, value) in &args.defines {
        let definition = value.parse::<f64>()
                              .map_or_else(|_| Definition::from(value.as_str()), Definition::from);
        expression.define(name.as_str(), definition);
    }

    let value = expression.evaluate(&args.args)
                          .with_context(|| format!("failed to evaluate '{}'", expression.source()))?;
    println!("{value}");
    Ok(())
}
