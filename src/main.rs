use std::fs;

use clap::Parser;
use rpnsolve::{evaluate, postfix};

/// rpnsolve evaluates arithmetic expressions over single-letter variables,
/// such as `2 * (x - 1)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpnsolve to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Value substituted for the variable `x`.
    #[arg(short, long, allow_hyphen_values = true)]
    x: Option<f64>,

    /// Binds another variable, for example `--bind a=3`. May be repeated.
    #[arg(short, long = "bind", value_parser = parse_binding)]
    bindings: Vec<(char, f64)>,

    /// Prints the expression in postfix notation instead of evaluating it.
    /// Variables are printed by name, so values cannot be bound.
    #[arg(short, long, conflicts_with_all = ["x", "bindings"])]
    postfix: bool,

    contents: String,
}

fn parse_binding(arg: &str) -> Result<(char, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected name=value, found '{arg}'"))?;
    let mut chars = name.trim().chars();
    let (Some(name), None) = (chars.next(), chars.next()) else {
        return Err(format!("variable names are single letters, found '{name}'"));
    };
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name, value))
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    let expression = expression.trim_end();

    if args.postfix {
        match postfix(expression) {
            Ok(rpn) => println!("{rpn}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut bindings = Vec::with_capacity(args.bindings.len() + 1);
    if let Some(x) = args.x {
        bindings.push(('x', x));
    }
    bindings.extend(args.bindings);

    match evaluate(expression, &bindings) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
