//! famdot CLI entry point.
//!
//! Reads a family description from a file or stdin, writes the DOT graph
//! (or the JSON conversion) to a file or stdout. Pipe the output through
//! GraphViz to draw the image:
//!
//! ```text
//! famdot -f text -a 'Louis XIV' family.txt | dot -Tpng -o family.png
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use famdot::{InputFormat, RenderOptions, TreeKind, parsers, render_family};

/// Family tree description to GraphViz DOT graph output.
#[derive(Parser, Debug)]
#[command(
    name = "famdot",
    about = "Family tree description to GraphViz DOT graph output"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Starting person(s), comma-separated names or ids (if omitted, the
    /// first person without recorded parents is used)
    #[arg(short = 'a', long = "ancestor")]
    ancestor: Option<String>,

    /// Input format
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: String,

    /// Convert the input to the JSON format and print it instead of a graph
    #[arg(short = 'c', long = "convert")]
    convert: bool,

    /// Tree to render: ascending, descending, or both
    #[arg(short = 't', long = "tree-type", default_value = "both")]
    tree_type: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let format: InputFormat = match cli.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let family = match parsers::load(&text, format) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Render the graph, or just the JSON conversion of the input
    let rendered = if cli.convert {
        match parsers::json::export(&family) {
            Ok(mut s) => {
                s.push('\n');
                s
            }
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    } else {
        let tree: TreeKind = match cli.tree_type.parse() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };
        let options = RenderOptions {
            tree,
            ancestor: cli.ancestor,
        };
        match render_family(&family, &options) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
