//! tlaref CLI

use tlaref::args::parse_query;
use tlaref::commands::{self, CommandError};

type Command = fn(&tlaref::args::QueryOptions) -> Result<String, CommandError>;

fn main() {
    tlaref::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let (run, needs_position): (Command, bool) = match command {
        "resolve" => (commands::resolve as Command, true),
        "complete" => (commands::complete as Command, true),
        "rename-scope" => (commands::rename_scope as Command, true),
        "references" => (commands::references as Command, true),
        "parse" => (commands::parse as Command, false),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("tlaref {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let options = match parse_query(&args[2..], needs_position) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            if needs_position {
                eprintln!("Usage: tlaref {command} <file.tla> <line>:<column> [options]");
            } else {
                eprintln!("Usage: tlaref {command} <file.tla> [options]");
            }
            std::process::exit(1);
        }
    };

    match run(&options) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tlaref: TLA+ name resolution");
    println!();
    println!("Usage: tlaref <command> <file.tla> [<line>:<column>] [options]");
    println!();
    println!("Commands:");
    println!("  resolve <file> <pos>        Show the definition an identifier binds to");
    println!("  complete <file> <pos>       List names visible at a position");
    println!("  rename-scope <file> <pos>   Show where a symbol may be renamed");
    println!("  references <file> <pos>     List every reference to a symbol");
    println!("  parse <file>                Show the syntax tree and parse errors");
    println!("  help                        Show this help message");
    println!("  version                     Show version information");
    println!();
    println!("Options:");
    println!("  --dir <path>    Load another source directory");
    println!("  --no-stdlib     Do not load the bundled standard modules");
    println!();
    println!("Environment:");
    println!("  TLAREF_PATH       Extra source directories, ':'-separated");
    println!("  RUST_LOG          Log filter, e.g. tla_resolve=debug");
    println!("  TLAREF_LOG_TREE   Print log spans as an indented tree");
}
