use clap::{Parser as ClapParser, Subcommand};
use oslc_query::cli::{self, CheckOptions, CheckResult, Clause, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "oslcq")]
#[command(about = "oslcq - Parse and inspect OSLC query parameters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one query clause and print it as JSON
    Check {
        /// Which query parameter the expression belongs to
        #[arg(value_enum)]
        clause: Clause,

        /// The expression, URL-decoded (reads from stdin if not provided)
        expression: Option<String>,

        /// oslc.prefix expression binding the prefixes used by the clause
        #[arg(short = 'P', long, env = "OSLC_PREFIXES")]
        prefixes: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Print the inverted selection (select and properties only)
        #[arg(short, long)]
        invert: bool,

        /// Only validate syntax, don't print the tree
        #[arg(long)]
        syntax_only: bool,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'oslcq docs' to list topics)
        topic: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            clause,
            expression,
            prefixes,
            pretty,
            invert,
            syntax_only,
        } => read_expression(expression).and_then(|expression| {
            run_check(CheckOptions {
                clause,
                expression,
                prefixes,
                pretty,
                invert,
                syntax_only,
            })
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_expression(expression: Option<String>) -> Result<String, CliError> {
    match expression {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(options: CheckOptions) -> Result<(), CliError> {
    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            if options.pretty {
                println!("{:#}", output);
            } else {
                println!("{}", output);
            }
        }
    }
    Ok(())
}
