use clap::{Parser as ClapParser, Subcommand};
use notequery::cli::{self, CliError, ParseOptions, StringifyOptions, ValidateOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "notequery")]
#[command(about = "Notequery - parse and build note search strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a search string into free text and filters
    Parse {
        /// The search string (reads from stdin if not provided)
        query: Option<String>,

        /// Recognized keyword; repeat for several (default: book)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the tokens of a search string
    Tokens {
        /// The search string (reads from stdin if not provided)
        query: Option<String>,
    },

    /// Build the canonical search string
    Stringify {
        /// Free text
        #[arg(long, default_value = "")]
        q: String,

        /// Book filter; repeat for several
        #[arg(short, long = "book")]
        books: Vec<String>,
    },

    /// Read the search state from a URL search string
    Filters {
        /// Search string such as '?q=book%3Arust&page=2'
        search: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check a book name
    ValidateBook {
        /// The book name
        name: String,

        /// Existing book; repeat for several
        #[arg(short, long)]
        existing: Vec<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'notequery docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            query,
            keywords,
            pretty,
        } => run_parse(query, keywords, pretty),
        Commands::Tokens { query } => read_query(query).map(|query| {
            for line in cli::execute_tokens(&query) {
                println!("{}", line);
            }
        }),
        Commands::Stringify { q, books } => {
            println!("{}", cli::execute_stringify(&StringifyOptions { q, books }));
            Ok(())
        }
        Commands::Filters { search, pretty } => {
            print_json(&cli::execute_filters(&search), pretty);
            Ok(())
        }
        Commands::ValidateBook { name, existing } => {
            cli::execute_validate_book(&ValidateOptions { name, existing }).map(|()| println!("ok"))
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_parse(query: Option<String>, keywords: Vec<String>, pretty: bool) -> Result<(), CliError> {
    let options = ParseOptions {
        query: read_query(query)?,
        keywords,
    };

    print_json(&cli::execute_parse(&options)?, pretty);
    Ok(())
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
        }
        None => Err(CliError::NoInput),
    }
}

fn print_json(value: &serde_json::Value, pretty: bool) {
    if pretty {
        println!("{:#}", value);
    } else {
        println!("{}", value);
    }
}
