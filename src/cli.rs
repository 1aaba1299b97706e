use clap::Parser;
use std::path::PathBuf;

use path_hunter::config::{DEFAULT_EXTENSIONS, DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS};

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Concurrent HTTP content discovery scanner", long_about = None)]
pub struct Cli {
    /// Target URL (https:// is assumed when no scheme is given)
    #[arg(short = 'u', long = "url")]
    pub url: String,

    /// Path to a custom wordlist file (one word per line, '#' for comments)
    #[arg(short = 'w', long)]
    pub wordlist: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(short = 't', long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// File extensions to try, comma separated
    #[arg(long = "ext", default_value = DEFAULT_EXTENSIONS)]
    pub extensions: String,

    /// Hide status codes, comma separated (e.g. 404,403)
    #[arg(long = "fc", default_value = "")]
    pub filter_codes: String,

    /// Delay before each request in milliseconds
    #[arg(long, default_value_t = 0_u64)]
    pub delay: u64,

    /// Save results to a JSON file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Stealth mode: random delays and browser user agents
    #[arg(long, default_value_t = false)]
    pub stealth: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Show all responses, including errors and filtered codes
    #[arg(long = "all", default_value_t = false)]
    pub show_all: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
