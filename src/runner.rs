use crate::cli::Cli;
use path_hunter::config::{self, ScanConfig};
use path_hunter::discover::Wordlist;
use path_hunter::output::{console, save_report};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Keep reqwest/hyper at INFO so debug mode shows our probes, not connection churn.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!(
        "path_hunter={crate},reqwest=info,hyper=info,rustls=warn",
        crate = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    console::print_banner();

    if !config::has_scheme(cli.url.trim()) {
        println!("\x1b[33m[*] No protocol specified, using HTTPS: https://{}\x1b[0m", cli.url.trim());
    }

    let wordlist = Wordlist::from_option(cli.wordlist.clone());
    match &wordlist {
        Wordlist::File(path) => println!("\x1b[34m[*] Loading wordlist from: {}\x1b[0m", path.display()),
        Wordlist::BuiltIn => println!("\x1b[34m[*] Using built-in wordlist\x1b[0m"),
    }
    let paths = wordlist.load()?;

    let cfg = ScanConfig {
        target: config::normalize_target(&cli.url),
        paths,
        extensions: config::parse_extensions(&cli.extensions),
        threads: cli.threads,
        timeout_secs: cli.timeout,
        delay_ms: cli.delay,
        stealth: cli.stealth,
        filter_codes: config::parse_status_codes(&cli.filter_codes),
        show_all: cli.show_all,
        ..ScanConfig::default()
    };
    cfg.validate()?;

    console::print_config(&cfg);

    let report = path_hunter::scan::scan(&cfg).await?;
    console::print_summary(&report.summary);

    if let Some(path) = cli.output.as_deref() {
        match save_report(Some(path), &report.records, &report.summary) {
            Ok(true) => console::print_saved(path),
            Ok(false) => println!("[*] Nothing to save to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "failed to save JSON output");
                eprintln!("\x1b[31m[!] Failed to save JSON output: {}\x1b[0m", e);
            }
        }
    }

    Ok(())
}
