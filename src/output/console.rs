use crate::aggregate::{ScanSummary, StatusClass, Verdict};
use crate::config::ScanConfig;
use crate::probe::ProbeResult;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";

pub fn print_banner() {
    println!("{CYAN}");
    println!(r#"
     ____       _   _     _   _             _
    |  _ \ __ _| |_| |__ | | | |_   _ _ __ | |_ ___ _ __
    | |_) / _` | __| '_ \| |_| | | | | '_ \| __/ _ \ '__|
    |  __/ (_| | |_| | | |  _  | |_| | | | | ||  __/ |
    |_|   \__,_|\__|_| |_|_| |_|\__,_|_| |_|\__\___|_|

              Content Discovery Scanner v{}
    "#, env!("CARGO_PKG_VERSION"));
    print!("{RESET}");
}

pub fn print_config(cfg: &ScanConfig) {
    let variants = cfg.extension_variants();
    let exts: Vec<&str> = variants.iter().map(String::as_str).filter(|e| !e.is_empty()).collect();

    println!("{CYAN}[*] Scan Configuration:{RESET}");
    println!("    Target: {}", cfg.target);
    println!("    Words to check: {}", cfg.paths.len());
    println!("    Total URLs: {} (with extensions)", cfg.paths.len() * variants.len());
    println!("    Threads: {}", cfg.threads);
    println!("    Extensions: {}", exts.join(", "));
    if cfg.stealth {
        println!("{YELLOW}    Stealth mode: ON{RESET}");
    }
    if cfg.delay_ms > 0 {
        println!("{YELLOW}    Delay: {}ms{RESET}", cfg.delay_ms);
    }
    println!("\n{CYAN}[*] Starting scan...{RESET}\n");
}

/// Render one result line, or `None` when the verdict hides it.
pub fn format_result(result: &ProbeResult, verdict: Verdict) -> Option<String> {
    match verdict {
        Verdict::Hidden => None,
        Verdict::ShowError => Some(format!(
            "{RED}[ERROR] {} - {}{RESET}",
            result.url,
            result.error.as_deref().unwrap_or("unknown error")
        )),
        Verdict::Show(class) => Some(format!(
            "{}[{}] {} - Size: {}{RESET}",
            class.color_code(),
            result.status.unwrap_or_default(),
            result.url,
            result.size_human
        )),
    }
}

pub fn print_result(result: &ProbeResult, verdict: Verdict) {
    if let Some(line) = format_result(result, verdict) {
        println!("{}", line);
    }
}

pub fn print_summary(summary: &ScanSummary) {
    println!("\n{CYAN}[*] Scan Complete!{RESET}");
    println!("    Total URLs checked: {}", summary.total_requests);
    println!("    {}Discovered: {}{RESET}", StatusClass::Success.color_code(), summary.discovered);
    if summary.errors > 0 {
        println!("    Errors: {}", summary.errors);
    }
    println!("    Time taken: {:.2} seconds", summary.duration.as_secs_f64());
    println!("    Requests/sec: {:.2}", summary.requests_per_sec());
}

pub fn print_saved(path: &std::path::Path) {
    println!("{GREEN}[+] Results saved to: {}{RESET}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_results_render_nothing() {
        let r = ProbeResult::ok("https://h/a", 404, 1);
        assert!(format_result(&r, Verdict::Hidden).is_none());
    }

    #[test]
    fn result_line_includes_status_url_and_size() {
        let r = ProbeResult::ok("https://h/admin", 200, 512);
        let line = format_result(&r, Verdict::Show(StatusClass::Success)).unwrap();
        assert!(line.starts_with("\x1b[32m"));
        assert!(line.contains("[200] https://h/admin - Size: 512 B"));
    }

    #[test]
    fn error_line_is_red() {
        let r = ProbeResult::failed("https://h/x", "connection refused");
        let line = format_result(&r, Verdict::ShowError).unwrap();
        assert!(line.starts_with(RED));
        assert!(line.contains("[ERROR] https://h/x - connection refused"));
    }
}
