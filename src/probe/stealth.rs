use rand::Rng;
use std::time::Duration;

use crate::config::ScanConfig;

/// User-Agent sent when stealth mode is off.
pub const SCANNER_USER_AGENT: &str = concat!("PathHunter/", env!("CARGO_PKG_VERSION"));

/// Realistic browser agents, one drawn per request in stealth mode.
pub const BROWSER_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux i686; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 17_1_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
];

/// Per-request pacing applied by each worker before it probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    None,
    Fixed(Duration),
    /// Uniform random delay in `[min_ms, max_ms]` plus a random browser agent.
    Stealth { min_ms: u64, max_ms: u64 },
}

impl Pacing {
    /// Stealth wins over a fixed delay when both are configured.
    pub fn from_config(cfg: &ScanConfig) -> Self {
        if cfg.stealth {
            Pacing::Stealth {
                min_ms: cfg.stealth_delay_min_ms,
                max_ms: cfg.stealth_delay_max_ms,
            }
        } else if cfg.delay_ms > 0 {
            Pacing::Fixed(Duration::from_millis(cfg.delay_ms))
        } else {
            Pacing::None
        }
    }

    pub fn next_delay(&self) -> Option<Duration> {
        match *self {
            Pacing::None => None,
            Pacing::Fixed(d) => Some(d),
            Pacing::Stealth { min_ms, max_ms } => {
                let ms = rand::thread_rng().gen_range(min_ms..=max_ms);
                Some(Duration::from_millis(ms))
            }
        }
    }

    pub fn user_agent(&self) -> &'static str {
        match self {
            Pacing::Stealth { .. } => random_user_agent(),
            _ => SCANNER_USER_AGENT,
        }
    }
}

pub fn random_user_agent() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..BROWSER_USER_AGENTS.len());
    BROWSER_USER_AGENTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stealth_takes_precedence_over_fixed_delay() {
        let cfg = ScanConfig { stealth: true, delay_ms: 250, ..Default::default() };
        assert_eq!(Pacing::from_config(&cfg), Pacing::Stealth { min_ms: 100, max_ms: 1000 });
    }

    #[test]
    fn fixed_and_none() {
        let cfg = ScanConfig { delay_ms: 250, ..Default::default() };
        let pacing = Pacing::from_config(&cfg);
        assert_eq!(pacing.next_delay(), Some(Duration::from_millis(250)));
        assert_eq!(pacing.user_agent(), SCANNER_USER_AGENT);

        let none = Pacing::from_config(&ScanConfig::default());
        assert_eq!(none.next_delay(), None);
    }

    #[test]
    fn stealth_delay_stays_in_range() {
        let pacing = Pacing::Stealth { min_ms: 100, max_ms: 1000 };
        for _ in 0..200 {
            let d = pacing.next_delay().unwrap().as_millis();
            assert!((100..=1000).contains(&d));
            assert!(BROWSER_USER_AGENTS.contains(&pacing.user_agent()));
        }
    }
}
