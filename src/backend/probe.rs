//! Startup connectivity probe for pulpit
//!
//! This module determines whether the media backend is reachable by
//! walking a short ordered list of health-check addresses. The first
//! success wins and its host/port become the active backend address;
//! exhausting the list settles the indicator on disconnected. The probe
//! runs exactly once per application lifetime, and attempts are
//! strictly serialized, so the whole probe is bounded by
//! `candidates x timeout`.

use crate::config::{
    API_HEALTH_PATH, BackendConfig, DEFAULT_BACKEND_PORT, HEALTH_FALLBACK_PATH,
    LOG_MSG_PROBING_BACKEND, USER_AGENT,
};
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::timeout;

/// Reachability of the media backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    /// The probe has not settled yet
    Checking,
    /// A health-check candidate answered successfully
    Connected,
    /// Every health-check candidate failed
    Disconnected,
}

impl std::fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ConnectivityState::Checking => "checking",
            ConnectivityState::Connected => "connected",
            ConnectivityState::Disconnected => "disconnected",
        };
        write!(f, "{name}")
    }
}

/// One health-check address to try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCandidate {
    /// Full URL of the health endpoint
    pub url: String,
    /// Host adopted as the backend address if this candidate succeeds
    pub host: String,
    /// Port adopted as the backend address if this candidate succeeds
    pub port: u16,
}

impl HealthCandidate {
    fn new(host: &str, port: u16, path: &str) -> Self {
        Self {
            url: format!("http://{host}:{port}{path}"),
            host: host.to_string(),
            port,
        }
    }
}

/// Result of a finished probe cycle
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// The settled connectivity indicator
    pub state: ConnectivityState,
    /// The active backend address for subsequent calls
    pub backend: BackendConfig,
    /// How many candidates were attempted
    pub attempts: usize,
}

/// Builds the ordered candidate list for a configured backend
///
/// The configured host is tried first on the primary and the bare
/// health path, followed by the two localhost fallbacks.
pub fn health_candidates(config: &BackendConfig) -> Vec<HealthCandidate> {
    vec![
        HealthCandidate::new(&config.host, config.port, API_HEALTH_PATH),
        HealthCandidate::new(&config.host, config.port, HEALTH_FALLBACK_PATH),
        HealthCandidate::new("localhost", DEFAULT_BACKEND_PORT, API_HEALTH_PATH),
        HealthCandidate::new("127.0.0.1", DEFAULT_BACKEND_PORT, API_HEALTH_PATH),
    ]
}

/// Walks the candidate list with the supplied attempt function
///
/// Candidates are attempted strictly in order, one at a time. The first
/// success ends the walk and adopts that candidate's address; remaining
/// candidates are not tried. The attempt function owns the per-attempt
/// bound (timeout), which keeps the sequencing testable without a
/// network.
pub async fn probe_with<F, Fut>(
    candidates: &[HealthCandidate],
    initial: &BackendConfig,
    mut attempt: F,
) -> ProbeOutcome
where
    F: FnMut(&HealthCandidate) -> Fut,
    Fut: std::future::Future<Output = Result<(), String>>,
{
    for (index, candidate) in candidates.iter().enumerate() {
        debug!("Attempting health check against {}", candidate.url);
        match attempt(candidate).await {
            Ok(()) => {
                let backend = BackendConfig::new(candidate.host.clone(), candidate.port);
                info!("Backend connected via {} ({backend})", candidate.url);
                return ProbeOutcome {
                    state: ConnectivityState::Connected,
                    backend,
                    attempts: index + 1,
                };
            }
            Err(reason) => {
                warn!("Health check against {} failed: {reason}", candidate.url);
            }
        }
    }

    info!("All health check candidates failed");
    ProbeOutcome {
        state: ConnectivityState::Disconnected,
        backend: initial.clone(),
        attempts: candidates.len(),
    }
}

/// Runs the startup probe against the real backend
///
/// Each attempt is a GET bounded by `timeout_secs`; timeouts, network
/// errors, and non-success statuses all advance to the next candidate.
pub async fn probe_backend(config: &BackendConfig, timeout_secs: u64) -> ProbeOutcome {
    info!("{LOG_MSG_PROBING_BACKEND}");

    let http = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
        Ok(client) => client,
        Err(err) => {
            warn!("Failed to build HTTP client for the probe: {err}");
            return ProbeOutcome {
                state: ConnectivityState::Disconnected,
                backend: config.clone(),
                attempts: 0,
            };
        }
    };

    let candidates = health_candidates(config);
    probe_with(&candidates, config, |candidate| {
        let http = http.clone();
        let url = candidate.url.clone();
        async move {
            match timeout(Duration::from_secs(timeout_secs), http.get(&url).send()).await {
                Err(_) => Err(format!("Timed out after {timeout_secs}s")),
                Ok(Err(err)) => Err(err.to_string()),
                Ok(Ok(response)) if response.status().is_success() => Ok(()),
                Ok(Ok(response)) => Err(format!("Status {}", response.status())),
            }
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_candidate_order() {
        let config = BackendConfig::new("media.example.org", 9000);
        let candidates = health_candidates(&config);
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0].url, "http://media.example.org:9000/api/health");
        assert_eq!(candidates[1].url, "http://media.example.org:9000/health");
        assert_eq!(candidates[2].url, "http://localhost:5000/api/health");
        assert_eq!(candidates[3].url, "http://127.0.0.1:5000/api/health");
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let config = BackendConfig::default();
        let candidates = health_candidates(&config);
        let attempts = AtomicUsize::new(0);

        let outcome = probe_with(&candidates, &config, |_| {
            let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err("Timed out after 3s".to_string())
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(outcome.state, ConnectivityState::Connected);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        // The successful candidate's address is adopted
        assert_eq!(outcome.backend, BackendConfig::new("localhost", 5000));
    }

    #[tokio::test]
    async fn test_immediate_success_stops_after_one_attempt() {
        let config = BackendConfig::new("media.example.org", 9000);
        let candidates = health_candidates(&config);
        let attempts = AtomicUsize::new(0);

        let outcome = probe_with(&candidates, &config, |_| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome.state, ConnectivityState::Connected);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.backend, BackendConfig::new("media.example.org", 9000));
    }

    #[tokio::test]
    async fn test_all_candidates_failing() {
        let config = BackendConfig::default();
        let candidates = health_candidates(&config);
        let attempts = AtomicUsize::new(0);

        let outcome = probe_with(&candidates, &config, |_| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err("Connection refused".to_string()) }
        })
        .await;

        assert_eq!(outcome.state, ConnectivityState::Disconnected);
        assert_eq!(outcome.attempts, candidates.len());
        assert_eq!(attempts.load(Ordering::SeqCst), candidates.len());
        // The configured address is kept when nothing answered
        assert_eq!(outcome.backend, config);
    }

    #[test]
    fn test_connectivity_state_display() {
        assert_eq!(ConnectivityState::Checking.to_string(), "checking");
        assert_eq!(ConnectivityState::Connected.to_string(), "connected");
        assert_eq!(ConnectivityState::Disconnected.to_string(), "disconnected");
    }
}
