//! Signed playback-URL resolution with proactive refresh and failure
//! cooldown.
//!
//! Clip assets are served through time-boxed signed URLs. The resolver
//! keeps a process-wide cache of `path -> (url, expiry)`, refreshing
//! entries through one batched request per resolve call. Resolution is
//! best-effort: a failure degrades to the unresolved paths and starts a
//! fixed cooldown so a failing signing endpoint is not hammered; it is
//! never surfaced to the caller as an error.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::paths::in_clip_namespace;

/// Remaining lifetime at or below which an entry is re-signed.
pub const DEFAULT_REFRESH_WINDOW: Duration = Duration::from_secs(60);
/// How long resolution attempts are skipped after a failure. Fixed,
/// independent of failure count.
pub const DEFAULT_FAILURE_COOLDOWN: Duration = Duration::from_secs(30);

#[derive(thiserror::Error, Debug)]
pub enum SignError {
    #[error("signing request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("signing endpoint returned status {0}")]
    Status(u16),
}

/// One signed location as returned by the signing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedLocation {
    pub url: String,
    /// Expiry as unix epoch milliseconds.
    pub expires_at: u64,
}

/// The network primitive behind the resolver: one batched POST mapping
/// clip paths to signed locations.
pub trait UrlSigner: Send + Sync {
    fn sign_batch(
        &self,
        paths: &[String],
    ) -> impl Future<Output = Result<HashMap<String, SignedLocation>, SignError>> + Send;
}

#[derive(Serialize)]
struct SignBatchRequest<'a> {
    paths: &'a [String],
}

#[derive(Deserialize)]
struct SignBatchResponse {
    urls: HashMap<String, SignedLocation>,
}

/// [`UrlSigner`] over the platform's signing endpoint.
pub struct HttpUrlSigner {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUrlSigner {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl UrlSigner for HttpUrlSigner {
    async fn sign_batch(
        &self,
        paths: &[String],
    ) -> Result<HashMap<String, SignedLocation>, SignError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SignBatchRequest { paths })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SignError::Status(response.status().as_u16()));
        }
        let body: SignBatchResponse = response.json().await?;
        Ok(body.urls)
    }
}

struct CacheEntry {
    url: String,
    expires_at: Instant,
}

/// Cache and refresh logic for signed playback URLs.
///
/// Construct once and share; [`SignedUrlResolver::reset`] exists for test
/// isolation. Resolution is idempotent, so concurrent callers racing
/// through a shared handle are safe.
pub struct SignedUrlResolver<S: UrlSigner> {
    signer: S,
    cache: HashMap<String, CacheEntry>,
    cooldown_until: Option<Instant>,
    refresh_window: Duration,
    failure_cooldown: Duration,
}

impl<S: UrlSigner> SignedUrlResolver<S> {
    pub fn new(signer: S) -> Self {
        Self::with_settings(signer, DEFAULT_REFRESH_WINDOW, DEFAULT_FAILURE_COOLDOWN)
    }

    pub fn with_settings(
        signer: S,
        refresh_window: Duration,
        failure_cooldown: Duration,
    ) -> Self {
        Self {
            signer,
            cache: HashMap::new(),
            cooldown_until: None,
            refresh_window,
            failure_cooldown,
        }
    }

    /// Drop all cached entries and any active cooldown.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.cooldown_until = None;
    }

    fn fresh_url(&self, path: &str, now: Instant) -> Option<&str> {
        self.cache.get(path).and_then(|entry| {
            let remaining = entry.expires_at.saturating_duration_since(now);
            (remaining > self.refresh_window).then_some(entry.url.as_str())
        })
    }

    /// Resolve a batch of clip paths to playback locations.
    ///
    /// The result is same-length and order-preserving. Paths outside the
    /// clip namespace pass through unchanged; namespace paths come back
    /// signed when possible and unchanged otherwise.
    pub async fn resolve(&mut self, paths: &[String]) -> Vec<String> {
        let now = Instant::now();
        if let Some(until) = self.cooldown_until {
            if now < until {
                log::debug!(
                    "url resolution cooling down for {:?}, returning unresolved paths",
                    until - now
                );
                return paths.to_vec();
            }
            self.cooldown_until = None;
        }

        let mut seen = HashSet::new();
        let needs: Vec<String> = paths
            .iter()
            .filter(|p| in_clip_namespace(p) && self.fresh_url(p, now).is_none())
            .filter(|p| seen.insert(p.as_str()))
            .cloned()
            .collect();

        if !needs.is_empty() {
            match self.signer.sign_batch(&needs).await {
                Ok(signed) => {
                    log::debug!("signed {} of {} requested clip urls", signed.len(), needs.len());
                    let now_ms = epoch_ms();
                    for (path, location) in signed {
                        let ttl = Duration::from_millis(location.expires_at.saturating_sub(now_ms));
                        self.cache.insert(
                            path,
                            CacheEntry {
                                url: location.url,
                                expires_at: now + ttl,
                            },
                        );
                    }
                }
                Err(err) => {
                    log::warn!("clip url resolution failed, entering cooldown: {err}");
                    self.cooldown_until = Some(now + self.failure_cooldown);
                    return paths.to_vec();
                }
            }
        }

        paths
            .iter()
            .map(|path| {
                if !in_clip_namespace(path) {
                    return path.clone();
                }
                self.fresh_url(path, now)
                    .map(str::to_string)
                    .unwrap_or_else(|| path.clone())
            })
            .collect()
    }
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Scripted signer: counts calls, optionally fails, signs every
    /// requested path with a fixed ttl.
    struct MockSigner {
        calls: AtomicUsize,
        fail: bool,
        ttl: Duration,
    }

    impl MockSigner {
        fn ok(ttl: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
                ttl,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
                ttl: Duration::ZERO,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl UrlSigner for MockSigner {
        async fn sign_batch(
            &self,
            paths: &[String],
        ) -> Result<HashMap<String, SignedLocation>, SignError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SignError::Status(503));
            }
            Ok(paths
                .iter()
                .map(|p| {
                    let location = SignedLocation {
                        url: format!("https://cdn.example.com/{p}?sig=abc"),
                        expires_at: epoch_ms() + self.ttl.as_millis() as u64,
                    };
                    (p.clone(), location)
                })
                .collect())
        }
    }

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn resolves_and_caches_signed_urls() {
        let signer = MockSigner::ok(Duration::from_secs(3600));
        let mut resolver =
            SignedUrlResolver::with_settings(signer, Duration::from_secs(60), Duration::ZERO);

        let input = paths(&["date/year/2026.mp3", "date/month/08.mp3"]);
        let resolved = resolver.resolve(&input).await;
        assert_eq!(
            resolved[0],
            "https://cdn.example.com/date/year/2026.mp3?sig=abc"
        );
        assert_eq!(resolver.signer.call_count(), 1);

        // Second resolve is served from cache.
        let resolved_again = resolver.resolve(&input).await;
        assert_eq!(resolved, resolved_again);
        assert_eq!(resolver.signer.call_count(), 1);
    }

    #[tokio::test]
    async fn entries_near_expiry_are_refreshed() {
        // ttl shorter than the refresh window: every resolve re-signs.
        let signer = MockSigner::ok(Duration::from_millis(50));
        let mut resolver =
            SignedUrlResolver::with_settings(signer, Duration::from_secs(60), Duration::ZERO);

        let input = paths(&["time/24h/part1/14.mp3"]);
        resolver.resolve(&input).await;
        resolver.resolve(&input).await;
        assert_eq!(resolver.signer.call_count(), 2);
    }

    #[tokio::test]
    async fn failure_enters_cooldown_and_skips_the_network() {
        let signer = MockSigner::failing();
        let mut resolver =
            SignedUrlResolver::with_settings(signer, Duration::from_secs(60), Duration::from_secs(300));

        let input = paths(&["phrase/hon/pencil/06.mp3"]);
        let resolved = resolver.resolve(&input).await;
        assert_eq!(resolved, input);
        assert_eq!(resolver.signer.call_count(), 1);

        // Cooling down: no further attempts, still unresolved.
        let resolved = resolver.resolve(&input).await;
        assert_eq!(resolved, input);
        assert_eq!(resolver.signer.call_count(), 1);
    }

    #[tokio::test]
    async fn elapsed_cooldown_allows_retries() {
        let signer = MockSigner::failing();
        let mut resolver =
            SignedUrlResolver::with_settings(signer, Duration::from_secs(60), Duration::ZERO);

        let input = paths(&["phrase/hon/pencil/06.mp3"]);
        resolver.resolve(&input).await;
        resolver.resolve(&input).await;
        assert_eq!(resolver.signer.call_count(), 2);
    }

    #[tokio::test]
    async fn foreign_paths_pass_through_unsigned() {
        let signer = MockSigner::ok(Duration::from_secs(3600));
        let mut resolver = SignedUrlResolver::new(signer);

        let input = paths(&["https://elsewhere.example.com/x.mp3", "ui/click.mp3"]);
        let resolved = resolver.resolve(&input).await;
        assert_eq!(resolved, input);
        assert_eq!(resolver.signer.call_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_paths_are_requested_once() {
        let signer = MockSigner::ok(Duration::from_secs(3600));
        let mut resolver = SignedUrlResolver::new(signer);

        let input = paths(&["date/day/01.mp3", "date/day/01.mp3"]);
        let resolved = resolver.resolve(&input).await;
        assert_eq!(resolved[0], resolved[1]);
        assert_eq!(resolver.signer.call_count(), 1);
    }

    #[tokio::test]
    async fn reset_clears_cache_and_cooldown() {
        let signer = MockSigner::ok(Duration::from_secs(3600));
        let mut resolver = SignedUrlResolver::new(signer);

        let input = paths(&["date/day/02.mp3"]);
        resolver.resolve(&input).await;
        resolver.reset();
        resolver.resolve(&input).await;
        assert_eq!(resolver.signer.call_count(), 2);
    }
}
