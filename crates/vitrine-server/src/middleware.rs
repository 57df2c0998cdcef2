use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::AppState;

/// In-memory rate limiter state.
///
/// Uses a simple fixed window counter keyed by client IP. This API has no
/// authenticated principals, so the IP is the only identity available.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    state: Arc<Mutex<HashMap<IpAddr, (u32, Instant)>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Check if the request is allowed.
    ///
    /// Returns `true` if allowed, `false` if limit exceeded.
    pub fn check(&self, key: IpAddr, limit: u32) -> bool {
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // Lock poisoned by a panicked thread. Recover by accepting the
                // poisoned guard — the worst that happens is a stale counter.
                // Refusing all requests because of a poisoned rate-limiter
                // would be a self-inflicted denial of service.
                tracing::error!("rate limiter lock poisoned, recovering with stale state");
                poisoned.into_inner()
            }
        };
        let now = Instant::now();

        // Periodic cleanup to prevent memory leak.
        // Instead of clearing the entire map (which resets all rate limits and
        // allows a thundering-herd bypass), evict only entries whose window
        // has expired. This preserves active rate limits while reclaiming memory.
        if state.len() > 10000 {
            state.retain(|_, (_, start)| now.duration_since(*start) <= Duration::from_secs(60));
        }

        let (count, start) = state.entry(key).or_insert((0, now));

        if now.duration_since(*start) > Duration::from_secs(60) {
            // Reset window
            *count = 1;
            *start = now;
            true
        } else {
            *count += 1;
            *count <= limit
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rate limiting middleware.
///
/// One fixed window counter per IP, compared against a per-route threshold:
/// the contact form gets the tightest one (a real visitor submits once),
/// chat a looser one, everything else the default.
pub async fn rate_limit_middleware(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let state = req
        .extensions()
        .get::<Arc<AppState>>()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?
        .clone();

    // In test environments, ConnectInfo must be injected manually.
    // Safe default: fail. Misconfiguration should be fixed.
    let ip = match req.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(addr)) => addr.ip(),
        None => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let path = req.uri().path();
    let limit = if path == "/api/chat" {
        state.limits.chat_per_minute
    } else if path == "/api/contact" && req.method() == Method::POST {
        state.limits.contact_per_minute
    } else {
        state.limits.default_per_minute
    };

    if !state.rate_limiter.check(ip, limit) {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::TOO_MANY_REQUESTS;
        response.headers_mut().insert(
            axum::http::header::RETRY_AFTER,
            axum::http::HeaderValue::from_static("60"),
        );
        return Ok(response);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limiter_allows_within_limit() {
        let limiter = RateLimiter::new();
        let key: IpAddr = "127.0.0.1".parse().unwrap();
        for _ in 0..5 {
            assert!(limiter.check(key, 5));
        }
        // 6th request should be denied
        assert!(!limiter.check(key, 5));
    }

    #[test]
    fn rate_limiter_different_keys_independent() {
        let limiter = RateLimiter::new();
        let key_a: IpAddr = "10.0.0.1".parse().unwrap();
        let key_b: IpAddr = "10.0.0.2".parse().unwrap();

        for _ in 0..3 {
            assert!(limiter.check(key_a, 3));
        }
        assert!(!limiter.check(key_a, 3));

        // key_b should still be allowed
        assert!(limiter.check(key_b, 3));
    }

    #[test]
    fn rate_limiter_eviction_preserves_active_limits() {
        let limiter = RateLimiter::new();

        // Fill with 10001 distinct IPs to trigger eviction
        for i in 0..10001u32 {
            let ip: IpAddr = std::net::Ipv4Addr::from(i.to_be_bytes()).into();
            limiter.check(ip, 100);
        }

        // The most recent IP is within its window, so its counter must have
        // survived the eviction pass rather than being reset by a blanket
        // clear. It has 1 request recorded; limit-1 more are allowed.
        let recent_ip: IpAddr = std::net::Ipv4Addr::from(10000u32.to_be_bytes()).into();
        for _ in 0..99 {
            assert!(limiter.check(recent_ip, 100));
        }
        // Now at 101 total, should be denied
        assert!(!limiter.check(recent_ip, 100));
    }
}
