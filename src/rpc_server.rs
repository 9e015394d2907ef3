//! LinkVault RPC Server: JSON-RPC over stdin/stdout for the presentation shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"link.create", "params":{"url":"...","tags":"a, b"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries protocol frames only.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use linkvault::app::App;
use linkvault::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const RATE_WINDOW: Duration = Duration::from_secs(1);
const MAX_REQUESTS_PER_WINDOW: u32 = 200;

/// Fixed-window request budget guarding the vault from a runaway client.
struct RateLimiter {
    window_start: Instant,
    used: u32,
}

impl RateLimiter {
    fn new() -> Self {
        Self { window_start: Instant::now(), used: 0 }
    }

    /// Spends one request from the current window; false once it is exhausted.
    fn allow(&mut self, now: Instant) -> bool {
        if now.duration_since(self.window_start) >= RATE_WINDOW {
            self.window_start = now;
            self.used = 0;
        }
        self.used = self.used.saturating_add(1);
        self.used <= MAX_REQUESTS_PER_WINDOW
    }
}

fn emit(frame: &Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", frame)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::from_default_env());
    tracing_subscriber::registry().with(fmt_layer).init();

    let settings_path = std::env::var("LINKVAULT_CONFIG").ok();
    let app = Mutex::new(App::from_config(settings_path)?);

    emit(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    let mut rate_limiter = RateLimiter::new();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                emit(&json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.allow(Instant::now()) {
            tracing::warn!("rate limit exceeded");
            emit(&json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::debug!(method, error = %err, "request failed");
                json!({"id": id, "error": err})
            }
        };
        emit(&response)?;
    }

    Ok(())
}
