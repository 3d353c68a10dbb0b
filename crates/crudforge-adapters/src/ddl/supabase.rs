//! Supabase DDL executor.
//!
//! Submits SQL through the `exec_sql` database function exposed by
//! PostgREST. The function must exist in the target project:
//!
//! ```sql
//! create or replace function exec_sql(query text) returns void
//! language plpgsql security definer as $$ begin execute query; end $$;
//! ```

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crudforge_core::{
    application::{ApplicationError, ports::DdlExecutor},
    error::ForgeResult,
};

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_VAR: &str = "SUPABASE_KEY";

const RPC_PATH: &str = "rest/v1/rpc/exec_sql";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
struct Credentials {
    url: String,
    key: String,
}

#[derive(Serialize)]
struct ExecSqlRequest<'a> {
    query: &'a str,
}

/// DDL executor backed by the Supabase REST API.
///
/// Built without credentials it reports `DdlUnavailable` on every call.
#[derive(Debug, Clone)]
pub struct SupabaseDdlExecutor {
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl SupabaseDdlExecutor {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials {
                url: url.into(),
                key: key.into(),
            }),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Executor with no connection configured.
    pub fn unconfigured() -> Self {
        Self {
            credentials: None,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read `SUPABASE_URL` / `SUPABASE_KEY`. Blank values count as missing.
    pub fn from_env() -> Self {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        match (read(SUPABASE_URL_VAR), read(SUPABASE_KEY_VAR)) {
            (Some(url), Some(key)) => Self::new(url, key),
            _ => Self::unconfigured(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn endpoint(url: &str) -> String {
        format!("{}/{}", url.trim_end_matches('/'), RPC_PATH)
    }
}

impl DdlExecutor for SupabaseDdlExecutor {
    #[instrument(skip_all, fields(bytes = sql.len()))]
    fn execute(&self, sql: &str) -> ForgeResult<()> {
        let Some(credentials) = &self.credentials else {
            return Err(ApplicationError::DdlUnavailable {
                reason: format!("{SUPABASE_URL_VAR} and {SUPABASE_KEY_VAR} must both be set"),
            }
            .into());
        };

        let endpoint = Self::endpoint(&credentials.url);
        debug!(%endpoint, "Submitting DDL");

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApplicationError::DdlFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let response = client
            .post(&endpoint)
            .header("apikey", &credentials.key)
            .bearer_auth(&credentials.key)
            .json(&ExecSqlRequest { query: sql })
            .send()
            .map_err(|e| ApplicationError::DdlFailed {
                reason: format!("request to {endpoint} failed: {e}"),
            })?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "DDL executed");
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(ApplicationError::DdlFailed {
            reason: format!("{status}: {}", backend_message(&body)),
        }
        .into())
    }
}

/// PostgREST errors carry a `message` field; fall back to the raw body.
fn backend_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudforge_core::error::ForgeError;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve exactly one response and hand back the raw request.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
                request.push_str(&line);
                if line == "\r\n" {
                    break;
                }
            }
            let mut body_buf = vec![0; content_length];
            reader.read_exact(&mut body_buf).unwrap();
            request.push_str(&String::from_utf8(body_buf).unwrap());

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            tx.send(request).unwrap();
        });

        (url, rx)
    }

    #[test]
    fn unconfigured_executor_is_unavailable() {
        let err = SupabaseDdlExecutor::unconfigured()
            .execute("select 1")
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::DdlUnavailable { .. })
        ));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            SupabaseDdlExecutor::endpoint("https://x.supabase.co/"),
            "https://x.supabase.co/rest/v1/rpc/exec_sql"
        );
    }

    #[test]
    fn posts_query_with_auth_headers() {
        let (url, rx) = serve_once("200 OK", "");
        SupabaseDdlExecutor::new(url, "secret-key")
            .execute("CREATE TABLE t ();")
            .unwrap();

        let request = rx.recv().unwrap();
        assert!(request.starts_with("POST /rest/v1/rpc/exec_sql "));
        let lower = request.to_ascii_lowercase();
        assert!(lower.contains("apikey: secret-key"));
        assert!(lower.contains("authorization: bearer secret-key"));
        assert!(request.ends_with(r#"{"query":"CREATE TABLE t ();"}"#));
    }

    #[test]
    fn rejected_sql_surfaces_backend_message() {
        let (url, _rx) = serve_once(
            "400 Bad Request",
            r#"{"code":"42601","message":"syntax error at or near \"TABLE\""}"#,
        );
        let err = SupabaseDdlExecutor::new(url, "k").execute("TABLE").unwrap_err();

        match err {
            ForgeError::Application(ApplicationError::DdlFailed { reason }) => {
                assert!(reason.starts_with("400"));
                assert!(reason.contains("syntax error at or near"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn backend_message_falls_back_to_raw_body() {
        assert_eq!(backend_message("  gateway timeout \n"), "gateway timeout");
        assert_eq!(backend_message(r#"{"message":"nope"}"#), "nope");
    }
}
