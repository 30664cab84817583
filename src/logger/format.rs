//! Access log rendering
//!
//! One entry per request, rendered as `combined` (Apache/Nginx style),
//! `common` (CLF), or `json`.

use chrono::Local;
use std::str::FromStr;

/// Access log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Combined,
    Common,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "combined" => Ok(Self::Combined),
            "common" => Ok(Self::Common),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown access log format: {other}")),
        }
    }
}

/// Everything one access log line needs about a request/response pair
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    pub status: u16,
    /// Response body size as reported by Content-Length
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Handling time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// New entry stamped with the current local time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Render the entry in the given format
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Combined => self.render_combined(),
            LogFormat::Common => self.render_common(),
            LogFormat::Json => self.render_json(),
        }
    }

    fn request_line(&self) -> String {
        let query = self
            .query
            .as_ref()
            .map(|q| format!("?{q}"))
            .unwrap_or_default();
        format!("{} {}{} HTTP/1.1", self.method, self.path, query)
    }

    /// Apache/Nginx combined format: CLF plus referer and user agent
    fn render_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// Common Log Format: `host - - [time] "request" status bytes`
    fn render_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// JSON structured log format
    fn render_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "203.0.113.7".to_string(),
            "GET".to_string(),
            "/api/get-token".to_string(),
        );
        entry.query = Some("source=widget".to_string());
        entry.status = 200;
        entry.body_bytes = 128;
        entry.referer = Some("http://localhost:3000/".to_string());
        entry.user_agent = Some("curl/8.5.0".to_string());
        entry.request_time_us = 1500;
        entry
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("combined".parse::<LogFormat>().unwrap(), LogFormat::Combined);
        assert_eq!("common".parse::<LogFormat>().unwrap(), LogFormat::Common);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("nginx".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_render_combined() {
        let entry = create_test_entry();
        let log = entry.render(LogFormat::Combined);
        assert!(log.contains("203.0.113.7"));
        assert!(log.contains("GET /api/get-token?source=widget HTTP/1.1"));
        assert!(log.contains("200 128"));
        assert!(log.contains("http://localhost:3000/"));
        assert!(log.contains("curl/8.5.0"));
    }

    #[test]
    fn test_render_common() {
        let entry = create_test_entry();
        let log = entry.render(LogFormat::Common);
        assert!(log.contains("203.0.113.7"));
        assert!(log.contains("GET /api/get-token?source=widget HTTP/1.1"));
        assert!(log.contains("200 128"));
        // Common format does not include referer/user-agent
        assert!(!log.contains("curl/8.5.0"));
    }

    #[test]
    fn test_render_json() {
        let entry = create_test_entry();
        let log = entry.render(LogFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(parsed["remote_addr"], "203.0.113.7");
        assert_eq!(parsed["method"], "GET");
        assert_eq!(parsed["status"], 200);
        assert_eq!(parsed["body_bytes"], 128);
        assert_eq!(parsed["request_time_us"], 1500);
    }
}
