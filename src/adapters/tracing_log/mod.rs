// Tracing log adapter - Structured logging using tracing crate

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_FILTER_ENV: &str = "SHRINKX_LOG";

/// Environment variable selecting the output format (`json` or text)
pub const LOG_FORMAT_ENV: &str = "SHRINKX_LOG_FORMAT";

/// Filter used when neither `SHRINKX_LOG` nor `RUST_LOG` is set
const DEFAULT_FILTER: &str = "warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Pick filter directives: `SHRINKX_LOG`, then `RUST_LOG`, then the default
fn filter_directives(shrinkx: Option<String>, rust_log: Option<String>) -> String {
    shrinkx
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Initialize the global subscriber. Logs go to stderr so they never mix
/// with the interactive screens on stdout. Safe to call more than once.
pub fn init_logging() {
    let directives = filter_directives(
        std::env::var(LOG_FILTER_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref()) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directives(Some("debug".into()), Some("trace".into())), "debug");
        assert_eq!(filter_directives(None, Some("trace".into())), "trace");
        assert_eq!(filter_directives(Some(" ".into()), None), "warn");
        assert_eq!(filter_directives(None, None), "warn");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Text);
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
    }
}
