//! Shared helpers used by the binary and the HTTP crate.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health::ok();
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn log_format_parses_known_values() {
        use utils::logging::LogFormat;
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything-else"), LogFormat::Compact);
    }
}
