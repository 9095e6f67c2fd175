//! Chart-widget session snapshot supplied by the caller.

use crate::types::Timeframe;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// One request's view of the embedded chart widget: whatever the client
/// managed to capture before calling us. Everything is optional; an empty
/// session simply routes every timeframe to the synthetic generator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSession {
    /// False until the widget reported its chart as ready.
    #[serde(default)]
    pub ready: bool,
    /// Native export payloads keyed by timeframe.
    #[serde(default)]
    pub exports: HashMap<Timeframe, Value>,
    /// Captured legend text lines keyed by timeframe.
    #[serde(default)]
    pub legend_lines: HashMap<Timeframe, Vec<String>>,
}

impl WidgetSession {
    /// Widget data is only trusted once the chart reported ready.
    pub fn is_available(&self) -> bool {
        self.ready && (!self.exports.is_empty() || !self.legend_lines.is_empty())
    }

    pub fn export(&self, timeframe: Timeframe) -> Option<&Value> {
        if !self.ready {
            return None;
        }
        self.exports.get(&timeframe)
    }

    pub fn legend(&self, timeframe: Timeframe) -> Option<&[String]> {
        if !self.ready {
            return None;
        }
        self.legend_lines.get(&timeframe).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_unavailable() {
        let session = WidgetSession::default();
        assert!(!session.is_available());
        assert!(session.export(Timeframe::FiveMin).is_none());
        assert!(session.legend(Timeframe::FiveMin).is_none());
    }

    #[test]
    fn test_not_ready_hides_captured_data() {
        let mut session = WidgetSession::default();
        session
            .legend_lines
            .insert(Timeframe::OneHour, vec!["O: 1 H: 2 L: 0.5 C: 1.5".to_string()]);

        assert!(session.legend(Timeframe::OneHour).is_none());
        session.ready = true;
        assert!(session.legend(Timeframe::OneHour).is_some());
        assert!(session.is_available());
    }

    #[test]
    fn test_deserialize_with_timeframe_keys() {
        let json = r#"{
            "ready": true,
            "exports": {"5min": {"data": []}},
            "legendLines": {"1h": ["O: 1.1 H: 1.2 L: 1.0 C: 1.15"]}
        }"#;

        let session: WidgetSession = serde_json::from_str(json).unwrap();
        assert!(session.ready);
        assert!(session.export(Timeframe::FiveMin).is_some());
        assert_eq!(session.legend(Timeframe::OneHour).map(|l| l.len()), Some(1));
    }
}
