use serde::Deserialize;

/// Client-tunable behavior, read from `initializationOptions` and
/// `workspace/didChangeConfiguration`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub max_number_of_problems: usize,
    pub diagnostics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_number_of_problems: 1000,
            diagnostics: true,
        }
    }
}

impl Settings {
    /// Accepts either `{ "stencil": { ... } }` or the bare settings object.
    /// Anything unreadable falls back to the defaults.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let section = value.get("stencil").unwrap_or(value);
        match serde_json::from_value::<Settings>(section.clone()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!("ignoring malformed settings: {}", e);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_nested_section() {
        let s = Settings::from_json(&json!({ "stencil": { "maxNumberOfProblems": 3 } }));
        assert_eq!(s.max_number_of_problems, 3);
        assert!(s.diagnostics);
    }

    #[test]
    fn reads_root_object() {
        let s = Settings::from_json(&json!({ "diagnostics": false }));
        assert!(!s.diagnostics);
        assert_eq!(s.max_number_of_problems, 1000);
    }

    #[test]
    fn malformed_falls_back_to_defaults() {
        let s = Settings::from_json(&json!({ "maxNumberOfProblems": "many" }));
        assert_eq!(s, Settings::default());
        assert_eq!(Settings::from_json(&serde_json::Value::Null), Settings::default());
    }
}
