/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - request mode and endpoint selection
[UPDATE]: When the server adds strategies or endpoints
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-side strategy selector sent as the `mode` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    Heuristic,
    Llm,
    #[default]
    Hybrid,
}

impl RequestMode {
    pub const ALL: [RequestMode; 3] = [RequestMode::Heuristic, RequestMode::Llm, RequestMode::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestMode::Heuristic => "heuristic",
            RequestMode::Llm => "llm",
            RequestMode::Hybrid => "hybrid",
        }
    }

    /// Next mode in display order, wrapping around.
    pub fn cycle(self) -> Self {
        let index = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                let expected = Self::ALL.map(RequestMode::as_str).join(", ");
                format!("unknown mode '{wanted}', expected one of {expected}")
            })
    }
}

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Suggest,
    Automate,
}

impl RequestKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            RequestKind::Suggest => "suggest",
            RequestKind::Automate => "auto",
        }
    }

    /// Response field that carries the text answer for this endpoint.
    pub fn response_field(self) -> &'static str {
        match self {
            RequestKind::Suggest => "suggestion",
            RequestKind::Automate => "result",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestKind::Suggest => "Suggest",
            RequestKind::Automate => "Automate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("heuristic", RequestMode::Heuristic)]
    #[case("LLM", RequestMode::Llm)]
    #[case(" hybrid ", RequestMode::Hybrid)]
    fn test_mode_parse(#[case] raw: &str, #[case] expected: RequestMode) {
        assert_eq!(raw.parse::<RequestMode>(), Ok(expected));
    }

    #[test]
    fn test_mode_parse_rejects_unknown() {
        let err = "fast".parse::<RequestMode>().unwrap_err();
        assert!(err.contains("fast"));
        assert!(err.contains("heuristic, llm, hybrid"));
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_string(&RequestMode::Llm).unwrap();
        assert_eq!(json, "\"llm\"");
    }

    #[test]
    fn test_mode_cycle_visits_all() {
        let mut mode = RequestMode::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.cycle();
            seen.push(mode);
        }
        assert_eq!(seen, vec![RequestMode::Heuristic, RequestMode::Llm, RequestMode::Hybrid]);
    }

    #[test]
    fn test_kind_paths() {
        assert_eq!(RequestKind::Suggest.endpoint(), "suggest");
        assert_eq!(RequestKind::Automate.endpoint(), "auto");
        assert_eq!(RequestKind::Automate.response_field(), "result");
    }
}
