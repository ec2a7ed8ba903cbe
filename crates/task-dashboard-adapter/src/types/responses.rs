/*
[INPUT]:  Parsed JSON bodies from /suggest and /auto
[OUTPUT]: ApiOutcome tagged union with display text
[POS]:    Data layer - response interpretation
[UPDATE]: When the server changes its response shape
*/

use serde_json::Value;

use super::enums::RequestKind;

/// Answer returned by the remote service.
///
/// The service normally answers with a single named string field. Anything
/// else is kept whole so it can be shown as pretty-printed JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Text(String),
    Raw(Value),
}

impl ApiOutcome {
    /// Prefer `field` when it is a non-empty string, else keep the whole payload.
    pub fn from_payload(payload: Value, field: &str) -> Self {
        let text = payload
            .as_object()
            .and_then(|object| object.get(field))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        match text {
            Some(text) => ApiOutcome::Text(text),
            None => ApiOutcome::Raw(payload),
        }
    }

    pub fn for_kind(payload: Value, kind: RequestKind) -> Self {
        Self::from_payload(payload, kind.response_field())
    }

    /// Text shown to the user, copied, and exported.
    pub fn display_text(&self) -> String {
        match self {
            ApiOutcome::Text(text) => text.clone(),
            ApiOutcome::Raw(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ApiOutcome::Raw(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_field_wins() {
        let outcome = ApiOutcome::from_payload(json!({"suggestion": "Do X first"}), "suggestion");
        assert_eq!(outcome, ApiOutcome::Text("Do X first".to_string()));
        assert_eq!(outcome.display_text(), "Do X first");
    }

    #[test]
    fn test_missing_field_keeps_payload() {
        let payload = json!({"foo": "bar"});
        let outcome = ApiOutcome::from_payload(payload.clone(), "suggestion");
        assert!(outcome.is_raw());
        assert_eq!(
            outcome.display_text(),
            serde_json::to_string_pretty(&payload).unwrap()
        );
    }

    #[test]
    fn test_empty_or_non_string_field_falls_back() {
        let empty = ApiOutcome::from_payload(json!({"result": ""}), "result");
        assert!(empty.is_raw());

        let nested = ApiOutcome::from_payload(json!({"result": {"steps": [1, 2]}}), "result");
        assert!(nested.is_raw());
    }

    #[test]
    fn test_non_object_payload_is_raw() {
        let outcome = ApiOutcome::for_kind(json!(["a", "b"]), RequestKind::Automate);
        assert_eq!(outcome.display_text(), "[\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn test_kind_selects_field() {
        let payload = json!({"suggestion": "s", "result": "r"});
        assert_eq!(
            ApiOutcome::for_kind(payload.clone(), RequestKind::Suggest).display_text(),
            "s"
        );
        assert_eq!(
            ApiOutcome::for_kind(payload, RequestKind::Automate).display_text(),
            "r"
        );
    }
}
