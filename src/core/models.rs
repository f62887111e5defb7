use super::errors::ReviewError;
use serde::Deserialize;
use serde_json::Value;

/// One post object from a WordPress JSON export.
///
/// Every field is optional and kept as raw JSON: exports in the wild carry
/// nulls, numbers and stray shapes where strings are expected. A field of
/// the wrong type is treated as missing, so one malformed post never aborts
/// the batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "ID", default)]
    pub id: Option<Value>,

    #[serde(rename = "post_title", default)]
    pub title: Option<Value>,

    #[serde(rename = "post_name", default)]
    pub slug: Option<Value>,

    #[serde(rename = "post_content", default)]
    pub content: Option<Value>,

    #[serde(rename = "post_excerpt", default)]
    pub excerpt: Option<Value>,

    #[serde(default)]
    pub featured_image: Option<Value>,

    #[serde(default)]
    pub permalink: Option<Value>,

    #[serde(default)]
    pub meta: Option<Value>,
}

/// Decode a batch of posts from JSON text (the upload body / input file).
pub fn parse_posts(raw: &str) -> Result<Vec<PostRecord>, ReviewError> {
    Ok(serde_json::from_str(raw)?)
}

impl PostRecord {
    pub fn title(&self) -> &str {
        text_or_empty(&self.title)
    }

    pub fn slug(&self) -> &str {
        text_or_empty(&self.slug)
    }

    pub fn content(&self) -> &str {
        text_or_empty(&self.content)
    }

    pub fn excerpt(&self) -> &str {
        text_or_empty(&self.excerpt)
    }

    pub fn permalink(&self) -> &str {
        text_or_empty(&self.permalink)
    }

    /// Display label for the post id: strings render bare, other scalars as
    /// their JSON text, absent/null ids as "-".
    pub fn id_label(&self) -> String {
        match &self.id {
            None | Some(Value::Null) => "-".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn has_featured_image(&self) -> bool {
        self.featured_image.as_ref().is_some_and(is_present)
    }

    /// Whether `meta` carries a present value for `key`. A `meta` that is
    /// not a JSON object counts as empty.
    pub fn has_meta(&self, key: &str) -> bool {
        self.meta
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|m| m.get(key))
            .is_some_and(is_present)
    }
}

fn text_or_empty(value: &Option<Value>) -> &str {
    value.as_ref().and_then(Value::as_str).unwrap_or("")
}

/// Presence predicate for optional JSON values.
///
/// Present: non-empty string, number other than 0, `true`, non-empty array,
/// non-empty object. Missing: `null`, `""`, `0`, `0.0`, `false`, `[]`, `{}`.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Validation failures attached to one post, in check order.
#[derive(Debug, Clone)]
pub struct IssueEntry {
    pub id: String,
    pub title: String,
    pub permalink: String,
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_predicate() {
        assert!(is_present(&json!("x")));
        assert!(is_present(&json!(1)));
        assert!(is_present(&json!(-0.5)));
        assert!(is_present(&json!(true)));
        assert!(is_present(&json!(["a"])));
        assert!(is_present(&json!({"a": 1})));

        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(0.0)));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!({})));
    }

    #[test]
    fn test_wrong_types_coerce_to_missing() {
        let post: PostRecord = serde_json::from_value(json!({
            "ID": 7,
            "post_title": 123,
            "post_name": null,
            "meta": "not-a-map",
            "featured_image": 0
        }))
        .unwrap();

        assert_eq!(post.title(), "");
        assert_eq!(post.slug(), "");
        assert!(!post.has_featured_image());
        assert!(!post.has_meta("seo_title"));
        assert_eq!(post.id_label(), "7");
    }

    #[test]
    fn test_id_label_shapes() {
        let post: PostRecord = serde_json::from_value(json!({"ID": "abc-1"})).unwrap();
        assert_eq!(post.id_label(), "abc-1");

        let post: PostRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(post.id_label(), "-");

        let post: PostRecord = serde_json::from_value(json!({"ID": null})).unwrap();
        assert_eq!(post.id_label(), "-");
    }

    #[test]
    fn test_parse_posts_rejects_non_array() {
        assert!(parse_posts("{\"ID\": 1}").is_err());
        assert!(parse_posts("[]").unwrap().is_empty());
    }
}
