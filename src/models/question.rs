use serde::{Deserialize, Serialize};

/// A single quiz entry: a prompt and its answer.
///
/// Field names match the suite file format exactly (`Q` and `A`), so a
/// question read from disk serializes back to the same object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "Q")]
    pub prompt: String,
    #[serde(rename = "A")]
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_short_field_names() {
        let q = Question::new("2+2?", "4");
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"Q":"2+2?","A":"4"}"#);
    }

    #[test]
    fn ignores_unknown_fields() {
        let q: Question = serde_json::from_str(r#"{"Q":"a","A":"b","hint":"c"}"#).unwrap();
        assert_eq!(q, Question::new("a", "b"));
    }

    #[test]
    fn rejects_missing_answer() {
        assert!(serde_json::from_str::<Question>(r#"{"Q":"a"}"#).is_err());
    }
}
