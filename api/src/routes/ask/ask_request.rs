use serde::{Deserialize, Serialize};

/// Request payload for /ask_air_quality.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Region to fetch measurements for (e.g., `서울`).
    pub region: String,
    /// Natural language question (e.g., `강남구 공기 어때?`).
    pub question: String,
    /// Optional override: number of fragments fed to the prompt.
    #[serde(default)]
    pub top_k: Option<usize>,
    /// Optional override: candidate pool size for retrieval.
    #[serde(default)]
    pub fetch_k: Option<usize>,
}

/// Response payload for /ask_air_quality.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Final model answer (plain text).
    pub answer: String,
    /// Raw text of the best-matching fragment, if any.
    pub top_match: Option<String>,
    /// Minimal transparency on what context was used.
    pub context: Vec<CtxItem>,
}

/// Small context fragment descriptor.
#[derive(Debug, Serialize)]
pub struct CtxItem {
    pub score: f32,
    /// The fragment text that was given to the model.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_overrides_are_optional() {
        let req: AskRequest =
            serde_json::from_str(r#"{"region":"서울","question":"강남구 공기 어때?"}"#).unwrap();
        assert_eq!(req.region, "서울");
        assert_eq!(req.top_k, None);
        assert_eq!(req.fetch_k, None);

        let req: AskRequest = serde_json::from_str(
            r#"{"region":"서울","question":"q","top_k":3,"fetch_k":50}"#,
        )
        .unwrap();
        assert_eq!(req.top_k, Some(3));
        assert_eq!(req.fetch_k, Some(50));
    }

    #[test]
    fn response_serializes_optional_top_match() {
        let resp = AskResponse {
            answer: "보통입니다".into(),
            top_match: None,
            context: vec![],
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["answer"], "보통입니다");
        assert!(v["top_match"].is_null());
    }
}
