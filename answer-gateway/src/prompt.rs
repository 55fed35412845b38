//! Prompt builder: fixed severity-threshold instructions + context block.
//!
//! The threshold table and the Korean grade labels are an observable
//! contract of the system; they are reproduced verbatim and never derived
//! from data.

use rag_index::IndexHit;

/// Grounding instructions with the fixed classification thresholds.
///
/// The generator is told to answer strictly from the supplied context; it
/// must not fabricate measurements outside it.
pub const SEVERITY_TEMPLATE: &str = r#"당신은 대기질을 안내하는 챗봇입니다.
사용자에게 가능한 많은 정보를 친절하게 제공하십시오.
다음의 기준으로, 공기가 좋음, 보통, 나쁨, 매우 나쁨을 판별해주세요.

PM10 (미세먼지 농도)
    좋음: 0 ~ 30
    보통: 31 ~ 80
    나쁨: 81 ~ 150
    매우 나쁨: 151 이상
PM2.5 (초미세먼지 농도)
    좋음: 0 ~ 15
    보통: 16 ~ 35
    나쁨: 36 ~ 75
    매우 나쁨: 76 이상

Answer the question based only on the following context:
"#;

/// Builds the final prompt: instructions, retrieved context, question.
///
/// With zero hits the context block is empty but the prompt stays
/// well-formed; generation still runs on zero-context queries.
pub fn build_prompt(question: &str, hits: &[IndexHit]) -> String {
    let mut out = String::with_capacity(SEVERITY_TEMPLATE.len() + 256);
    out.push_str(SEVERITY_TEMPLATE);

    for h in hits {
        out.push_str(&h.text);
        out.push('\n');
    }

    out.push_str("\nQuestion: ");
    out.push_str(question.trim());
    out.push('\n');
    out
}

/// Classifies a PM10 concentration against the fixed table.
pub fn classify_pm10(value: f32) -> &'static str {
    if value <= 30.0 {
        "좋음"
    } else if value <= 80.0 {
        "보통"
    } else if value <= 150.0 {
        "나쁨"
    } else {
        "매우 나쁨"
    }
}

/// Classifies a PM2.5 concentration against the fixed table.
pub fn classify_pm25(value: f32) -> &'static str {
    if value <= 15.0 {
        "좋음"
    } else if value <= 35.0 {
        "보통"
    } else if value <= 75.0 {
        "나쁨"
    } else {
        "매우 나쁨"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_thresholds_and_question() {
        let hits = vec![IndexHit {
            score: 0.9,
            text: "측정소명: 강남구, 미세먼지농도: 45".into(),
        }];
        let p = build_prompt("강남구 공기 어때?", &hits);
        assert!(p.contains("좋음: 0 ~ 30"));
        assert!(p.contains("매우 나쁨: 151 이상"));
        assert!(p.contains("좋음: 0 ~ 15"));
        assert!(p.contains("측정소명: 강남구"));
        assert!(p.contains("Question: 강남구 공기 어때?"));
    }

    #[test]
    fn prompt_well_formed_with_empty_context() {
        let p = build_prompt("질문", &[]);
        assert!(p.starts_with(SEVERITY_TEMPLATE));
        assert!(p.contains("Question: 질문"));
    }

    #[test]
    fn pm10_classification_matches_table() {
        assert_eq!(classify_pm10(0.0), "좋음");
        assert_eq!(classify_pm10(30.0), "좋음");
        assert_eq!(classify_pm10(31.0), "보통");
        assert_eq!(classify_pm10(45.0), "보통");
        assert_eq!(classify_pm10(80.0), "보통");
        assert_eq!(classify_pm10(81.0), "나쁨");
        assert_eq!(classify_pm10(150.0), "나쁨");
        assert_eq!(classify_pm10(200.0), "매우 나쁨");
    }

    #[test]
    fn pm25_classification_matches_table() {
        assert_eq!(classify_pm25(15.0), "좋음");
        assert_eq!(classify_pm25(16.0), "보통");
        assert_eq!(classify_pm25(35.0), "보통");
        assert_eq!(classify_pm25(75.0), "나쁨");
        assert_eq!(classify_pm25(76.0), "매우 나쁨");
    }
}
