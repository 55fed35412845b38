//! POST /ask_air_quality — asks the LLM with retrieved measurement context.

use axum::{Json, extract::State, http::StatusCode};

use answer_gateway::{AskOptions, QaAnswer, answer_with_opts};

use crate::{
    core::app_state::AppState,
    routes::ask::ask_request::{AskRequest, AskResponse, CtxItem},
};

/// Handler: POST /ask_air_quality
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask_air_quality \
///   -H 'content-type: application/json' \
///   -d '{"region":"서울","question":"강남구 공기 어때?","top_k":5}'
/// ```
pub async fn ask_air_quality(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    // Build AskOptions (fallback to env if client omits values)
    let mut opts = AskOptions::default();
    if let Some(k) = body.top_k {
        opts.top_k = k;
    }
    if let Some(k) = body.fetch_k {
        opts.fetch_k = k;
    }

    // Delegate to the gateway (fetch + RAG + LLM)
    let QaAnswer {
        answer,
        top_match,
        context,
    } = answer_with_opts(
        state.llm_profiles.clone(),
        &body.region,
        &body.question,
        opts,
    )
    .await
    .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    // Map to API response DTOs
    let items = context
        .into_iter()
        .map(|u| CtxItem {
            score: u.score,
            text: u.text,
        })
        .collect();

    Ok(Json(AskResponse {
        answer,
        top_match,
        context: items,
    }))
}
