//! Query handler
//!
//! The single functional endpoint of the service. Answers are produced by
//! the template in nexus-core; a retrieval backend would be wired in here
//! once one exists.

use crate::error::AppError;
use axum::{extract::rejection::JsonRejection, Json};
use nexus_core::render_answer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    /// The question to answer. A missing field is treated as an empty query.
    #[serde(default)]
    #[schema(example = "What is the leave policy?")]
    pub query: String,
}

/// Query response body
#[derive(Debug, Serialize, ToSchema)]
pub struct QueryResponse {
    /// Templated answer echoing the query
    #[schema(example = "You asked: What is the leave policy?")]
    pub answer: String,
}

/// Handle query requests
///
/// The extractor result is taken as a `Result` so parse failures map to the
/// explicit 400/422 contract instead of axum's default rejection bodies.
#[utoipa::path(
    post,
    path = "/query",
    tag = "query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Query answered", body = QueryResponse),
        (status = 400, description = "Request body is not valid JSON", body = crate::error::ApiError),
        (status = 422, description = "Request body does not match the schema", body = crate::error::ApiError)
    )
)]
pub async fn query_handler(
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Json(request) = payload?;

    tracing::debug!(query_len = request.query.len(), "answering query");

    Ok(Json(QueryResponse {
        answer: render_answer(&request.query),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_query_field_defaults_to_empty() {
        let request: QueryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.query, "");
    }

    #[test]
    fn non_string_query_is_rejected_by_schema() {
        assert!(serde_json::from_str::<QueryRequest>(r#"{"query": 42}"#).is_err());
    }

    #[test]
    fn response_serializes_to_single_key() {
        let response = QueryResponse {
            answer: render_answer("hi"),
        };
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["answer"], "You asked: hi");
    }
}
