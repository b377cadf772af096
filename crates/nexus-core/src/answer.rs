//! Answer templating
//!
//! The service currently answers every query with a fixed template. A real
//! answering backend (retrieval, generation) would replace this function;
//! until then the template is the entire contract: the response text is the
//! literal prefix `"You asked: "` followed by the query, unmodified.

/// Render the answer for a query.
///
/// The query is embedded verbatim: no trimming, no escaping, no length cap.
/// An empty query yields `"You asked: "`.
pub fn render_answer(query: &str) -> String {
    format!("You asked: {query}")
}
