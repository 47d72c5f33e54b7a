use axum::response::Html;

/// GET /
/// The single-page UI: diet form plus dashboard, talking to the Analysis API.
/// Embedded at compile time — the service ships as one binary.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_page_carries_form_and_results_section() {
        let Html(page) = index_handler().await;
        assert!(page.contains("id=\"diet-form\""));
        assert!(page.contains("id=\"results-section\""));
        assert!(page.contains("/api/v1/analysis"));
    }
}
