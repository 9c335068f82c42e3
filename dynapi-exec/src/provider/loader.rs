use crate::provider::ProviderError;

/// Reads the spec document text from a file path or an `http(s)` URL.
pub(crate) async fn load_document(
    client: &reqwest::Client,
    location: &str,
) -> Result<String, ProviderError> {
    let fail = |message: String| ProviderError::Load {
        location: location.to_string(),
        message,
    };

    if location.starts_with("http://") || location.starts_with("https://") {
        let resp = client
            .get(location)
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP {status}")));
        }
        resp.text().await.map_err(|e| fail(e.to_string()))
    } else {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| fail(format!("read file: {e}")))
    }
}
