use super::types::{
    Content, GeminiError, GenerateRequest, GenerateResponse, GenerationConfig, Part, GEMINI_API_URL,
};
use reqwest::Client;

/// Client for interacting with the Gemini API.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client with API key authentication.
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model: "gemini-2.5-flash".to_string(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Set the model to use for generation.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the client at a different API host. Used to target local stub
    /// servers in tests.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Generate content using the Gemini API.
    pub async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        tracing::debug!("Making Gemini API request to: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!("Gemini API error ({}): {}", status, error_text);

            let error_msg = if let Ok(json) = serde_json::from_str::<serde_json::Value>(&error_text)
            {
                if let Some(message) = json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    message.to_string()
                } else {
                    error_text
                }
            } else {
                error_text
            };

            return Err(GeminiError::Api(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_msg
            )));
        }

        Ok(response.json().await?)
    }

    /// Generate JSON output matching a declarative response schema.
    ///
    /// Returns the raw text of the first candidate; the caller parses it
    /// against the shape it declared.
    pub async fn generate_structured(
        &self,
        prompt: &str,
        response_schema: serde_json::Value,
    ) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.3),
                max_output_tokens: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema),
            }),
        };

        let response = self.generate(request).await?;

        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| GeminiError::Parse("No text in response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_client_new() {
        let client = GeminiClient::new("test-api-key".into());
        assert_eq!(client.api_key, "test-api-key");
        assert_eq!(client.model, "gemini-2.5-flash");
        assert_eq!(client.base_url, GEMINI_API_URL);
    }

    #[test]
    fn test_gemini_client_with_model() {
        let client = GeminiClient::new("key".into()).with_model("gemini-1.5-pro");
        assert_eq!(client.model, "gemini-1.5-pro");
    }

    #[test]
    fn test_gemini_client_with_base_url_trims_slash() {
        let client = GeminiClient::new("key".into()).with_base_url("http://127.0.0.1:9999/");
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
    }
}
