use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::interface::{TranslateError, TranslateInterface, TranslationResult, ENGINE_SOURCE};

/// Client for the public MyMemory translation API.
///
/// In production this would be swapped for a Google Cloud or Azure backend
/// behind the same [`TranslateInterface`].
#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryTranslator {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl TranslateInterface for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, TranslateError> {
        // Source language is fixed to English.
        let langpair = format!("en|{}", target_lang);
        debug!("Requesting translation: langpair={}", langpair);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::UpstreamStatus(status.as_u16()));
        }

        let payload: MyMemoryResponse = response
            .json()
            .await
            .map_err(|_| TranslateError::MalformedPayload)?;

        let translated_text = payload
            .response_data
            .and_then(|data| data.translated_text)
            .ok_or(TranslateError::MalformedPayload)?;

        Ok(TranslationResult {
            translated_text,
            source: ENGINE_SOURCE.to_string(),
        })
    }
}
