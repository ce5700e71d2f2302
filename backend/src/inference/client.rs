use crate::config::{ConfigError, InferenceConfig};
use reqwest::multipart::{Form, Part};
use shared::{AnalysisResult, ErrorDetail, InferenceError, UploadedImage};
use std::env;
use std::time::Duration;
use url::Url;

/// Talks to the remote `/predict` endpoint. One attempt per call, no caching.
#[derive(Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    predict_url: Url,
    token_var: String,
}

impl InferenceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, ConfigError> {
        let predict_url = predict_url(config.parsed_base_url()?, &config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            predict_url,
            token_var: config.token_var.clone(),
        })
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    pub fn token_var(&self) -> &str {
        &self.token_var
    }

    pub fn has_credential(&self) -> bool {
        self.bearer_token().is_ok()
    }

    // Read on every call so a rotated token is picked up without a restart.
    fn bearer_token(&self) -> Result<String, InferenceError> {
        match env::var(&self.token_var) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(InferenceError::Configuration {
                reason: format!("{} is not set", self.token_var),
            }),
        }
    }

    pub async fn analyze(&self, image: UploadedImage) -> Result<AnalysisResult, InferenceError> {
        let token = self.bearer_token()?;

        let file_name = image.file_name();
        let mime = image.mime.as_str();
        let size = image.bytes.len();
        let part = Part::bytes(image.bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(transport)?;
        let form = Form::new().part("file", part);

        log::debug!("POST {} ({} bytes, {})", self.predict_url, size, mime);

        let response = self
            .http
            .post(self.predict_url.clone())
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if status != reqwest::StatusCode::OK {
            let detail = ErrorDetail::extract(&body);
            log::warn!(
                "Inference endpoint answered {} (detail: {})",
                status,
                detail.as_deref().unwrap_or("-")
            );
            return Err(InferenceError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        AnalysisResult::from_json(&body)
    }
}

fn transport(err: reqwest::Error) -> InferenceError {
    let reason = if err.is_timeout() {
        "the inference service timed out".to_string()
    } else if err.is_connect() {
        "could not connect to the inference service".to_string()
    } else {
        err.without_url().to_string()
    };
    InferenceError::Transport { reason }
}

fn predict_url(mut base: Url, raw: &str) -> Result<Url, ConfigError> {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("predict")
        .map_err(|source| ConfigError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
}
