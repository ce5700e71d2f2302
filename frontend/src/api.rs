use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{AnalysisResult, InferenceError};
use wasm_bindgen::JsValue;

const ANALYZE_URL: &str = "/api/analyze";

/// Posts the picked file to the backend, which forwards it to the inference service.
pub async fn analyze(file: GlooFile) -> Result<AnalysisResult, InferenceError> {
    let form_data = web_sys::FormData::new().map_err(js_transport)?;
    form_data
        .append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(js_transport)?;

    let request = Request::post(ANALYZE_URL)
        .body(form_data)
        .map_err(|e| transport(e.to_string()))?;

    let response = request.send().await.map_err(|e| transport(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| transport(e.to_string()))?;

    if response.ok() {
        AnalysisResult::from_json(&body)
    } else {
        log::warn!("Analysis failed with HTTP {}", status);
        Err(serde_json::from_str::<InferenceError>(&body)
            .unwrap_or(InferenceError::Http { status, detail: None }))
    }
}

fn transport(reason: String) -> InferenceError {
    InferenceError::Transport { reason }
}

fn js_transport(err: JsValue) -> InferenceError {
    transport(format!("{:?}", err))
}
