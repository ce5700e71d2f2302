//! In-process stand-in for the remote `/predict` endpoint.

use actix_multipart::Multipart;
use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use futures::TryStreamExt;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub field_names: Vec<String>,
    pub file_content_type: Option<String>,
    pub file_len: usize,
}

pub struct MockEndpoint {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockEndpoint {
    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct Reply {
    status: u16,
    body: &'static str,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn predict(req: HttpRequest, mut payload: Multipart, reply: web::Data<Reply>) -> HttpResponse {
    let mut captured = CapturedRequest {
        authorization: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        ..Default::default()
    };

    while let Ok(Some(mut field)) = payload.try_next().await {
        let name = field.name().unwrap_or_default().to_owned();
        let is_file = name == "file";
        if is_file {
            captured.file_content_type = field.content_type().map(|m| m.to_string());
        }
        while let Ok(Some(chunk)) = field.try_next().await {
            if is_file {
                captured.file_len += chunk.len();
            }
        }
        captured.field_names.push(name);
    }

    reply.captured.lock().unwrap().push(captured);
    HttpResponse::build(StatusCode::from_u16(reply.status).unwrap())
        .content_type("application/json")
        .body(reply.body)
}

/// Serves `POST /predict` on an ephemeral port, answering every call with
/// `status` and `body`.
pub async fn spawn_predict_mock(status: u16, body: &'static str) -> MockEndpoint {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let reply = Reply {
        status,
        body,
        captured: captured.clone(),
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(reply.clone()))
            .route("/predict", web::post().to(predict))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    MockEndpoint {
        base_url: format!("http://{}", addr),
        captured,
    }
}

/// A base URL nothing listens on.
pub fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn set_token(var: &str, value: &str) {
    // SAFETY: `set_var` races with any concurrent environment read, not just reads of
    // this name. std serialises its own env access, and the mocks are reached through
    // IP-literal URLs, so no resolver calls `getenv` while tests run.
    unsafe { std::env::set_var(var, value) };
}

pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
    bytes.extend_from_slice(&[0; 8]);
    bytes
}

pub fn jpeg_bytes() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    bytes.extend_from_slice(&[0; 8]);
    bytes
}

/// Single-part `multipart/form-data` body. Returns the content type header and the body.
pub fn multipart_body(
    field: &str,
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> (String, Vec<u8>) {
    let boundary = "banana-test-boundary";
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
