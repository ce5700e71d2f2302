use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::InferenceError;

/// Failure of an `/api/analyze` request. Always answered with an
/// [`InferenceError`] body so the browser only has one shape to decode.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error("uploads are limited to {limit} bytes")]
    TooLarge { limit: usize },
    #[error("multipart field `file` is missing")]
    MissingFile,
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
}

impl ApiError {
    fn body(&self) -> InferenceError {
        match self {
            ApiError::Inference(err) => err.clone(),
            other => InferenceError::UploadRejected {
                reason: other.to_string(),
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Inference(InferenceError::UploadRejected { .. }) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ApiError::Inference(InferenceError::Configuration { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Inference(
                InferenceError::Transport { .. }
                | InferenceError::Http { .. }
                | InferenceError::Parse { .. },
            ) => StatusCode::BAD_GATEWAY,
            ApiError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingFile | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (
                ApiError::from(InferenceError::UploadRejected { reason: "gif".into() }),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                ApiError::from(InferenceError::Configuration { reason: "unset".into() }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(InferenceError::Transport { reason: "refused".into() }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::from(InferenceError::Http { status: 400, detail: None }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::from(InferenceError::Parse { reason: "eof".into() }),
                StatusCode::BAD_GATEWAY,
            ),
            (ApiError::TooLarge { limit: 10 }, StatusCode::PAYLOAD_TOO_LARGE),
            (ApiError::MissingFile, StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{}", err);
        }
    }

    #[test]
    fn upload_problems_become_upload_rejected() {
        assert_eq!(
            ApiError::TooLarge { limit: 10 }.body(),
            InferenceError::UploadRejected {
                reason: "uploads are limited to 10 bytes".into()
            }
        );
        assert_eq!(
            ApiError::MissingFile.body(),
            InferenceError::UploadRejected {
                reason: "multipart field `file` is missing".into()
            }
        );
    }
}
