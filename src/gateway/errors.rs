use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Resource not found")]
    NotFound,

    #[error("Not authorized by the remote service")]
    Unauthorized,

    #[error("Remote service returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Maps a non-success status and its body to an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => GatewayError::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized,
            _ => {
                let mut message = body.trim().to_string();
                if message.len() > 200 {
                    let mut cut = 200;
                    while !message.is_char_boundary(cut) {
                        cut -= 1;
                    }
                    message.truncate(cut);
                }
                GatewayError::Http {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            GatewayError::from_status(status, err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            GatewayError::from_status(StatusCode::NOT_FOUND, String::new()),
            GatewayError::NotFound
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::FORBIDDEN, String::new()),
            GatewayError::Unauthorized
        ));
        match GatewayError::from_status(StatusCode::BAD_GATEWAY, "é".repeat(150)) {
            GatewayError::Http { status, message } => {
                assert_eq!(status, 502);
                assert!(message.len() <= 200);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
