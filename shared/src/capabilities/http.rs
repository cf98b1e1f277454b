use serde::{Deserialize, Serialize};
use url::Url;

use crate::content::ApiEnvelope;
use crate::{AppError, ErrorKind};

pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedUrl {
    url: String,
    host: String,
}

impl ValidatedUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, String> {
        let url = url.into();

        if url.trim().is_empty() {
            return Err("URL cannot be empty".to_string());
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(format!("URL exceeds maximum length of {MAX_URL_LENGTH} bytes"));
        }

        let parsed = Url::parse(&url).map_err(|e| e.to_string())?;

        let scheme = parsed.scheme().to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(format!(
                "invalid scheme '{scheme}', only 'http' and 'https' are allowed"
            ));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| "URL must have a host".to_string())?
            .to_lowercase();

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err("credentials in URL are not allowed".to_string());
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            host,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Collapses a content-service response into the envelope's payload.
pub fn unwrap_envelope<T>(
    result: crux_http::Result<crux_http::Response<ApiEnvelope<T>>>,
) -> Result<T, AppError> {
    let mut response = result.map_err(classify_http_error)?;
    response.take_body().map(|envelope| envelope.data).ok_or_else(|| {
        let status: u16 = response.status().into();
        AppError::new(ErrorKind::Deserialization, "Empty response body")
            .with_context("http_status", status.to_string())
    })
}

/// Maps a failed exchange onto the error taxonomy. Non-2xx statuses arrive
/// here as `Error::Http` with the service's body attached.
pub fn classify_http_error(error: crux_http::Error) -> AppError {
    match error {
        crux_http::Error::Http(failure) => {
            AppError::from_http_status(failure.code.into(), failure.body.as_deref())
        }
        crux_http::Error::Json(reason) => {
            AppError::new(ErrorKind::Deserialization, "Malformed response body").with_internal(reason)
        }
        crux_http::Error::Io(reason) => {
            AppError::new(ErrorKind::Network, "Network error").with_internal(reason)
        }
        crux_http::Error::Timeout => AppError::new(ErrorKind::Network, "Request timed out"),
        crux_http::Error::Url(reason) => {
            AppError::new(ErrorKind::Configuration, "Invalid request URL").with_internal(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_and_strips_trailing_slash() {
        let url = ValidatedUrl::new("https://api.alquran.cloud/v1/").unwrap();
        assert_eq!(url.as_str(), "https://api.alquran.cloud/v1");
        assert_eq!(url.host(), "api.alquran.cloud");
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(ValidatedUrl::new("ftp://example.com").is_err());
        assert!(ValidatedUrl::new("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_rejects_credentials_and_blank() {
        assert!(ValidatedUrl::new("https://user:pw@example.com").is_err());
        assert!(ValidatedUrl::new("   ").is_err());
        assert!(ValidatedUrl::new("not a url").is_err());
    }

    #[test]
    fn test_classifies_transport_and_decode_failures() {
        let timeout = classify_http_error(crux_http::Error::Timeout);
        assert_eq!(timeout.kind, ErrorKind::Network);

        let decode = classify_http_error(crux_http::Error::Json("expected value at line 1".into()));
        assert_eq!(decode.kind, ErrorKind::Deserialization);
        assert_eq!(decode.internal_message.as_deref(), Some("expected value at line 1"));

        let url = classify_http_error(crux_http::Error::Url("relative URL without a base".into()));
        assert_eq!(url.kind, ErrorKind::Configuration);
    }
}
