//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;
use tasktime_domain::TaskTimeError;

/// Infrastructure failure already mapped to the domain error.
///
/// Keeps whether the transport gave up on a timeout, which the domain error
/// does not distinguish from other network failures.
#[derive(Debug)]
pub struct InfraError {
    error: TaskTimeError,
    timed_out: bool,
}

impl InfraError {
    pub fn new(error: TaskTimeError) -> Self {
        Self { error, timed_out: false }
    }

    /// The request ran past its deadline
    pub fn is_timeout(&self) -> bool {
        self.timed_out
    }

    pub fn into_inner(self) -> TaskTimeError {
        self.error
    }
}

impl From<InfraError> for TaskTimeError {
    fn from(value: InfraError) -> Self {
        value.error
    }
}

impl From<TaskTimeError> for InfraError {
    fn from(value: TaskTimeError) -> Self {
        InfraError::new(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTaskTimeError {
    fn into_tasktime(self) -> TaskTimeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TaskTimeError */
/* -------------------------------------------------------------------------- */

impl IntoTaskTimeError for HttpError {
    fn into_tasktime(self) -> TaskTimeError {
        if self.is_timeout() {
            return TaskTimeError::Network("Request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return TaskTimeError::Network("Could not connect to the server".into());
        }

        if self.is_builder() {
            return TaskTimeError::Config(format!("Invalid request: {self}"));
        }

        if self.is_decode() {
            return TaskTimeError::Parse(self.to_string());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => TaskTimeError::Auth(message),
                _ => TaskTimeError::Remote { status: code, message },
            };
        }

        TaskTimeError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        let timed_out = value.is_timeout();
        InfraError { error: value.into_tasktime(), timed_out }
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TaskTimeError */
/* -------------------------------------------------------------------------- */

impl IntoTaskTimeError for IoError {
    fn into_tasktime(self) -> TaskTimeError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::PermissionDenied => {
                TaskTimeError::Storage(format!("permission denied: {self}"))
            }
            _ => TaskTimeError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError::new(value.into_tasktime())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TaskTimeError */
/* -------------------------------------------------------------------------- */

impl IntoTaskTimeError for JsonError {
    fn into_tasktime(self) -> TaskTimeError {
        TaskTimeError::Parse(self.to_string())
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError::new(value.into_tasktime())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn io_errors_map_to_storage() {
        let err = IoError::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let mapped: TaskTimeError = InfraError::from(err).into();
        match mapped {
            TaskTimeError::Storage(msg) => assert!(msg.contains("permission denied")),
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[test]
    fn json_errors_map_to_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped: TaskTimeError = InfraError::from(err).into();
        assert!(matches!(mapped, TaskTimeError::Parse(_)));
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: TaskTimeError = InfraError::from(error).into();
        match mapped {
            TaskTimeError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network() {
        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get("http://127.0.0.1:9").send().await.unwrap_err();

        let infra = InfraError::from(error);
        assert!(!infra.is_timeout());
        assert!(matches!(infra.into_inner(), TaskTimeError::Network(_)));
    }

    #[tokio::test]
    async fn timeouts_are_flagged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_millis(300)))
            .mount(&server)
            .await;

        let client = Client::builder()
            .no_proxy()
            .timeout(std::time::Duration::from_millis(50))
            .build()
            .unwrap();
        let error = client.get(server.uri()).send().await.unwrap_err();

        let infra = InfraError::from(error);
        assert!(infra.is_timeout());
        assert_eq!(infra.into_inner(), TaskTimeError::Network("Request timed out".into()));
    }
}
