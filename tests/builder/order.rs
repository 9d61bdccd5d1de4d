//! Build order, observed through a template that records every change.

use bytes::Bytes;
use jsonapi_compose::{ImmutableRequest, JsonApi, RequestComposer, RequestUri};

#[derive(Debug, Clone, Default, PartialEq)]
struct RecordingRequest {
    uri: RequestUri,
    calls: Vec<String>,
}

impl ImmutableRequest for RecordingRequest {
    fn with_method(mut self, method: &str) -> Self {
        self.calls.push(format!("method {method}"));
        self
    }

    fn uri(&self) -> &RequestUri {
        &self.uri
    }

    fn with_uri(mut self, uri: RequestUri) -> Self {
        self.calls.push(format!("uri {uri}"));
        self.uri = uri;
        self
    }

    fn with_protocol_version(mut self, version: &str) -> Self {
        self.calls.push(format!("version {version}"));
        self
    }

    fn with_header(mut self, name: &str, values: Vec<String>) -> Self {
        self.calls.push(format!("header {name}: {}", values.join(", ")));
        self
    }

    fn with_body(mut self, body: Bytes) -> Self {
        self.calls.push(format!("body {}", String::from_utf8_lossy(&body)));
        self
    }
}

#[test]
fn test_build_applies_steps_in_order() {
    let composer: RequestComposer<RecordingRequest> = JsonApi::with_template(RecordingRequest::default())
        .update()
        .set_uri("https://api.example.com/articles/1")
        .set_protocol_version("2")
        .set_header("Content-Type", "application/json")
        .set_json_api_body(r#"{"data":null}"#);

    let request = composer.build().expect("composer should build");

    assert_eq!(
        request.calls,
        vec![
            "method PATCH".to_owned(),
            "uri https://api.example.com/articles/1".to_owned(),
            "version 2".to_owned(),
            "header Accept: application/vnd.api+json".to_owned(),
            "header Content-Type: application/vnd.api+json".to_owned(),
            "header Content-Type: application/json".to_owned(),
            "header Content-Length: 13".to_owned(),
            "body {\"data\":null}".to_owned(),
        ]
    );
}

#[test]
fn test_empty_protocol_version_is_not_applied() {
    let request = JsonApi::with_template(RecordingRequest::default())
        .build()
        .expect("composer should build");

    assert!(request.calls.iter().all(|call| !call.starts_with("version")));
    assert!(request.calls.iter().all(|call| !call.starts_with("body")));
}
