//! Body storage and serialization at build time.

use jsonapi_compose::{
    Body, JsonApi, JsonSerializer, Relationship, RequestComposer, ResourceDocument, ResourceObject,
    HttpRequest,
};
use serde_json::{Map, Value, json};

struct Comment {
    body: &'static str,
}

impl ResourceDocument for Comment {
    fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert(
            "data".to_owned(),
            json!({"type": "comments", "attributes": {"body": self.body}}),
        );
        document
    }
}

#[test]
fn test_raw_mapping_is_stored_unchanged() {
    let document = json!({"data": {"type": "articles", "id": "1"}, "meta": {"draft": true}});
    let composer = JsonApi::composer().set_json_api_body(document.clone());

    assert_eq!(composer.state().body, Some(Body::from(document)));
}

#[test]
fn test_resource_object_is_converted_immediately() {
    let article = ResourceObject::new("articles")
        .attribute("title", "Hello")
        .relationship("tags", Relationship::to_many([("tags", "1")]));
    let composer = JsonApi::composer().create().set_json_api_body(&article);

    assert_eq!(
        composer.state().body,
        Some(Body::Structured(article.to_document()))
    );
}

#[test]
fn test_custom_resource_document() {
    let composer = JsonApi::composer().set_json_api_resource(&Comment { body: "First!" });

    assert_eq!(
        composer.state().body,
        Some(Body::from(json!({"data": {"type": "comments", "attributes": {"body": "First!"}}})))
    );
}

#[test]
fn test_body_is_encoded_at_build() {
    let article = ResourceObject::new("articles").with_id("1").attribute("title", "Updated");
    let request = JsonApi::composer()
        .update()
        .set_json_api_body(article)
        .build()
        .expect("composer should build");

    let encoded: Value = serde_json::from_slice(request.body()).expect("body should be JSON");
    assert_eq!(
        encoded,
        json!({"data": {"type": "articles", "id": "1", "attributes": {"title": "Updated"}}})
    );
    assert_eq!(
        request.header_line("Content-Length"),
        Some(request.body().len().to_string())
    );
}

#[test]
fn test_raw_string_body_is_sent_verbatim() {
    let raw = r#"{"data": {"type": "people", "id": "9"}}"#;
    let request = JsonApi::composer()
        .create()
        .set_json_api_body(raw)
        .build()
        .expect("composer should build");

    assert_eq!(request.body().as_ref(), raw.as_bytes());
}

#[test]
fn test_no_body_leaves_request_without_content() {
    let request = JsonApi::composer().build().expect("composer should build");
    assert!(request.body().is_empty());
    assert!(request.header("Content-Length").is_none());
}

#[test]
fn test_latest_body_wins() {
    let composer = JsonApi::composer()
        .set_json_api_body(json!({"data": null}))
        .set_json_api_body("{}");
    assert_eq!(composer.state().body, Some(Body::from("{}")));
}

#[test]
fn test_pretty_serializer() {
    let composer = RequestComposer::with_serializer(HttpRequest::new(), JsonSerializer::pretty())
        .set_json_api_body(json!({"data": {"type": "articles"}}));
    let request = composer.build().expect("composer should build");

    assert!(request.body().contains(&b'\n'));
}

#[test]
fn test_serializer_errors_surface_from_build() {
    let result = JsonApi::form()
        .create()
        .set_json_api_body(json!({"data": {"type": "articles"}}))
        .build();

    let error = result.expect_err("nested form body should be rejected");
    assert!(error.is_body());
}
