//! Method, URI, header and lifecycle behaviour of `RequestComposer`.

use jsonapi_compose::{
    HttpRequest, ImmutableRequest, JSON_API_MEDIA_TYPE, JsonApi, QueryValue, RequestComposer,
    RequestUri,
};

fn build(composer: &RequestComposer) -> HttpRequest {
    composer.build().expect("composer should build")
}

#[test]
fn test_defaults() {
    let request = build(&JsonApi::composer());

    assert_eq!(request.method(), "GET");
    assert_eq!(request.uri().scheme(), "http");
    assert_eq!(request.uri().host(), "");
    assert_eq!(request.uri().port(), None);
    assert_eq!(request.uri().path(), "");
    assert_eq!(request.uri().query(), "");
    assert_eq!(request.protocol_version(), "1.1");
    assert!(request.body().is_empty());
}

#[test]
fn test_method_shorthands_match_set_method() {
    let cases = [
        (JsonApi::composer().fetch(), "GET"),
        (JsonApi::composer().create(), "POST"),
        (JsonApi::composer().update(), "PATCH"),
        (JsonApi::composer().delete(), "DELETE"),
    ];

    for (composer, method) in cases {
        assert_eq!(build(&composer), build(&JsonApi::composer().set_method(method)));
        assert_eq!(build(&composer).method(), method);
    }
}

#[test]
fn test_last_method_wins() {
    let composer = JsonApi::composer().create().update().set_method("PURGE");
    assert_eq!(build(&composer).method(), "PURGE");
}

#[test]
fn test_uri_component_setters() {
    let composer = JsonApi::composer()
        .https()
        .set_uri_host("api.example.com")
        .set_uri_port(8443)
        .set_uri_path("/articles/1");
    let request = build(&composer);

    assert_eq!(request.uri().to_string(), "https://api.example.com:8443/articles/1");

    let plain = build(&composer.http());
    assert_eq!(plain.uri().scheme(), "http");
}

#[test]
fn test_set_uri_copies_parsed_components() {
    let composer = JsonApi::composer()
        .set_uri("https://api.example.com:8443/articles?include=author&page%5Bnumber%5D=2");
    let request = build(&composer);

    assert_eq!(request.uri().scheme(), "https");
    assert_eq!(request.uri().host(), "api.example.com");
    assert_eq!(request.uri().port(), Some(8443));
    assert_eq!(request.uri().path(), "/articles");
    assert_eq!(request.uri().query(), "include=author&page%5Bnumber%5D=2");
    assert_eq!(
        composer.state().query.get("page"),
        Some(&QueryValue::nested([("number", "2")]))
    );
}

#[test]
fn test_set_uri_keeps_absent_components() {
    let composer = JsonApi::composer()
        .https()
        .set_uri_host("api.example.com")
        .set_uri_port(9000)
        .set_json_api_sort("title")
        .set_uri("/people/9");
    let state = composer.state();

    assert_eq!(state.scheme, "https");
    assert_eq!(state.host, "api.example.com");
    assert_eq!(state.port, Some(9000));
    assert_eq!(state.path, "/people/9");
    assert_eq!(state.query.get("sort").and_then(QueryValue::as_scalar), Some("title"));
}

#[test]
fn test_set_uri_without_path_keeps_path() {
    let composer = JsonApi::composer()
        .set_uri_path("/articles")
        .set_uri("https://api.example.com");
    let request = build(&composer);

    assert_eq!(request.uri().host(), "api.example.com");
    assert_eq!(request.uri().path(), "/articles");
}

#[test]
fn test_set_uri_explicit_default_port_overrides() {
    let composer = JsonApi::composer()
        .set_uri_port(8080)
        .set_uri("http://api.example.com:80/x");

    assert_eq!(composer.state().port, Some(80));
    assert_eq!(build(&composer).uri().to_string(), "http://api.example.com:80/x");
}

#[test]
fn test_set_uri_relative_references() {
    let base = JsonApi::composer().set_uri("https://api.example.com/people?sort=name");

    let query_only = base.clone().set_uri("?sort=x");
    assert_eq!(query_only.state().path, "/people");
    assert_eq!(query_only.state().query.get("sort").and_then(QueryValue::as_scalar), Some("x"));

    let path_relative = base.set_uri("articles?include=author");
    assert_eq!(path_relative.state().host, "api.example.com");
    assert_eq!(path_relative.state().path, "articles");
    assert_eq!(
        build(&path_relative).uri().to_string(),
        "https://api.example.com/articles?include=author"
    );
}

#[test]
fn test_set_uri_keeps_components_as_written() {
    let composer = JsonApi::composer().set_uri("http://Example.COM/a/../b%20c");
    let state = composer.state();

    assert_eq!(state.host, "Example.COM");
    assert_eq!(state.path, "/a/../b%20c");
}

#[test]
fn test_set_uri_query_replaces_all_parameters() {
    let composer = JsonApi::composer()
        .set_json_api_sort(["-created"])
        .set_uri_query_param("token", "abc")
        .set_uri("https://api.example.com/articles?filter%5Btag%5D=rust");

    assert_eq!(composer.state().query.len(), 1);
    assert_eq!(build(&composer).uri().query(), "filter%5Btag%5D=rust");
}

#[test]
fn test_malformed_uri_is_a_no_op() {
    env_logger::try_init().ok();

    let composer = JsonApi::composer()
        .update()
        .set_uri("https://api.example.com/articles/1?include=author")
        .set_header("X-Request-Id", "42");
    let before = composer.state().clone();

    for malformed in ["http://[::1", "https://api.example.com:70000/", "http://", "http://exa mple.com/", ""] {
        let after = composer.clone().set_uri(malformed);
        assert_eq!(after.state(), &before, "'{malformed}' should leave the composer unchanged");
    }
}

#[test]
fn test_unset_port_keeps_template_port() {
    let template = HttpRequest::new().with_uri(RequestUri::new().with_port(Some(8080)));
    let composer = JsonApi::with_template(template).set_uri_host("localhost");
    assert_eq!(composer.build().expect("composer should build").uri().port(), Some(8080));

    let overridden = composer.set_uri_port(3000);
    assert_eq!(overridden.build().expect("composer should build").uri().port(), Some(3000));
}

#[test]
fn test_protocol_version() {
    let template = HttpRequest::new().with_protocol_version("1.0");

    let kept = JsonApi::with_template(template.clone()).build().expect("composer should build");
    assert_eq!(kept.protocol_version(), "1.0");

    let set = JsonApi::with_template(template)
        .set_protocol_version("2")
        .build()
        .expect("composer should build");
    assert_eq!(set.protocol_version(), "2");
}

#[test]
fn test_media_type_overrides_template_headers() {
    let template = HttpRequest::new()
        .with_header("Accept", vec!["text/html".to_owned()])
        .with_header("content-type", vec!["application/json".to_owned()])
        .with_header("User-Agent", vec!["composer-tests".to_owned()]);
    let request = JsonApi::with_template(template).build().expect("composer should build");

    assert_eq!(request.header_line("Accept").as_deref(), Some(JSON_API_MEDIA_TYPE));
    assert_eq!(request.header_line("Content-Type").as_deref(), Some(JSON_API_MEDIA_TYPE));
    assert_eq!(request.header_line("user-agent").as_deref(), Some("composer-tests"));
}

#[test]
fn test_caller_headers_win_over_media_type() {
    let composer = JsonApi::composer()
        .set_header("content-type", "application/vnd.api+json; ext=\"https://jsonapi.org/ext/atomic\"")
        .set_header("Accept-Language", ["en", "fr"]);
    let request = build(&composer);

    assert_eq!(
        request.header_line("Content-Type").as_deref(),
        Some("application/vnd.api+json; ext=\"https://jsonapi.org/ext/atomic\"")
    );
    assert_eq!(request.header_line("Accept").as_deref(), Some(JSON_API_MEDIA_TYPE));
    assert_eq!(
        request.header("accept-language"),
        Some(&["en".to_owned(), "fr".to_owned()][..])
    );
}

#[test]
fn test_set_header_replaces_same_name() {
    let composer = JsonApi::composer()
        .set_header("X-Api-Version", "1")
        .set_header("X-Api-Version", "2");
    assert_eq!(build(&composer).header_line("x-api-version").as_deref(), Some("2"));
}

#[test]
fn test_build_is_idempotent() {
    let composer = JsonApi::composer()
        .create()
        .set_uri("https://api.example.com/articles")
        .set_json_api_fields([("articles", ["title"])])
        .set_json_api_body(serde_json::json!({"data": {"type": "articles"}}));

    assert_eq!(build(&composer), build(&composer));
}

#[test]
fn test_template_is_not_modified() {
    let composer = JsonApi::composer().delete().set_uri("https://api.example.com/articles/1");
    let _ = build(&composer);
    assert_eq!(composer.template(), &HttpRequest::new());
}

#[test]
fn test_reset_restores_defaults_and_keeps_serializer() {
    let composer = JsonApi::form()
        .update()
        .set_uri("https://api.example.com:8443/people/1?include=pets")
        .set_protocol_version("2")
        .set_header("X-Trace", "on")
        .set_json_api_body(serde_json::json!({"name": "Ada"}))
        .reset();

    assert_eq!(composer.state(), JsonApi::composer().state());

    let request = composer
        .set_json_api_body(serde_json::json!({"name": "Grace"}))
        .build()
        .expect("form body should encode");
    assert_eq!(request.body().as_ref(), b"name=Grace");
    assert_eq!(
        request.header_line("content-type").as_deref(),
        Some("application/x-www-form-urlencoded")
    );
}

#[test]
fn test_debug_build() {
    env_logger::try_init().ok();

    let request = JsonApi::composer()
        .debug()
        .set_uri("https://api.example.com/articles")
        .build()
        .expect("composer should build");
    assert_eq!(request.uri().path(), "/articles");
}
