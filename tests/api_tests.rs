//! App API tests against a mocked Customer.io server.
//!
//! Run with: cargo test --test api_tests

use std::collections::HashMap;
use std::sync::Once;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use customerio::api::MAX_LOOKUP_IDS;
use customerio::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn client_for(server: &MockServer) -> ApiClient {
    init_logging();
    let config = ClientConfig::default().with_base_url(server.uri());
    ApiClient::with_config(Credentials::new("site", "key"), config).expect("client")
}

async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

fn param_name(err: Error) -> String {
    match err {
        Error::Param { param } => param,
        other => panic!("expected Param error, got {other:?}"),
    }
}

// ============================================================================
// CUSTOMER LOOKUP TESTS
// ============================================================================

mod customer_tests {
    use super::*;

    #[tokio::test]
    async fn test_attributes_decodes_legacy_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers/42/attributes"))
            .and(query_param("id_type", "id"))
            .and(header("authorization", "Basic c2l0ZTprZXk="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "customer": {
                    "attributes": {
                        "attributes": "{\"plan\":\"pro\",\"seats\":3}",
                        "cio_id": "c9",
                        "created_at": "1700000000",
                        "email": "p@example.com",
                        "id": "42"
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let customer = client_for(&server)
            .customers()
            .attributes("42", IdentifierType::Id)
            .await
            .unwrap();

        assert_eq!(customer.cio_id, "c9");
        assert_eq!(customer.email, "p@example.com");
        assert_eq!(customer.id, "42");
        assert_eq!(customer.created_at.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(customer.attributes["plan"], "pro");
        assert_eq!(customer.attributes["seats"], 3);
    }

    #[tokio::test]
    async fn test_attributes_empty_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "customer": {"attributes": {"attributes": "", "created_at": "", "cio_id": "c1"}}
            })))
            .mount(&server)
            .await;

        let customer = client_for(&server)
            .customers()
            .attributes("c1", IdentifierType::CioId)
            .await
            .unwrap();
        assert!(customer.attributes.is_empty());
        assert_eq!(customer.created_at, None);
    }

    #[tokio::test]
    async fn test_attributes_null_fields_decode_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers/42/attributes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "customer": {"attributes": {
                    "attributes": null,
                    "cio_id": "c1",
                    "created_at": null,
                    "email": null,
                    "id": "42"
                }}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let customer = client_for(&server)
            .customers()
            .attributes("42", IdentifierType::Id)
            .await
            .unwrap();
        assert_eq!(customer.email, "");
        assert_eq!(customer.id, "42");
        assert_eq!(customer.created_at, None);
        assert!(customer.attributes.is_empty());
    }

    #[tokio::test]
    async fn test_attributes_404_is_not_found_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers/missing/attributes"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"errors\":[]}"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .customers()
            .attributes("missing", IdentifierType::Id)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CustomerNotFound));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_attributes_other_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .customers()
            .attributes("42", IdentifierType::Id)
            .await
            .unwrap_err();
        match err {
            Error::Api { status, body, .. } => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_attributes_requires_customer_id() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;

        let err = client_for(&server)
            .customers()
            .attributes("", IdentifierType::Email)
            .await
            .unwrap_err();
        assert_eq!(param_name(err), "customer_id");
    }

    #[tokio::test]
    async fn test_lookup_ids_preserves_order_and_length() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .and(query_param("limit", "1000"))
            .and(body_json(json!({
                "filter": {"or": [
                    {"attribute": {"field": "id", "operator": "eq", "value": "a"}},
                    {"attribute": {"field": "id", "operator": "eq", "value": "b"}},
                    {"attribute": {"field": "id", "operator": "eq", "value": "c"}}
                ]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifiers": [
                    {"id": "c", "email": "c@example.com", "cio_id": "cio-c"},
                    {"id": "a", "email": null, "cio_id": "cio-a"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ids = client_for(&server)
            .customers()
            .lookup_ids(&["a", "b", "c"], IdentifierType::Id)
            .await
            .unwrap();
        assert_eq!(ids, vec!["cio-a", "", "cio-c"]);
    }

    #[tokio::test]
    async fn test_lookup_ids_email_is_case_insensitive() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/customers"))
            .and(body_json(json!({
                "filter": {"or": [
                    {"attribute": {"field": "email", "operator": "eq", "value": "Foo@Bar.com"}},
                    {"attribute": {"field": "email", "operator": "eq", "value": "foo@bar.com"}},
                    {"attribute": {"field": "email", "operator": "eq", "value": "x@y.com"}}
                ]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifiers": [{"email": "foo@bar.com", "cio_id": "cio-foo"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ids = client_for(&server)
            .customers()
            .lookup_ids(&["Foo@Bar.com", "foo@bar.com", "x@y.com"], IdentifierType::Email)
            .await
            .unwrap();
        assert_eq!(ids, vec!["cio-foo", "cio-foo", ""]);
    }

    #[tokio::test]
    async fn test_lookup_ids_accepts_exactly_the_limit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"identifiers": []})))
            .expect(1)
            .mount(&server)
            .await;

        let ids: Vec<String> = (0..MAX_LOOKUP_IDS).map(|i| i.to_string()).collect();
        let result = client_for(&server)
            .customers()
            .lookup_ids(&ids, IdentifierType::Id)
            .await
            .unwrap();
        assert_eq!(result.len(), MAX_LOOKUP_IDS);
        assert!(result.iter().all(String::is_empty));
    }

    #[tokio::test]
    async fn test_lookup_ids_rejects_oversized_batch() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;

        let ids: Vec<String> = (0..=MAX_LOOKUP_IDS).map(|i| i.to_string()).collect();
        let err = client_for(&server)
            .customers()
            .lookup_ids(&ids, IdentifierType::Id)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_lookup_by_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customers"))
            .and(query_param("email", "p+1@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"cio_id": "c1"}, {"cio_id": "c2"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ids = client_for(&server)
            .customers()
            .lookup_by_email("p+1@example.com")
            .await
            .unwrap();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[tokio::test]
    async fn test_lookup_by_email_404_is_not_found_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .customers()
            .lookup_by_email("nobody@example.com")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_lookup_by_email_requires_email() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;

        let err = client_for(&server)
            .customers()
            .lookup_by_email("")
            .await
            .unwrap_err();
        assert_eq!(param_name(err), "email");
    }
}

// ============================================================================
// SEGMENTS SERVICE TESTS
// ============================================================================

mod segments_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/segments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "segments": [
                    {"id": 1, "name": "VIP", "description": "big spenders", "state": "finished", "type": "dynamic"},
                    {"id": 2, "name": "Beta", "description": "", "state": "finished", "type": "manual"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let segments = client_for(&server).segments().list().await.unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0],
            Segment {
                id: 1,
                name: "VIP".into(),
                description: "big spenders".into(),
                state: "finished".into(),
                segment_type: "dynamic".into(),
            }
        );
        assert_eq!(segments[1].segment_type, "manual");
    }

    #[tokio::test]
    async fn test_get_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/segments/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "segment": {"id": 7, "name": "Churned", "state": "building", "type": "dynamic"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let segment = client_for(&server).segments().get(7).await.unwrap();
        assert_eq!(segment.id, 7);
        assert_eq!(segment.name, "Churned");
        assert_eq!(segment.description, "");
    }

    #[tokio::test]
    async fn test_null_segment_description_decodes_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/segments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "segments": [
                    {"id": 1, "name": "VIP", "description": null, "state": "finished", "type": "dynamic"}
                ]
            })))
            .mount(&server)
            .await;

        let segments = client_for(&server).segments().list().await.unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].name, "VIP");
        assert_eq!(segments[0].description, "");
    }

    #[tokio::test]
    async fn test_get_segment_404_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no segment"))
            .mount(&server)
            .await;

        let err = client_for(&server).segments().get(9).await.unwrap_err();
        match err {
            Error::Api { status, url, body } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/v1/segments/9"));
                assert_eq!(body, "no segment");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_envelope_key_fails_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).segments().list().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}

// ============================================================================
// OBJECTS SERVICE TESTS
// ============================================================================

mod objects_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/object_types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "types": [{
                    "id": "1",
                    "name": "Companies",
                    "enabled": true,
                    "singular_name": "Company",
                    "slug": "companies",
                    "singular_slug": "company"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let types = client_for(&server).objects().list_types().await.unwrap();
        assert_eq!(
            types,
            vec![CustomObjectType {
                id: "1".into(),
                name: "Companies".into(),
                enabled: true,
                singular_name: "Company".into(),
                slug: "companies".into(),
                singular_slug: "company".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_find_objects() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/objects"))
            .and(body_json(json!({
                "object_type_id": "1",
                "filter": {"and": [
                    {"attribute": {"field": "industry", "operator": "eq", "value": "retail"}}
                ]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ids": ["acme", "globex"]})))
            .expect(1)
            .mount(&server)
            .await;

        let filter = Filter::all([AttributeCondition::equals("industry", "retail")]);
        let ids = client_for(&server).objects().find("1", &filter).await.unwrap();
        assert_eq!(ids, vec!["acme", "globex"]);
    }

    #[tokio::test]
    async fn test_find_accepts_raw_json_filter() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"object_type_id": "2", "filter": {"not": {}}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ids": []})))
            .expect(1)
            .mount(&server)
            .await;

        let ids = client_for(&server)
            .objects()
            .find("2", &json!({"not": {}}))
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_find_unserializable_filter_is_serialization_error() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;

        let mut filter = HashMap::new();
        filter.insert((1u8, 2u8), "tuple keys are not JSON");
        let err = client_for(&server)
            .objects()
            .find("1", &filter)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_object_attributes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/objects/1/acme%20inc/attributes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": {"attributes": {"industry": "retail", "employees": 250}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let attrs = client_for(&server)
            .objects()
            .attributes("1", "acme inc")
            .await
            .unwrap();
        assert_eq!(attrs["industry"], "retail");
        assert_eq!(attrs["employees"], 250);
    }

    #[tokio::test]
    async fn test_object_params_are_required() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;
        let objects = client_for(&server).objects();

        let err = objects.attributes("", "acme").await.unwrap_err();
        assert_eq!(param_name(err), "object_type_id");
        let err = objects.attributes("1", "").await.unwrap_err();
        assert_eq!(param_name(err), "object_id");
        let err = objects.find("", &Filter::default()).await.unwrap_err();
        assert_eq!(param_name(err), "object_type_id");
    }
}
