//! End-to-end scenarios for building and matching URLs.

use std::sync::Arc;
use std::thread;

use route_registry::config::RouteConfig;
use route_registry::http::annotate_body;
use route_registry::{normalize, Params, RouteError};
use serde_json::json;

mod common;

fn sample_params(template: &str) -> Params {
    route_registry::routing::Template::parse(template)
        .params()
        .map(|name| (name.to_string(), format!("{name}-Value.42")))
        .collect()
}

#[test]
fn test_round_trip_every_registered_template() {
    let registry = common::shop_registry();

    for route in registry.routes() {
        let template = route.template().as_str();
        let url = registry.build_url(template, &sample_params(template));
        assert_eq!(
            registry.template_from_url(&url).unwrap(),
            Some(template),
            "url {url}"
        );
    }
}

#[test]
fn test_round_trip_with_encoded_values() {
    let registry = common::shop_registry();
    let params = Params::new().with("username", "Mario Rossi/ü?&");
    let url = registry.build_url("/user/update/:username", &params);

    assert!(url.starts_with("/api/v1/user/update/"));
    assert!(!url["/api/v1/user/update/".len()..].contains('/'));
    assert_eq!(
        registry.template_from_url(&url).unwrap(),
        Some("/user/update/:username")
    );
    assert_eq!(registry.custom_type_from_url(&url).unwrap(), Some("update_user"));
}

#[test]
fn test_username_scenario() {
    let registry = common::shop_registry();
    let url = registry.build_url(
        "/user/username/:username",
        &Params::new().with("username", "m.rossi"),
    );

    assert_eq!(url, "/api/v1/user/username/m.rossi");
    assert_eq!(
        registry.template_from_url(&url).unwrap(),
        Some("/user/username/:username")
    );
    assert_eq!(registry.custom_type_from_url(&url).unwrap(), None);
}

#[test]
fn test_missing_param_renders_undefined() {
    let registry = common::shop_registry();
    let url = registry.build_url("/users/:id", &Params::new());
    assert_eq!(url, "/api/v1/users/undefined");
    assert!(url.contains("undefined"));
}

#[test]
fn test_trailing_slash_tolerance() {
    let registry = common::shop_registry();
    for url in ["/api/v1/users/42", "/api/v1/users", "/api/v1/auth/logout"] {
        let expected = registry.template_from_url(url).unwrap();
        assert!(expected.is_some());
        assert_eq!(registry.template_from_url(&format!("{url}/")).unwrap(), expected);
    }
}

#[test]
fn test_order_sensitivity() {
    let registry = common::registry_with(vec![
        RouteConfig::new("users", "all", "/users"),
        RouteConfig::new("users", "one", "/users/:id"),
    ]);

    assert_eq!(registry.template_from_url("/api/v1/users/42").unwrap(), Some("/users/:id"));
    assert_eq!(registry.template_from_url("/api/v1/users").unwrap(), Some("/users"));
}

#[test]
fn test_literal_before_parametric() {
    let registry = common::registry_with(vec![
        RouteConfig::new("users", "me", "/users/me").tagged("self"),
        RouteConfig::new("users", "one", "/users/:id"),
    ]);

    assert_eq!(registry.template_from_url("/api/v1/users/me").unwrap(), Some("/users/me"));
    assert_eq!(registry.template_from_url("/api/v1/users/you").unwrap(), Some("/users/:id"));
    assert_eq!(registry.custom_type_from_url("/api/v1/users/ME").unwrap(), Some("self"));
}

#[test]
fn test_custom_type_ignores_query_and_casing() {
    let registry = common::shop_registry();
    let urls = [
        "/api/v1/user/update/m.rossi",
        "/api/v1/user/update/M.ROSSI",
        "/api/v1/user/update/m.rossi?lang=it&x=1",
        "/api/v1/user/update/m.rossi#section",
        "https://shop.example.com/api/v1/user/update/Luigi",
    ];
    for url in urls {
        assert_eq!(registry.custom_type_from_url(url).unwrap(), Some("update_user"), "url {url}");
    }
}

#[test]
fn test_case_insensitive_literals() {
    let registry = common::shop_registry();
    assert_eq!(
        registry.template_from_url("/api/v1/AUTH/Register").unwrap(),
        Some("/auth/register")
    );
}

#[test]
fn test_no_match_is_not_an_error() {
    let registry = common::shop_registry();
    assert_eq!(registry.template_from_url("/api/v1/orders/1").unwrap(), None);
    assert_eq!(registry.template_from_url("/api/v2/users").unwrap(), None);
    assert_eq!(registry.custom_type_from_url("/elsewhere").unwrap(), None);
}

#[test]
fn test_malformed_url_is_reported() {
    let registry = common::shop_registry();
    let err = registry.template_from_url("http://").unwrap_err();
    assert!(matches!(err, RouteError::InvalidUrl { ref url, .. } if url == "http://"));
    assert!(registry.custom_type_from_url("http://").is_err());
}

#[test]
fn test_normalize_idempotent() {
    for p in ["", "/", "////", "a", "/a/", "a//b//", "/:x/y//"] {
        assert_eq!(normalize(&normalize(p)), normalize(p));
    }
}

#[test]
fn test_annotate_register_request() {
    let registry = common::shop_registry();
    let url = registry.url_for("auth.register", &Params::new()).unwrap();
    let body = json!({ "username": "m.rossi", "email": "m.rossi@example.com" });

    let annotated = annotate_body(&registry, &http::Method::POST, &url, body).unwrap();
    assert_eq!(annotated["CustomType"], "registration");
}

#[test]
fn test_shared_across_threads() {
    let registry = Arc::new(common::shop_registry());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let url = registry.url_for("users.one", &Params::new().with("id", i)).unwrap();
                registry.template_from_url(&url).unwrap().map(str::to_string)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("/users/:id"));
    }
}

#[test]
fn test_dot_values_resolve_away() {
    let registry = common::shop_registry();
    let dot = registry.url_for("users.one", &Params::new().with("id", ".")).unwrap();
    let dotdot = registry.url_for("users.one", &Params::new().with("id", "..")).unwrap();

    assert_eq!(dot, "/api/v1/users/.");
    assert_eq!(registry.template_from_url(&dot).unwrap(), Some("/users"));
    assert_eq!(registry.template_from_url(&dotdot).unwrap(), None);
}
