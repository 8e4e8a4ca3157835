//! Trie matching properties: precedence, backtracking, parameter capture.

use sentier::testing::{CallLog, MockRequest, RecordingHandler};
use sentier::{Method, Route, Router};

fn handler(label: &str) -> RecordingHandler {
    RecordingHandler::new(&CallLog::new(), label)
}

#[test]
fn test_static_exact_match() {
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("api/users").get(handler("users")))
        .unwrap()
        .build();

    let result = router.route(Method::Get, "/api/users");
    assert!(result.is_match());
    assert!(result.params().is_empty());
    assert_eq!(router.tree().node(result.matched()).segment(), "users");

    assert!(!router.route(Method::Get, "/api").is_match());
    assert!(!router.route(Method::Get, "/api/users/extra").is_match());
}

#[test]
fn test_dynamic_capture_is_percent_decoded() {
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("users/:id").get(handler("show")))
        .unwrap()
        .build();

    let result = router.route(Method::Get, "/users/test%20val");
    assert!(result.is_match());
    assert_eq!(result.params().get("id"), Some("test val"));
}

#[test]
fn test_multi_level_capture() {
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("orgs/:org/repos/:repo").get(handler("repo")))
        .unwrap()
        .build();

    let result = router.route(Method::Get, "/orgs/acme/repos/widget");
    assert!(result.is_match());
    assert_eq!(result.params().get("org"), Some("acme"));
    assert_eq!(result.params().get("repo"), Some("widget"));
    assert_eq!(result.params().len(), 2);
}

#[test]
fn test_static_precedence_over_dynamic() {
    // A static child and a dynamic sibling at the same node: the literal
    // segment always descends into the static child, even though only the
    // dynamic branch carries a handler.
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("files/foo"))
        .unwrap()
        .mount(Route::new("files/:name").get(handler("by-name")))
        .unwrap()
        .build();

    let result = router.route(Method::Get, "/files/foo");
    assert!(!result.is_match());
    assert_eq!(router.tree().node(result.matched()).segment(), "foo");

    let result = router.route(Method::Get, "/files/bar");
    assert!(result.is_match());
    assert_eq!(result.params().get("name"), Some("bar"));
}

#[test]
fn test_no_backtracking_below_static_match() {
    // The static subtree exists but is incomplete; failure below it is a
    // not-found, never a retry against the dynamic sibling.
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("files/foo/sub"))
        .unwrap()
        .mount(Route::new("files/:name").get(handler("by-name")))
        .unwrap()
        .build();

    assert!(!router.route(Method::Get, "/files/foo").is_match());
}

#[test]
fn test_backtracking_across_dynamic_siblings() {
    // Only the second dynamic child leads to a leaf handler for this path;
    // the first attempt must fail and the position must be restored.
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("files/:name/alpha").get(handler("alpha")))
        .unwrap()
        .mount(Route::new("files/:version/beta").get(handler("beta")))
        .unwrap()
        .build();

    let result = router.route(Method::Get, "/files/v1/beta");
    assert!(result.is_match());
    assert_eq!(result.params().get("version"), Some("v1"));
    assert_eq!(result.params().get("name"), None);
    assert_eq!(router.tree().node(result.matched()).segment(), "beta");
}

#[test]
fn test_method_resolution_with_any_fallback() {
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("ping").get(handler("get")).any(handler("any")))
        .unwrap()
        .mount(Route::new("strict").get(handler("get")))
        .unwrap()
        .build();

    assert!(router.route(Method::Get, "/ping").is_match());
    assert!(router.route(Method::Post, "/ping").is_match());
    assert!(router.route(Method::Other, "/ping").is_match());

    assert!(router.route(Method::Get, "/strict").is_match());
    assert!(!router.route(Method::Post, "/strict").is_match());
}

#[test]
fn test_unmatched_path_terminates_at_deepest_visited_node() {
    let router: Router<MockRequest> = Router::builder()
        .mount(Route::new("api/v1/items").get(handler("items")))
        .unwrap()
        .build();

    let result = router.route(Method::Get, "/api/v1/missing");
    assert!(!result.is_match());
    assert_eq!(router.tree().node(result.matched()).segment(), "v1");

    let result = router.route(Method::Get, "/nope");
    assert_eq!(router.tree().node(result.matched()).segment(), "");
}

#[test]
fn test_mount_refuses_handlers_on_the_root() {
    // "/" has no segments, so its handlers would land on the root node and
    // answer the empty path. Registration refuses it instead.
    let result = Router::<MockRequest>::builder().mount(Route::new("/").get(handler("root-get")));
    assert!(result.is_err());
}

#[test]
fn test_programmatic_params_bypass_decoding() {
    let router: Router<MockRequest> = Router::builder().build();

    let mut result = router.route(Method::Get, "/");
    result.params_mut().insert("raw", "a%20b");
    assert_eq!(result.params().get("raw"), Some("a%20b"));
}
