//! End-to-end scenario: one dynamic route with method-specific handlers
//! and node-level custom not-found/error handlers.

use sentier::testing::{FailingHandler, MockRequest};
use sentier::{
    ErrorHandler, Handler, HandlerError, Method, Outcome, Request, Route, RouteContext, Router,
};

struct Respond(&'static str);

impl Handler<MockRequest> for Respond {
    async fn call(
        &self,
        req: &mut MockRequest,
        _route: &RouteContext<'_, MockRequest>,
    ) -> Result<(), HandlerError> {
        req.set_status(200);
        req.set_content_type("text/plain");
        req.write(self.0.as_bytes());
        Ok(())
    }
}

struct EchoParam(&'static str);

impl Handler<MockRequest> for EchoParam {
    async fn call(
        &self,
        req: &mut MockRequest,
        route: &RouteContext<'_, MockRequest>,
    ) -> Result<(), HandlerError> {
        let value = route
            .param(self.0)
            .ok_or_else(|| HandlerError::msg("missing parameter"))?
            .to_string();
        req.set_status(200);
        req.write(value.as_bytes());
        Ok(())
    }
}

struct CustomNotFound;

impl Handler<MockRequest> for CustomNotFound {
    async fn call(
        &self,
        req: &mut MockRequest,
        _route: &RouteContext<'_, MockRequest>,
    ) -> Result<(), HandlerError> {
        req.set_status(404);
        req.write(b"nothing here");
        Ok(())
    }
}

struct CustomError;

impl ErrorHandler<MockRequest> for CustomError {
    async fn handle(
        &self,
        req: &mut MockRequest,
        _route: &RouteContext<'_, MockRequest>,
        error: &HandlerError,
    ) -> Result<(), HandlerError> {
        req.set_status(500);
        req.write(format!("recovered: {error}").as_bytes());
        Ok(())
    }
}

fn router() -> Router<MockRequest> {
    Router::builder()
        .mount(
            Route::new("anything")
                .not_found(CustomNotFound)
                .on_error(CustomError)
                .child(
                    Route::new(":argTest/test")
                        .get(FailingHandler::new("get fails"))
                        .delete(Respond("ok"))
                        .patch(EchoParam("argTest")),
                ),
        )
        .unwrap()
        .build()
}

#[tokio::test]
async fn test_delete_returns_ok() {
    let router = router();
    let mut req = MockRequest::new(Method::Delete, "/anything/test%20val/test");

    assert_eq!(router.dispatch(&mut req).await, Outcome::Completed);
    assert_eq!(req.status(), Some(200));
    assert_eq!(req.body_text(), "ok");
}

#[tokio::test]
async fn test_patch_echoes_decoded_param() {
    let router = router();
    let mut req = MockRequest::new(Method::Patch, "/anything/test%20val/test");

    assert_eq!(router.dispatch(&mut req).await, Outcome::Completed);
    assert_eq!(req.body_text(), "test val");
}

#[tokio::test]
async fn test_get_failure_hits_custom_error_handler() {
    let router = router();
    let mut req = MockRequest::new(Method::Get, "/anything/test%20val/test");

    assert_eq!(router.dispatch(&mut req).await, Outcome::Recovered);
    assert_eq!(req.status(), Some(500));
    assert_eq!(req.body_text(), "recovered: get fails");
}

#[tokio::test]
async fn test_post_without_handler_hits_custom_not_found() {
    let router = router();
    let mut req = MockRequest::new(Method::Post, "/anything/test%20val/test");

    assert_eq!(router.dispatch(&mut req).await, Outcome::NotFound);
    assert_eq!(req.status(), Some(404));
    assert_eq!(req.body_text(), "nothing here");
}

#[tokio::test]
async fn test_unregistered_path_gets_default_not_found() {
    let router = router();
    let mut req = MockRequest::new(Method::Get, "/notfound/query");

    assert_eq!(router.dispatch(&mut req).await, Outcome::NotFound);
    assert_eq!(req.status(), Some(404));
    assert_eq!(req.body_text(), "404: Not Found");
}
