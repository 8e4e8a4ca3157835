//! Testing utilities for Sentier.
//!
//! - [`MockRequest`]: an in-memory [`Request`] that records response writes
//! - [`CallLog`]: a shared, ordered log for asserting chain execution order
//! - [`RecordingHandler`] / [`RecordingHook`] / [`RecordingErrorHandler`]:
//!   handlers that append to a [`CallLog`] when invoked
//! - [`FailingHandler`]: a handler that always fails with a given message

use crate::handler::{ErrorHandler, Flow, Handler, Hook, RouteContext};
use sentier_core::{HandlerError, Method, Request};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock request
// ============================================================================

/// An in-memory request that records every response operation.
///
/// # Example
///
/// ```rust,ignore
/// let mut req = MockRequest::new(Method::Get, "/users/42");
/// router.dispatch(&mut req).await;
/// assert_eq!(req.status(), Some(200));
/// assert_eq!(req.body_text(), "hello");
/// ```
pub struct MockRequest {
    path: String,
    method: Method,
    status: Option<u16>,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl MockRequest {
    /// Create a request with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            status: None,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// The last status set, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The last content type set, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The accumulated response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The accumulated response body as text.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl Request for MockRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> Method {
        self.method
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_content_type(&mut self, value: &str) {
        self.content_type = Some(value.to_string());
    }

    fn write(&mut self, body: &[u8]) {
        self.body.extend_from_slice(body);
    }
}

// ============================================================================
// Call log
// ============================================================================

/// A shared, ordered record of handler invocations.
///
/// Clones share the same underlying log, so one log can be threaded
/// through several recording handlers and later asserted as a whole.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    /// A snapshot of all entries in invocation order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// The number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording handlers
// ============================================================================

/// A handler that appends its label to a [`CallLog`] and succeeds.
pub struct RecordingHandler {
    log: CallLog,
    label: String,
}

impl RecordingHandler {
    /// Create a handler recording `label` into `log`.
    pub fn new(log: &CallLog, label: impl Into<String>) -> Self {
        Self {
            log: log.clone(),
            label: label.into(),
        }
    }
}

impl<R: Request> Handler<R> for RecordingHandler {
    async fn call(&self, _req: &mut R, _route: &RouteContext<'_, R>) -> Result<(), HandlerError> {
        self.log.record(self.label.as_str());
        Ok(())
    }
}

/// A before-hook that appends its label to a [`CallLog`] and returns a
/// configurable [`Flow`].
pub struct RecordingHook {
    log: CallLog,
    label: String,
    flow: Flow,
}

impl RecordingHook {
    /// Create a hook that records and continues.
    pub fn new(log: &CallLog, label: impl Into<String>) -> Self {
        Self::with_flow(log, label, Flow::Continue)
    }

    /// Create a hook that records and returns the given flow.
    pub fn with_flow(log: &CallLog, label: impl Into<String>, flow: Flow) -> Self {
        Self {
            log: log.clone(),
            label: label.into(),
            flow,
        }
    }
}

impl<R: Request> Hook<R> for RecordingHook {
    async fn on_request(
        &self,
        _req: &mut R,
        _route: &RouteContext<'_, R>,
    ) -> Result<Flow, HandlerError> {
        self.log.record(self.label.as_str());
        Ok(self.flow)
    }
}

/// An error handler that records its label and either recovers or fails.
pub struct RecordingErrorHandler {
    log: CallLog,
    label: String,
    recovers: bool,
}

impl RecordingErrorHandler {
    /// Create an error handler that records and recovers.
    pub fn new(log: &CallLog, label: impl Into<String>) -> Self {
        Self {
            log: log.clone(),
            label: label.into(),
            recovers: true,
        }
    }

    /// Create an error handler that records and then fails itself.
    pub fn failing(log: &CallLog, label: impl Into<String>) -> Self {
        Self {
            log: log.clone(),
            label: label.into(),
            recovers: false,
        }
    }
}

impl<R: Request> ErrorHandler<R> for RecordingErrorHandler {
    async fn handle(
        &self,
        _req: &mut R,
        _route: &RouteContext<'_, R>,
        error: &HandlerError,
    ) -> Result<(), HandlerError> {
        self.log.record(format!("{}:{}", self.label, error));
        if self.recovers {
            Ok(())
        } else {
            Err(HandlerError::msg(format!("{} failed", self.label)))
        }
    }
}

// ============================================================================
// Failing handler
// ============================================================================

/// A handler that always fails with the given message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<R: Request> Handler<R> for FailingHandler {
    async fn call(&self, _req: &mut R, _route: &RouteContext<'_, R>) -> Result<(), HandlerError> {
        Err(HandlerError::msg(self.message.clone()))
    }
}
