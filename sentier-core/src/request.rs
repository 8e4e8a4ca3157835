//! The request abstraction the router consumes.

use crate::method::Method;

/// An opaque, externally supplied request.
///
/// The router performs no socket I/O. Accepting connections, parsing raw
/// HTTP, and writing the response to the wire are the network layer's
/// responsibility; the router only reads the path and method and drives
/// the side-effecting response operations below.
///
/// # Example
///
/// ```rust,ignore
/// struct MyRequest {
///     path: String,
///     method: Method,
///     response: ResponseBuffer,
/// }
///
/// impl Request for MyRequest {
///     fn path(&self) -> &str { &self.path }
///     fn method(&self) -> Method { self.method }
///     // ...
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be dispatched by Sentier",
    label = "missing `Request` implementation",
    note = "Implement `Request` to expose the path, method, and response operations."
)]
pub trait Request: Send + 'static {
    /// The URL path of this request.
    fn path(&self) -> &str;

    /// The HTTP method of this request.
    fn method(&self) -> Method;

    /// Set the response status code.
    fn set_status(&mut self, status: u16);

    /// Set the response content type.
    fn set_content_type(&mut self, value: &str);

    /// Append bytes to the response body.
    fn write(&mut self, body: &[u8]);
}
