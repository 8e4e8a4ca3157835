//! HTTP method enumeration.

use std::fmt;

/// The request methods the router distinguishes.
///
/// Anything outside the recognized set collapses into [`Method::Other`];
/// such requests can still be served through a route's `any` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
    /// Any method outside the recognized set.
    Other,
}

impl Method {
    /// Map a method name (as it appears on the wire) to a [`Method`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            _ => Method::Other,
        }
    }

    /// The canonical name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Other => "OTHER",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_recognized() {
        assert_eq!(Method::from_name("GET"), Method::Get);
        assert_eq!(Method::from_name("POST"), Method::Post);
        assert_eq!(Method::from_name("PUT"), Method::Put);
        assert_eq!(Method::from_name("PATCH"), Method::Patch);
        assert_eq!(Method::from_name("DELETE"), Method::Delete);
    }

    #[test]
    fn test_from_name_unrecognized() {
        assert_eq!(Method::from_name("OPTIONS"), Method::Other);
        assert_eq!(Method::from_name("get"), Method::Other);
        assert_eq!(Method::from_name(""), Method::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
