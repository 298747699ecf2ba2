//! Request extension trait for deriving the link base URL.

/// Extension trait for building the base URL used in pagination links.
///
/// The base URL is the request's scheme, authority, and path with the query
/// string stripped; the calculator appends its own `page`/`size` query.
pub trait RequestExt {
    fn base_url(&self) -> String;
}

impl RequestExt for actix_web::HttpRequest {
    fn base_url(&self) -> String {
        let info = self.connection_info();
        format!("{}://{}{}", info.scheme(), info.host(), self.path())
    }
}
