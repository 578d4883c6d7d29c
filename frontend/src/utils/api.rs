use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use web_sys::RequestCredentials;
use crate::config;
use crate::utils::cookie;
use serde::Serialize;

/// Entry point for calls to the payments backend. Every request carries the
/// session cookies and the CSRF token the server expects on mutations.
pub struct Api;

/// Request wrapper that attaches credentials and the CSRF header
pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn new(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = Request::post(&full_url).credentials(RequestCredentials::Include);

        Self {
            request,
            path: path.to_string(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Echo the `csrftoken` cookie back in the `X-CSRFToken` header. A missing
    /// cookie still sends the header, empty, so the server answers with its
    /// own rejection message.
    pub fn csrf(self) -> Self {
        let token = cookie::get_document_cookie(config::CSRF_COOKIE_NAME).unwrap_or_default();
        self.header(config::CSRF_HEADER_NAME, &token)
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self.request.header("Content-Type", "application/json");
        self.request = self.request.body(body_string);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        gloo_console::log!(format!("Sending request to {}", self.path));
        let response = self.request.send().await?;
        if !response.ok() {
            gloo_console::log!(format!("{} answered with status {}", self.path, response.status()));
        }
        Ok(response)
    }
}

impl Api {
    /// Create a POST request with automatic credentials and backend URL.
    /// The payments endpoints accept nothing else.
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path)
    }
}
