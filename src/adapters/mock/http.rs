//! Recording [`HttpClient`] double.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Method, Request, Response};

/// What the mock does for a route.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Answer with this response, any status
    Respond(Response),
    /// Fail before a response exists
    Fail(HttpError),
}

impl MockReply {
    /// Shorthand for `Respond(Response::new(status, body))`.
    pub fn status(status: u16, body: &str) -> Self {
        MockReply::Respond(Response::new(status, body.to_string()))
    }
}

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<(Method, String), MockReply>,
    fallback: Option<MockReply>,
    requests: Vec<Request>,
}

/// Routes are matched on method and exact URL. Unrouted requests get the
/// fallback, or [`HttpError::Other`] when none is set. Every request is
/// recorded. Clones share state.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.on(Method::Get, "https://api.test/v1/books/demo/", MockReply::status(200, "[]"));
/// client.send(Request::get("https://api.test/v1/books/demo/")).await?;
/// assert_eq!(client.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `method url` to `reply`, replacing any earlier route.
    pub fn on(&self, method: Method, url: &str, reply: MockReply) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((method, url.to_string()), reply);
    }

    pub fn fallback(&self, reply: MockReply) {
        self.state.lock().unwrap().fallback = Some(reply);
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let mut state = self.state.lock().unwrap();
        let key = (request.method, request.url.clone());
        let reply = state
            .routes
            .get(&key)
            .or(state.fallback.as_ref())
            .cloned();
        state.requests.push(request);

        match reply {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Fail(err)) => Err(err),
            None => Err(HttpError::Other(format!("no route for {} {}", key.0, key.1))),
        }
    }
}
