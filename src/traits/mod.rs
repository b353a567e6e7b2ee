//! Seams between the app and the outside world.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Method, Request, Response};
