//! HTTP surface of Listy.
//!
//! Every response body is a [`dto::response::Envelope`]. Handlers translate
//! request shapes into workflow calls on [`state::AppState`] and map
//! workflow failures to status codes through [`errors::ApiError`].

pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
