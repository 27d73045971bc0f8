//! Request handler and response envelope primitives for remote-procedure
//! wire protocols.
//!
//! A [`RequestHandler`] maps one decoded request to one [`HandlerResponse`]:
//! the immutable pairing of a response payload with an HTTP-style status
//! code. The envelope is the only thing that can leave a handler. Failures
//! are translated into error-describing payloads (see [`ErrorPayload`] and
//! [`Fault`]) instead of crossing the boundary as errors, so a stateless
//! transport layer downstream can always serialize something back to the
//! remote caller.
//!
//! Decoding requests from wire bytes, encoding response payloads, transport
//! and authentication all live outside this crate: handlers receive
//! well-formed values from the decoder and hand envelopes to the encoder.
//!
//! # Example
//!
//! ```ignore
//! use wireseam::{handler_fn, HandlerResponse, RequestHandler};
//!
//! let echo = handler_fn(|request: String| async move {
//!     HandlerResponse::success(request)
//! });
//! let envelope = echo.apply("ping".to_string()).await;
//! assert!(envelope.is_success());
//! ```

mod errors;
mod handler;

pub use errors::EnvelopeError;
pub use errors::EnvelopeResult;
pub use errors::ErrorPayload;
pub use errors::Fault;

pub use handler::handler_fn;
pub use handler::reason_phrase;
pub use handler::FnHandler;
pub use handler::HandlerResponse;
pub use handler::RequestHandler;
pub use handler::HTTP_INTERNAL_SERVER_ERROR;
pub use handler::HTTP_OK;
