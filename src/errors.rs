// Copyright 2026 wireseam authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;

use crate::handler::HTTP_INTERNAL_SERVER_ERROR;

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Local defects in envelope construction.
///
/// These never reach a remote caller: a missing payload is a bug in the
/// handler implementation, not a wire-protocol condition, and it is
/// reported at construction time rather than carried downstream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("response envelope requires a payload")]
    MissingPayload,
}

/// A processing failure on its way into a response payload.
///
/// Handlers recover their own failures: whatever goes wrong while
/// producing a result is described as a `Fault`, which the message type
/// then absorbs through [`ErrorPayload`] so the remote caller still
/// receives a decodable response. The status code defaults to 500 and is
/// open to any protocol-specific value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    status_code: i32,
    message: String,
}

impl Fault {
    /// A fault with the conventional internal-failure code.
    pub fn internal(message: impl Into<String>) -> Self {
        Fault {
            status_code: HTTP_INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// A fault carrying a protocol-specific status code.
    pub fn with_status(status_code: i32, message: impl Into<String>) -> Self {
        Fault {
            status_code,
            message: message.into(),
        }
    }

    /// Flatten an error and its `source()` chain into a single fault.
    ///
    /// Wrapped causes frequently carry the interesting diagnosis, so the
    /// whole chain is joined into the message.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Fault::internal(message)
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Fault::internal(message)
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Fault::internal(message)
    }
}

/// Message types that can carry a failure description.
///
/// Implemented by the protocol's message type so that
/// [`HandlerResponse::from_result`](crate::HandlerResponse::from_result)
/// can turn any fault into an encodable payload.
pub trait ErrorPayload: Sized {
    /// Build the payload form of a processing failure.
    fn from_fault(fault: Fault) -> Self;
}
