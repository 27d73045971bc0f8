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

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use super::envelope::HandlerResponse;

/// A unit that maps one decoded request to one response envelope.
///
/// The request arrives fully decoded; validating framing and encoding is
/// the decoder's job upstream. The return type is the bare envelope, so no
/// failure can cross `apply` as anything but a response: a handler that
/// cannot fulfill a request still returns an envelope whose payload
/// describes the failure and whose status code reflects it.
pub trait RequestHandler {
    /// The protocol's message type, accepted and returned alike.
    type Message: Send + 'static;

    /// Process one request and produce its response envelope.
    ///
    /// Callers may drive this from a single-threaded loop or concurrently
    /// from worker tasks; implementations that keep cross-request state
    /// bring their own synchronization.
    fn apply(
        &self,
        request: Self::Message,
    ) -> impl Future<Output = HandlerResponse<Self::Message>> + Send;
}

// A handler behind Arc applies as the handler itself, so one instance can
// be shared across worker tasks.
impl<H: RequestHandler> RequestHandler for Arc<H> {
    type Message = H::Message;

    fn apply(
        &self,
        request: Self::Message,
    ) -> impl Future<Output = HandlerResponse<Self::Message>> + Send {
        (**self).apply(request)
    }
}

/// Adapter turning an async closure into a [`RequestHandler`].
pub struct FnHandler<F, T> {
    f: F,
    _marker: PhantomData<fn(T) -> T>,
}

/// Wrap `f` as a handler for message type `T`.
pub fn handler_fn<F, Fut, T>(f: F) -> FnHandler<F, T>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = HandlerResponse<T>> + Send,
    T: Send + 'static,
{
    FnHandler {
        f,
        _marker: PhantomData,
    }
}

impl<F, Fut, T> RequestHandler for FnHandler<F, T>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = HandlerResponse<T>> + Send,
    T: Send + 'static,
{
    type Message = T;

    fn apply(&self, request: T) -> impl Future<Output = HandlerResponse<T>> + Send {
        (self.f)(request)
    }
}
