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

use tracing::warn;

use crate::errors::{EnvelopeError, EnvelopeResult, ErrorPayload, Fault};

use super::status::{HTTP_INTERNAL_SERVER_ERROR, HTTP_OK};

/// Immutable pairing of a response payload and a status code.
///
/// One envelope is produced per handler invocation, consumed once by the
/// encoder/transport to produce wire output, then discarded. The payload is
/// required: an envelope cannot exist without one, and the fields cannot
/// change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse<T> {
    response: T,
    status_code: i32,
}

impl<T> HandlerResponse<T> {
    /// Envelope from a payload and a status code.
    ///
    /// Payload presence is enforced by the type; callers holding an
    /// `Option` go through [`try_new`](Self::try_new) instead.
    pub fn new(response: T, status_code: i32) -> Self {
        HandlerResponse {
            response,
            status_code,
        }
    }

    /// Validated construction for a maybe-absent payload.
    ///
    /// Fails immediately with [`EnvelopeError::MissingPayload`] when the
    /// payload is `None`, for every status code value. This guards against
    /// handler implementations silently producing unencodable responses.
    pub fn try_new(response: Option<T>, status_code: i32) -> EnvelopeResult<Self> {
        match response {
            Some(response) => Ok(HandlerResponse {
                response,
                status_code,
            }),
            None => Err(EnvelopeError::MissingPayload),
        }
    }

    /// Envelope with the conventional success code (200).
    pub fn success(response: T) -> Self {
        HandlerResponse::new(response, HTTP_OK)
    }

    /// Envelope with the conventional internal-failure code (500).
    pub fn failure(response: T) -> Self {
        HandlerResponse::new(response, HTTP_INTERNAL_SERVER_ERROR)
    }

    pub fn response(&self) -> &T {
        &self.response
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Whether the status code is exactly 200.
    pub fn is_success(&self) -> bool {
        self.status_code == HTTP_OK
    }

    /// Consume the envelope, yielding the payload.
    pub fn into_response(self) -> T {
        self.response
    }

    /// Consume the envelope, yielding payload and status code for the
    /// encoder/transport.
    pub fn into_parts(self) -> (T, i32) {
        (self.response, self.status_code)
    }

    /// Transform the payload, keeping the status code.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> HandlerResponse<U> {
        HandlerResponse {
            response: f(self.response),
            status_code: self.status_code,
        }
    }
}

impl<T: ErrorPayload> HandlerResponse<T> {
    /// Translate a processing result into an envelope.
    ///
    /// `Ok` becomes a success envelope. `Err` is absorbed: the fault is
    /// logged, rendered into the message type via [`ErrorPayload`], and
    /// returned under the fault's status code. Every failure path through a
    /// handler can end here, so nothing ever escapes `apply` as an
    /// unstructured error.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<Fault>,
    {
        match result {
            Ok(response) => HandlerResponse::success(response),
            Err(err) => {
                let fault: Fault = err.into();
                warn!(
                    "request processing failed with status {}: {}",
                    fault.status_code(),
                    fault
                );
                let status_code = fault.status_code();
                HandlerResponse::new(T::from_fault(fault), status_code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(200)]
    #[case(204)]
    #[case(429)]
    #[case(500)]
    #[case(999)]
    #[case(0)]
    #[case(-1)]
    fn construction_round_trips_payload_and_code(#[case] status_code: i32) {
        let envelope = HandlerResponse::new("payload", status_code);
        assert_eq!(*envelope.response(), "payload");
        assert_eq!(envelope.status_code(), status_code);
    }

    #[rstest]
    #[case(200)]
    #[case(204)]
    #[case(429)]
    #[case(500)]
    #[case(999)]
    #[case(0)]
    #[case(-1)]
    fn try_new_without_payload_fails_for_every_code(#[case] status_code: i32) {
        let result = HandlerResponse::<String>::try_new(None, status_code);
        assert_eq!(result, Err(EnvelopeError::MissingPayload));
    }

    #[test]
    fn try_new_with_payload_matches_new() {
        let validated = HandlerResponse::try_new(Some("payload"), 200).unwrap();
        assert_eq!(validated, HandlerResponse::new("payload", 200));
    }

    #[test]
    fn success_and_failure_pick_the_conventional_codes() {
        assert_eq!(HandlerResponse::success(1).status_code(), HTTP_OK);
        assert_eq!(
            HandlerResponse::failure(1).status_code(),
            HTTP_INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn is_success_means_exactly_200() {
        assert!(HandlerResponse::success(()).is_success());
        assert!(!HandlerResponse::failure(()).is_success());
        assert!(!HandlerResponse::new((), 204).is_success());
    }

    #[test]
    fn into_parts_consumes_the_envelope() {
        let envelope = HandlerResponse::new(vec![1u8, 2, 3], 200);
        assert_eq!(envelope.into_parts(), (vec![1u8, 2, 3], 200));
    }

    #[test]
    fn into_response_yields_the_payload() {
        assert_eq!(HandlerResponse::failure("diagnostics").into_response(), "diagnostics");
    }

    #[test]
    fn map_keeps_the_status_code() {
        let envelope = HandlerResponse::new(21, 429).map(|n| n * 2);
        assert_eq!(envelope.into_parts(), (42, 429));
    }

    #[derive(Debug, PartialEq)]
    enum Reply {
        Data(&'static str),
        Failed { status_code: i32, message: String },
    }

    impl ErrorPayload for Reply {
        fn from_fault(fault: Fault) -> Self {
            Reply::Failed {
                status_code: fault.status_code(),
                message: fault.message().to_string(),
            }
        }
    }

    #[test]
    fn from_result_ok_is_a_success_envelope() {
        let envelope = HandlerResponse::from_result(Ok::<_, Fault>(Reply::Data("rows")));
        assert!(envelope.is_success());
        assert_eq!(*envelope.response(), Reply::Data("rows"));
    }

    #[test]
    fn from_result_err_translates_the_fault() {
        let envelope =
            HandlerResponse::from_result(Err::<Reply, _>(Fault::internal("backend unavailable")));
        assert_eq!(envelope.status_code(), HTTP_INTERNAL_SERVER_ERROR);
        assert_eq!(
            *envelope.response(),
            Reply::Failed {
                status_code: 500,
                message: "backend unavailable".to_string(),
            }
        );
    }

    #[test]
    fn from_result_keeps_extension_codes() {
        let envelope =
            HandlerResponse::from_result(Err::<Reply, _>(Fault::with_status(429, "throttled")));
        assert_eq!(envelope.status_code(), 429);
    }
}
