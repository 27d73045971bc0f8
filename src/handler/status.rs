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

/// The handler completed and produced a valid result payload.
///
/// The payload may still encode an application-level error; this code only
/// says processing itself succeeded.
pub const HTTP_OK: i32 = 200;

/// The handler's processing failed; the payload encodes diagnostics.
pub const HTTP_INTERNAL_SERVER_ERROR: i32 = 500;

/// Reason phrase for the codes the contract defines.
///
/// The status domain is deliberately open (any `i32`, conventionally HTTP),
/// so unknown codes yield `None` rather than a guess.
pub fn reason_phrase(status_code: i32) -> Option<&'static str> {
    match status_code {
        HTTP_OK => Some("OK"),
        HTTP_INTERNAL_SERVER_ERROR => Some("Internal Server Error"),
        _ => None,
    }
}
