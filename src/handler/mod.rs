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

mod envelope;
mod request_handler;
mod status;

// response envelope
pub use envelope::HandlerResponse;

// handler contract and adapters
pub use request_handler::handler_fn;
pub use request_handler::FnHandler;
pub use request_handler::RequestHandler;

// status-code conventions
pub use status::reason_phrase;
pub use status::HTTP_INTERNAL_SERVER_ERROR;
pub use status::HTTP_OK;
