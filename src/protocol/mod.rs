//! Wire-level conventions of the Hey.Cafe API.
//!
//! Constants for the request flags, header names and envelope fields, plus the
//! small parsing and formatting helpers the transport needs.
//!
//! # Envelope
//!
//! Every response is a JSON object. The fields the client understands:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `response_data` | The payload. Absent means the whole body is the payload. |
//! | `system_api_error` | In-band error flag (boolean, or `"true"`/`"1"`/`"yes"`). |
//! | `system_api_error_message` | Message accompanying the flag. |

pub mod constants;
mod headers;

pub use headers::{bearer_value, error_message, is_truthy_flag};
