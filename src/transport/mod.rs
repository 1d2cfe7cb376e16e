//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod request;
mod response;

pub use request::{HttpMethod, HttpRequest, build_request, normalize_base_url};
pub use response::{
    TransportError, decode_error_document, decode_json_response, decode_ping_response,
};
