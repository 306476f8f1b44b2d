pub mod errors;
pub mod format;
pub mod html;
pub mod json;
pub mod redirect;
pub mod text;

pub use errors::{error_to_response, ResultResp};
pub use format::Format;
pub use html::html_response;
pub use json::json_response;
pub use redirect::redirect;
pub use text::text_response;
