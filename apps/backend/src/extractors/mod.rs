pub mod response_format;

pub use response_format::ResponseFormat;
