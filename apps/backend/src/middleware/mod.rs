pub mod request_context;
pub mod structured_logger;

pub use request_context::RequestContext;
pub use structured_logger::StructuredLogger;
