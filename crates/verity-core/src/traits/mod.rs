mod assertion_source;
mod audit_sink;
mod generator;
mod synthesis_store;

pub use assertion_source::IAssertionSource;
pub use audit_sink::IAuditSink;
pub use generator::ISynthesisGenerator;
pub use synthesis_store::ISynthesisStore;
