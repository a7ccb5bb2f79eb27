//! Report sinks. Implement ReportSink.

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;
