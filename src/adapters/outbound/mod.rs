/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod apt;
pub mod console;
pub mod filesystem;
pub mod formatters;
