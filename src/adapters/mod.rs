/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with apt lists, the console and
/// output files.
pub mod outbound;
