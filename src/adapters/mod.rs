/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: CSV files, stdout and stderr.
pub mod outbound;
