/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the skill graph services and reaches the
/// table store and console only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
