/// Use cases module containing application business logic orchestration
mod prune_dependencies;

pub use prune_dependencies::PruneDependenciesUseCase;
