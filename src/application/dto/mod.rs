/// Data Transfer Objects for application layer
mod prune_request;
mod prune_response;

pub use prune_request::PruneRequest;
pub use prune_response::PruneResponse;
