mod cycle_policy;

pub use cycle_policy::CyclePolicy;
