/// CyclePolicy deciding what happens when the skill graph contains cycles
///
/// Reduction always terminates on cyclic input; the policy only controls
/// whether cycles are reported, tolerated or treated as an input error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Process cyclic input without comment
    Accept,
    /// Report each cycle and continue
    #[default]
    Warn,
    /// Abort the run before anything is written
    Reject,
}

impl CyclePolicy {
    pub fn reports_cycles(&self) -> bool {
        !matches!(self, CyclePolicy::Accept)
    }

    pub fn allows_cycles(&self) -> bool {
        !matches!(self, CyclePolicy::Reject)
    }
}

impl std::str::FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accept" => Ok(CyclePolicy::Accept),
            "warn" => Ok(CyclePolicy::Warn),
            "reject" => Ok(CyclePolicy::Reject),
            _ => Err(format!(
                "Invalid cycle policy: {}. Please specify 'accept', 'warn' or 'reject'",
                s
            )),
        }
    }
}

impl std::fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CyclePolicy::Accept => write!(f, "accept"),
            CyclePolicy::Warn => write!(f, "warn"),
            CyclePolicy::Reject => write!(f, "reject"),
        }
    }
}
