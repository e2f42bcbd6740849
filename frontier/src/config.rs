//! Run configuration, read from the environment.
//!
//!   FRONTIER_TRACE             dump the records to stderr after every extraction
//!   FRONTIER_CHECK_INVARIANTS  verify heap and frontier invariants after every extraction

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub trace: bool,
    pub check_invariants: bool,
}

impl RunConfig {
    pub fn new(trace: bool, check_invariants: bool) -> Self {
        Self { trace, check_invariants }
    }

    pub fn from_env() -> Self {
        Self::new(
            env_flag("FRONTIER_TRACE", false),
            env_flag("FRONTIER_CHECK_INVARIANTS", false),
        )
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.trace {
            parts.push("trace");
        }
        if self.check_invariants {
            parts.push("invariants");
        }
        if parts.is_empty() { "none".to_string() } else { parts.join("+") }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> bool {
    let v = value.to_ascii_lowercase();
    !(v == "0" || v == "false" || v == "off" || v == "disable")
}
