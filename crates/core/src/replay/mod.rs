//! Call history value types and their text rendering (pure, no I/O).

use std::fmt;

use serde::{Deserialize, Serialize};

/// One recorded call: the rendered arguments paired with the rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub input: String,
    pub output: String,
}

/// Instrumentation trail of one method.
///
/// Inputs and outputs are recorded in two independent lists and paired by
/// position. A call that fails after its input was recorded leaves no
/// output, so every later input is paired with the output of the call after
/// it. The lists carry nothing that identifies the failed call; the pairing
/// is only reliable while `surplus_inputs` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHistory {
    /// Method identifier, e.g. `Cache.store`.
    pub method: String,
    /// Invocation counter value.
    pub count: u64,
    /// Calls pairing the Nth input with the Nth output.
    pub calls: Vec<CallRecord>,
    /// How many more inputs than outputs were recorded.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub surplus_inputs: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl CallHistory {
    /// Pairs the inputs and outputs lists index by index.
    ///
    /// Inputs beyond the last output are counted in `surplus_inputs`, not
    /// attributed: the failed calls may be anywhere in the sequence. Extra
    /// outputs cannot be produced by the history middleware and are dropped.
    pub fn from_lists(
        method: impl Into<String>,
        count: u64,
        inputs: Vec<String>,
        outputs: Vec<String>,
    ) -> Self {
        let surplus_inputs = inputs.len().saturating_sub(outputs.len());
        let calls = inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| CallRecord { input, output })
            .collect();

        Self {
            method: method.into(),
            count,
            calls,
            surplus_inputs,
        }
    }

    /// Returns an empty history for a method that was never called.
    pub fn empty(method: impl Into<String>) -> Self {
        Self::from_lists(method, 0, Vec::new(), Vec::new())
    }

    /// Whether every recorded input has an output.
    pub fn is_consistent(&self) -> bool {
        self.surplus_inputs == 0
    }
}

/// Renders the summary line followed by one line per call:
///
/// ```text
/// Cache.store was called 2 times:
/// Cache.store("foo") -> 1c1e0a6c-...
/// Cache.store(42) -> 5b4d2e80-...
/// ```
///
/// An inconsistent history ends with a line giving the number of inputs
/// without an output.
impl fmt::Display for CallHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called {} times:", self.method, self.count)?;
        for call in &self.calls {
            write!(f, "\n{}({}) -> {}", self.method, call.input, call.output)?;
        }
        if !self.is_consistent() {
            write!(
                f,
                "\n{} input(s) recorded without an output; pairings after the first failed call are unreliable",
                self.surplus_inputs
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pairs_inputs_with_outputs() {
        let history = CallHistory::from_lists(
            "Cache.store",
            2,
            strings(&["\"foo\"", "42"]),
            strings(&["k1", "k2"]),
        );

        assert_eq!(history.calls.len(), 2);
        assert_eq!(history.calls[1].input, "42");
        assert_eq!(history.calls[1].output, "k2");
        assert!(history.is_consistent());
    }

    #[test]
    fn test_counts_surplus_inputs() {
        let history = CallHistory::from_lists(
            "Cache.store",
            3,
            strings(&["a", "b", "c"]),
            strings(&["k1", "k3"]),
        );

        assert_eq!(history.calls.len(), 2);
        assert_eq!(history.surplus_inputs, 1);
        assert!(!history.is_consistent());
    }

    #[test]
    fn test_display() {
        let history = CallHistory::from_lists(
            "Cache.store",
            2,
            strings(&["\"foo\"", "42"]),
            strings(&["k1", "k2"]),
        );

        assert_eq!(
            history.to_string(),
            "Cache.store was called 2 times:\n\
             Cache.store(\"foo\") -> k1\n\
             Cache.store(42) -> k2"
        );
    }

    #[test]
    fn test_display_surplus_is_not_attributed() {
        let history = CallHistory::from_lists("Cache.store", 1, strings(&["1"]), Vec::new());

        assert_eq!(
            history.to_string(),
            "Cache.store was called 1 times:\n\
             1 input(s) recorded without an output; pairings after the first failed call are unreliable"
        );
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(
            CallHistory::empty("Cache.store").to_string(),
            "Cache.store was called 0 times:"
        );
    }

    #[test]
    fn test_json_omits_zero_surplus() {
        let history = CallHistory::from_lists("Cache.store", 1, strings(&["1"]), strings(&["k"]));
        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["calls"][0]["output"], "k");
        assert!(json.get("surplus_inputs").is_none());
    }
}
