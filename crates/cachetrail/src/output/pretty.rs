//! Pretty output formatting.

use super::{Report, StoredEntry};

/// Format a stored entry for display.
pub fn format_entry(entry: &StoredEntry) -> String {
    let read_back = entry
        .read_back
        .as_ref()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "<absent>".to_string());
    format!(
        "{}\n  Stored: {}\n  Read back: {}",
        entry.key, entry.value, read_back
    )
}

/// Format a whole run for display: stored entries, then the replay.
pub fn format_report(report: &Report) -> String {
    let mut output = format!("STORED ({})\n", report.entries.len());
    output.push_str(&"-".repeat(40));
    for entry in &report.entries {
        output.push_str(&format!("\n{}", format_entry(entry)));
    }
    output.push_str("\n\n");
    output.push_str(&report.history.to_string());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachetrail_core::cache::{Key, StoredValue};
    use cachetrail_core::replay::CallHistory;

    use crate::cli::OutputFormat;
    use crate::output::format_output;

    fn sample_report() -> Report {
        Report {
            entries: vec![StoredEntry {
                key: Key::from("k1"),
                value: StoredValue::from("hello"),
                read_back: Some(StoredValue::from("hello")),
            }],
            history: CallHistory::from_lists(
                "Cache.store",
                1,
                vec!["\"hello\"".to_string()],
                vec!["k1".to_string()],
            ),
        }
    }

    #[test]
    fn test_format_entry_absent() {
        let entry = StoredEntry {
            key: Key::from("k1"),
            value: StoredValue::Int(1),
            read_back: None,
        };

        assert_eq!(
            format_entry(&entry),
            "k1\n  Stored: 1\n  Read back: <absent>"
        );
    }

    #[test]
    fn test_format_report() {
        let output = format_report(&sample_report());

        assert!(output.starts_with("STORED (1)\n"));
        assert!(output.contains("k1\n  Stored: \"hello\"\n  Read back: \"hello\""));
        assert!(output.ends_with("Cache.store was called 1 times:\nCache.store(\"hello\") -> k1"));
    }

    #[test]
    fn test_format_output_json() {
        let output = format_output(&sample_report(), OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["entries"][0]["key"], "k1");
        assert_eq!(json["entries"][0]["value"]["type"], "text");
        assert_eq!(json["entries"][0]["read_back"]["value"], "hello");
        assert_eq!(json["history"]["count"], 1);
    }
}
