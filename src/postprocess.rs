//! Output post-processing
//!
//! Stop-sequence truncation of raw provider output. The provider may already
//! honor stop sequences; truncating again locally keeps results deterministic
//! across providers that do not.

/// Truncate `output` before the earliest occurrence of any non-empty stop sequence.
///
/// When two sequences start at the same index the one listed first wins.
/// Returns `output` unchanged when nothing matches.
pub fn trim_at_stop_sequences<'a, S: AsRef<str>>(output: &'a str, stop_sequences: &[S]) -> &'a str {
    let mut cut: Option<usize> = None;

    for sequence in stop_sequences {
        let sequence = sequence.as_ref();
        if sequence.is_empty() {
            continue;
        }
        if let Some(index) = output.find(sequence) {
            if cut.map_or(true, |current| index < current) {
                cut = Some(index);
            }
        }
    }

    match cut {
        Some(index) => &output[..index],
        None => output,
    }
}

/// Parse a comma-separated stop sequence list, trimming entries and dropping empties.
pub fn parse_stop_sequences(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
