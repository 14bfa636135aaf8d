use crate::utils::Stopwatch;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::io::{self, Write};
use tracing::debug;

/// Timed iterations per case.
pub const ITERATIONS: usize = 50;

/// Compiles a pattern with `^`/`$` anchoring at line boundaries, the
/// semantics the bundled cases were written against.
pub fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .with_context(|| format!("failed to compile pattern: {pattern}"))
}

/// Scans `text` into a materialized match list.
pub fn scan_all<'t>(regex: &Regex, text: &'t str) -> Vec<&'t str> {
    regex.find_iter(text).map(|m| m.as_str()).collect()
}

/// Scans `text`, delivering each match to `callback`.
pub fn scan_with_callback<'t>(regex: &Regex, text: &'t str, mut callback: impl FnMut(&'t str)) {
    for m in regex.find_iter(text) {
        callback(m.as_str());
    }
}

/// Runs one benchmark case against `text`: a match-count header, then
/// `ITERATIONS` timed rounds of compile, scan into a list and scan with a
/// counting callback, followed by the three stopwatch reports.
pub fn bench(name: &str, pattern: &str, text: &str) -> Result<()> {
    debug!(name, pattern, bytes = text.len(), "running case");

    let matches = compile(pattern)?.find_iter(text).count();
    println!("\n{name}: {matches} matches");

    let mut compile_watch = Stopwatch::new("compile");
    let mut scan_watch = Stopwatch::new("scan");
    let mut callback_watch = Stopwatch::new("scan with callback");

    for _ in 0..ITERATIONS {
        print!(".");
        io::stdout().flush()?;

        let regex = compile_watch.lap(|| compile(pattern))?;
        let scan_count = scan_watch.lap(|| scan_all(&regex, text)).len();
        let callback_count = callback_watch.lap(|| {
            let mut count = 0_usize;
            scan_with_callback(&regex, text, |_| count += 1);
            count
        });

        // invariant self-check between the two scan styles
        assert_eq!(
            scan_count, callback_count,
            "count mismatch scanning {name}"
        );
    }

    println!("\n");
    println!("    {}", compile_watch.report());
    println!("    {}", scan_watch.report());
    println!("    {}", callback_watch.report());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::cases::CASES;

    const SAMPLE: &str = "\
## Section one

Contact ops@example.com or backup@example.org for access.
Docs live at https://www.example.com/guide?lang=en and http://example.net/a.
The gateway is 192.168.0.1, fallback dns 8.8.8.8, and 999.1.1.1 is not an address.

## Section two

Nothing to see here.
";

    #[test]
    fn test_scan_styles_agree_for_all_cases() {
        for case in CASES {
            let regex = compile(case.pattern).unwrap();

            let all = scan_all(&regex, SAMPLE);
            let mut count = 0_usize;
            scan_with_callback(&regex, SAMPLE, |_| count += 1);

            assert_eq!(all.len(), count, "{}", case.name);
        }
    }

    #[test]
    fn test_anchor_matches_line_starts() {
        let regex = compile(r"^## ").unwrap();

        assert_eq!(scan_all(&regex, SAMPLE).len(), 2);
        // anchored at line boundaries, not only at the start of the text
        assert_eq!(scan_all(&regex, "x\n## y\n").len(), 1);
    }

    #[test]
    fn test_scan_all_extracts_matches() {
        let regex = compile(r"[\w\.+-]+@[\w\.-]+\.[\w\.-]+").unwrap();

        assert_eq!(
            scan_all(&regex, SAMPLE),
            ["ops@example.com", "backup@example.org"]
        );
    }

    #[test]
    fn test_callback_sees_each_match() {
        let regex = compile(r"\d+\.\d+\.\d+\.\d+").unwrap();
        let mut seen = Vec::new();

        scan_with_callback(&regex, "10.0.0.1 then 10.0.0.2", |m| seen.push(m));

        assert_eq!(seen, ["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_anchor_count_against_bundled_fixture() {
        let text = crate::cli::fixtures::FixtureLoader::new(false)
            .load()
            .unwrap();
        let regex = compile(r"^## ").unwrap();

        assert_eq!(scan_all(&regex, &text).len(), 7);
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        assert!(compile(r"(unclosed").is_err());
    }

    #[test]
    fn test_bench_runs_on_empty_text() {
        // degraded loader input: no matches, but the case still completes
        bench("Anchor", r"^## ", "").unwrap();
    }
}
