//! Run totals and human-readable formatting

use std::fmt;
use std::time::Duration;
use webpify_core::{savings_percent, ConversionResult, Outcome};

/// Totals over a batch of conversion results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Files written
    pub converted: usize,
    /// Files left alone because their WebP already existed
    pub skipped: usize,
    /// Files that failed
    pub failed: usize,
    /// Bytes of the converted sources
    pub original_bytes: u64,
    /// Bytes of the written WebP files
    pub output_bytes: u64,
    /// Wall time of the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Tallies a finished run
    pub fn from_results(results: &[ConversionResult], elapsed: Duration) -> Self {
        let mut summary = Self {
            elapsed,
            ..Default::default()
        };

        for result in results {
            match result.outcome {
                Outcome::Converted {
                    original_bytes,
                    output_bytes,
                    ..
                } => {
                    summary.converted += 1;
                    summary.original_bytes += original_bytes;
                    summary.output_bytes += output_bytes;
                }
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed { .. } => summary.failed += 1,
            }
        }

        summary
    }

    /// Total number of files seen
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    /// Size reduction over all converted files, in percent
    pub fn savings_percent(&self) -> f64 {
        savings_percent(self.original_bytes, self.output_bytes)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted, {} skipped, {} failed in {}",
            self.converted,
            self.skipped,
            self.failed,
            format_duration(self.elapsed)
        )?;
        if self.converted > 0 {
            let savings = self.savings_percent();
            let direction = if savings < 0.0 { "larger" } else { "smaller" };
            write!(
                f,
                " ({} → {}, {:.1}% {})",
                format_kib(self.original_bytes),
                format_kib(self.output_bytes),
                savings.abs(),
                direction
            )?;
        }
        Ok(())
    }
}

/// Formats a byte count as kibibytes with one decimal
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// Formats a run duration as `4.3s` or `2m 5s`
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }
    let whole = elapsed.as_secs();
    format!("{}m {}s", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use webpify_core::FailureKind;

    fn result(outcome: Outcome) -> ConversionResult {
        ConversionResult::new(PathBuf::from("a.png"), PathBuf::from("a.webp"), outcome)
    }

    #[test]
    fn test_tally() {
        let results = vec![
            result(Outcome::Converted {
                original_bytes: 3000,
                output_bytes: 1000,
                width: 10,
                height: 10,
                flattened: false,
            }),
            result(Outcome::Converted {
                original_bytes: 1000,
                output_bytes: 1000,
                width: 10,
                height: 10,
                flattened: true,
            }),
            result(Outcome::Skipped),
            result(Outcome::Failed {
                kind: FailureKind::Decode,
                message: "bad".into(),
            }),
        ];

        let summary = RunSummary::from_results(&results, Duration::from_millis(1500));

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.savings_percent(), 50.0);
        assert_eq!(
            summary.to_string(),
            "2 converted, 1 skipped, 1 failed in 1.5s (3.9KB → 2.0KB, 50.0% smaller)"
        );
    }

    #[test]
    fn test_empty_run() {
        let summary = RunSummary::from_results(&[], Duration::ZERO);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.to_string(), "0 converted, 0 skipped, 0 failed in 0.0s");
    }

    #[test]
    fn test_output_growth_reads_as_larger() {
        let results = vec![result(Outcome::Converted {
            original_bytes: 1000,
            output_bytes: 1120,
            width: 10,
            height: 10,
            flattened: false,
        })];

        let summary = RunSummary::from_results(&results, Duration::from_secs(2));

        assert_eq!(
            summary.to_string(),
            "1 converted, 0 skipped, 0 failed in 2.0s (1.0KB → 1.1KB, 12.0% larger)"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(4310)), "4.3s");
        assert_eq!(format_duration(Duration::from_millis(125_400)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "62m 5s");
    }
}
