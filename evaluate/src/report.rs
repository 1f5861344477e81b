use std::array;

use papyeval::{Agreement, Comparison, Totals};

const WARNING: &str = "\x1b[93m";
const FAIL: &str = "\x1b[91m";
const ENDC: &str = "\x1b[0m";

const HEADERS: [&str; 3] = ["Form", "Db", "Tagger"];

/// Renderer of the textual report.
pub struct Report {
    color: bool,
}

impl Report {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn emphasize(&self, cell: String, agreement: Agreement) -> String {
        if !self.color {
            return cell;
        }
        match agreement {
            Agreement::Equal => cell,
            Agreement::DisagreeLow => format!("{WARNING}{cell}{ENDC}"),
            Agreement::DisagreeHigh => format!("{FAIL}{cell}{ENDC}"),
        }
    }

    /// Renders the token-wise comparison of a sentence as a three-column table.
    pub fn comparisons(&self, comparisons: &[Comparison]) -> String {
        let rows: Vec<[&str; 3]> = comparisons
            .iter()
            .map(|c| [c.token.as_str(), c.gold.as_str(), c.predicted.as_str()])
            .collect();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut table = String::new();
        let line = |cells: [String; 3]| cells.join("  ").trim_end().to_string();
        table.push_str(&line(array::from_fn(|i| pad_cell(HEADERS[i], widths[i]))));
        table.push('\n');
        table.push_str(&line(widths.map(|w| "-".repeat(w))));
        for (row, comparison) in rows.iter().zip(comparisons) {
            table.push('\n');
            let token = pad_cell(row[0], widths[0]);
            let gold = self.emphasize(pad_cell(row[1], widths[1]), comparison.agreement);
            let predicted = self.emphasize(pad_cell(row[2], widths[2]), comparison.agreement);
            table.push_str(&line([token, gold, predicted]));
        }
        table
    }

    /// Renders the running totals.
    pub fn totals(&self, totals: &Totals) -> String {
        format!(
            "accuracy: {}\nsamples: {}\nconfidence-filtered accuracy: {}\nconfident samples: {}",
            format_ratio(totals.accuracy()),
            totals.samples(),
            format_ratio(totals.confidence_filtered_accuracy()),
            totals.confident_samples(),
        )
    }

    /// Renders the most frequent mismatches.
    pub fn mismatches(&self, ranking: &[(&str, usize)]) -> String {
        ranking
            .iter()
            .map(|(token, count)| format!("({token}, {count})"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn pad_cell(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut padded = cell.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{r:.4}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparisons() -> Vec<Comparison> {
        vec![
            Comparison::new("και", "c--------", "c--------", 0.99),
            Comparison::new("λογον", "n-s---ma-", "n-s---mn-", 0.5),
            Comparison::new("ἔγραψα", "v1saia---", "v1sria---", 0.95),
        ]
    }

    #[test]
    fn test_comparisons_plain() {
        let report = Report::new(false);

        let expected = "\
Form    Db         Tagger
------  ---------  ---------
και     c--------  c--------
λογον   n-s---ma-  n-s---mn-
ἔγραψα  v1saia---  v1sria---";
        assert_eq!(expected, report.comparisons(&comparisons()));
    }

    #[test]
    fn test_comparisons_colored() {
        let report = Report::new(true);
        let table = report.comparisons(&comparisons());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!("και     c--------  c--------", lines[2]);
        assert_eq!(
            "λογον   \x1b[93mn-s---ma-\x1b[0m  \x1b[93mn-s---mn-\x1b[0m",
            lines[3]
        );
        assert_eq!(
            "ἔγραψα  \x1b[91mv1saia---\x1b[0m  \x1b[91mv1sria---\x1b[0m",
            lines[4]
        );
    }

    #[test]
    fn test_totals() {
        let report = Report::new(false);
        let totals = Totals {
            goods: 3,
            bads: 1,
            goods_acc: 1,
            bads_acc: 0,
        };

        assert_eq!(
            "accuracy: 0.7500\nsamples: 4\nconfidence-filtered accuracy: 1.0000\nconfident samples: 1",
            report.totals(&totals)
        );
    }

    #[test]
    fn test_totals_empty() {
        let report = Report::new(false);

        assert!(report.totals(&Totals::default()).starts_with("accuracy: n/a\n"));
    }

    #[test]
    fn test_mismatches() {
        let report = Report::new(false);

        assert_eq!("(A, 5) | (B, 5) | (C, 3)", report.mismatches(&[("A", 5), ("B", 5), ("C", 3)]));
        assert_eq!("", report.mismatches(&[]));
    }
}
