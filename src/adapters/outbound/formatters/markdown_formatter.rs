use crate::application::read_models::{AiVendorAssessment, KeyIndicators, RiskReport};
use crate::ports::outbound::ReportFormatter;
use crate::risk_assessment::domain::ProjectedRow;
use crate::risk_assessment::services::{RiskMatrixCell, ValueCounts};
use crate::shared::Result;

/// Shown in place of a chart or table when the selection is empty
const NO_DATA: &str = "_No data to display based on current filters._\n\n";

/// MarkdownFormatter adapter for a human-readable risk report
///
/// Mirrors the dashboard layout: key indicators, risk matrix and compliance
/// breakdowns, the AI vendor assessment, then the vendor table.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_table(output: &mut String, headers: &[&str], rows: &[Vec<String>]) {
        output.push_str(&format!("| {} |\n", headers.join(" | ")));
        let separators: Vec<String> = headers.iter().map(|h| "-".repeat(h.len())).collect();
        output.push_str(&format!("|{}|\n", separators.join("|")));

        for row in rows {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| Self::escape_markdown_table_cell(cell))
                .collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');
    }

    fn render_rows(output: &mut String, rows: &[ProjectedRow]) {
        let Some(first) = rows.first() else {
            output.push_str(NO_DATA);
            return;
        };
        let headers: Vec<&str> = first.cells().iter().map(|(f, _)| f.header()).collect();
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.values().map(|v| v.to_string()).collect())
            .collect();
        Self::render_table(output, &headers, &cells);
    }

    fn render_counts(output: &mut String, label: &str, counts: &ValueCounts) {
        if counts.is_empty() {
            output.push_str(NO_DATA);
            return;
        }
        let total = counts.total() as f64;
        let rows: Vec<Vec<String>> = counts
            .iter()
            .map(|entry| {
                vec![
                    entry.value.clone(),
                    entry.count.to_string(),
                    format!("{:.1}%", entry.count as f64 * 100.0 / total),
                ]
            })
            .collect();
        Self::render_table(output, &[label, "Vendors", "Share"], &rows);
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &RiskReport) {
        output.push_str("# Third-Party Vendor Risk Assessment\n\n");
        output.push_str(&format!(
            "- Source: {}\n- Generated: {}\n- Report ID: {}\n- Dataset fingerprint: `{}`\n\n",
            report.metadata.source,
            report.metadata.generated_at,
            report.metadata.report_id,
            report.metadata.dataset_fingerprint
        ));
    }

    fn render_key_indicators(&self, output: &mut String, indicators: &KeyIndicators) {
        output.push_str("## Key Risk Indicators\n\n");
        let rows = vec![
            vec![
                "Total Vendors Selected".to_string(),
                format!(
                    "{} of {}",
                    indicators.total_vendors, indicators.loaded_vendors
                ),
            ],
            vec![
                format!("High-Risk Vendors (score > {})", indicators.high_risk_threshold),
                indicators.high_risk_vendors.to_string(),
            ],
            vec![
                "AI-Powered Vendors".to_string(),
                indicators.ai_vendors.to_string(),
            ],
            vec![
                "Avg. Breach Likelihood".to_string(),
                format!("{:.0}%", indicators.mean_breach_likelihood),
            ],
        ];
        Self::render_table(output, &["Metric", "Value"], &rows);
    }

    /// Impact on rows (5 at the top), likelihood on columns
    fn render_risk_matrix(&self, output: &mut String, cells: &[RiskMatrixCell]) {
        output.push_str("## Vendor Risk Matrix\n\n");
        if cells.iter().all(|cell| cell.count == 0) {
            output.push_str(NO_DATA);
            return;
        }

        let mut likelihoods: Vec<u8> = cells.iter().map(|c| c.likelihood).collect();
        likelihoods.sort_unstable();
        likelihoods.dedup();
        let mut impacts: Vec<u8> = cells.iter().map(|c| c.impact).collect();
        impacts.sort_unstable_by(|a, b| b.cmp(a));
        impacts.dedup();

        let headers: Vec<String> = std::iter::once("Impact \\ Likelihood".to_string())
            .chain(likelihoods.iter().map(|l| l.to_string()))
            .collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

        let rows: Vec<Vec<String>> = impacts
            .iter()
            .map(|impact| {
                std::iter::once(impact.to_string())
                    .chain(likelihoods.iter().map(|likelihood| {
                        cells
                            .iter()
                            .find(|c| c.impact == *impact && c.likelihood == *likelihood)
                            .map_or(0, |c| c.count)
                            .to_string()
                    }))
                    .collect()
            })
            .collect();
        Self::render_table(output, &header_refs, &rows);
    }

    fn render_distributions(&self, output: &mut String, report: &RiskReport) {
        output.push_str("## ISO 27001 Compliance Status\n\n");
        Self::render_counts(output, "Status", &report.iso27001_distribution);
        output.push_str("## NIST CSF Adoption\n\n");
        Self::render_counts(output, "Adoption", &report.nist_csf_distribution);
        output.push_str("## Risk Level Distribution\n\n");
        Self::render_counts(output, "Risk Level", &report.risk_level_distribution);
    }

    fn render_ai_assessment(&self, output: &mut String, assessment: Option<&AiVendorAssessment>) {
        output.push_str("## AI Vendor Assessment\n\n");
        let Some(ai) = assessment else {
            output.push_str("_No AI vendors found with the current filter settings._\n\n");
            return;
        };

        output.push_str(&format!(
            "- Total AI Vendors Selected: {}\n- AI Vendors with Vulnerabilities: {}\n\n",
            ai.total_ai_vendors, ai.vulnerable_ai_vendors
        ));
        output.push_str("### OWASP LLM Risk Breakdown\n\n");
        Self::render_counts(output, "OWASP Risk Type", &ai.owasp_breakdown);
        output.push_str("### AI Vendor Details\n\n");
        Self::render_rows(output, &ai.vendors);
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &RiskReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_key_indicators(&mut output, &report.key_indicators);
        self.render_risk_matrix(&mut output, &report.risk_matrix);
        self.render_distributions(&mut output, report);
        self.render_ai_assessment(&mut output, report.ai_assessment.as_ref());

        output.push_str("## Filtered Vendor Details\n\n");
        Self::render_rows(&mut output, &report.vendors);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support;

    fn format(report: &RiskReport) -> String {
        MarkdownFormatter::new().format(report).unwrap()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_key_indicators_section() {
        let output = format(&test_support::report());

        assert!(output.starts_with("# Third-Party Vendor Risk Assessment"));
        assert!(output.contains("| Total Vendors Selected | 3 of 3 |"));
        assert!(output.contains("| High-Risk Vendors (score > 15) | 1 |"));
        assert!(output.contains("| AI-Powered Vendors | 1 |"));
        assert!(output.contains("| Avg. Breach Likelihood | 29% |"));
    }

    #[test]
    fn test_risk_matrix_puts_highest_impact_first() {
        let output = format(&test_support::report());
        let matrix = output
            .split("## Vendor Risk Matrix")
            .nth(1)
            .unwrap();

        assert!(matrix.contains("| Impact \\ Likelihood | 1 | 2 | 3 | 4 | 5 |"));
        let five = matrix.find("| 5 | 0 | 0 | 0 | 1 | 0 |").unwrap();
        let one = matrix.find("| 1 | 0 | 0 | 0 | 1 | 0 |").unwrap();
        assert!(five < one);
    }

    #[test]
    fn test_distribution_shares() {
        let output = format(&test_support::report());
        assert!(output.contains("| Partially Compliant | 3 | 100.0% |"));
        assert!(output.contains("| Low | 1 | 33.3% |"));
    }

    #[test]
    fn test_ai_section() {
        let output = format(&test_support::report());
        assert!(output.contains("- AI Vendors with Vulnerabilities: 1"));
        assert!(output.contains("| Prompt Injection | 1 | 100.0% |"));
        assert!(output.contains(
            "| VendorName | ServiceType | OverallRiskScore | BreachLikelihoodScore | OWASP_LLM_Check |"
        ));
    }

    #[test]
    fn test_vendor_table_escapes_pipes() {
        let output = format(&test_support::report());
        assert!(output.contains("| 3 | Acme \\| Partners | Consulting | UK |"));
        assert!(output.contains("| True | Prompt Injection: Vulnerable | 29 |"));
    }

    #[test]
    fn test_empty_selection_renders_placeholders() {
        let report = test_support::report_with(|s| s.with_countries(Vec::new()));
        let output = format(&report);

        assert!(output.contains("| Total Vendors Selected | 0 of 3 |"));
        assert!(output.contains("| Avg. Breach Likelihood | 0% |"));
        assert!(output.contains("No data to display based on current filters"));
        assert!(output.contains("No AI vendors found"));
    }
}
