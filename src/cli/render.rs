use console::style;

use crate::models::{Finding, Severity, Statistics};
use crate::triage::normalizer::NormalizationWarnings;

/// Render a severity badge with appropriate colors.
pub fn render_severity_badge(severity: &Severity) -> String {
    match severity {
        Severity::Critical => style(" CRITICAL ").on_red().white().bold().to_string(),
        Severity::High => style(" HIGH ").red().bold().to_string(),
        Severity::Medium => style(" MEDIUM ").yellow().bold().to_string(),
        Severity::Low => style(" LOW ").blue().to_string(),
        Severity::Informational => style(" INFO ").dim().to_string(),
        Severity::Unknown => style(" UNKNOWN ").magenta().to_string(),
    }
}

/// Render the report header box with provider and source details.
pub fn render_report_header(
    provider: &str,
    sources: &[(String, usize)],
    loaded_at: &str,
) -> String {
    let mut out = String::new();

    let w = 60;
    out.push_str(&format!(
        "\n  {}\n",
        style("╭".to_string() + &"─".repeat(w - 2) + "╮").cyan()
    ));
    out.push_str(&format!(
        "  {} {:<width$} {}\n",
        style("│").cyan(),
        style("FINDINGS TRIAGE REPORT").white().bold(),
        style("│").cyan(),
        width = w - 4,
    ));
    out.push_str(&format!(
        "  {} {:<width$} {}\n",
        style("│").cyan(),
        format!("Provider: {}", style(provider).white().bold()),
        style("│").cyan(),
        width = w - 4,
    ));

    let sources_line = if sources.is_empty() {
        "Sources:  none".to_string()
    } else {
        let parts: Vec<String> = sources
            .iter()
            .map(|(name, records)| format!("{} ({} records)", name, records))
            .collect();
        format!("Sources:  {}", parts.join("  "))
    };
    out.push_str(&format!(
        "  {} {:<width$} {}\n",
        style("│").cyan(),
        sources_line,
        style("│").cyan(),
        width = w - 4,
    ));
    out.push_str(&format!(
        "  {} {:<width$} {}\n",
        style("│").cyan(),
        format!("Loaded:   {}", loaded_at),
        style("│").cyan(),
        width = w - 4,
    ));
    out.push_str(&format!(
        "  {}\n",
        style("╰".to_string() + &"─".repeat(w - 2) + "╯").cyan()
    ));

    out
}

/// Render the per-severity bar chart.
pub fn render_severity_chart(stats: &Statistics) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n  {}\n",
        style("Findings by Severity").white().bold()
    ));
    out.push_str(&format!("  {}\n", style("─".repeat(46)).dim()));

    let labels = ["CRITICAL", "HIGH", "MEDIUM", "LOW", "INFO", "UNKNOWN"];
    let colors: Vec<Box<dyn Fn(&str) -> String>> = vec![
        Box::new(|s: &str| style(s).red().bold().to_string()),
        Box::new(|s: &str| style(s).red().to_string()),
        Box::new(|s: &str| style(s).yellow().to_string()),
        Box::new(|s: &str| style(s).blue().to_string()),
        Box::new(|s: &str| style(s).dim().to_string()),
        Box::new(|s: &str| style(s).magenta().to_string()),
    ];

    let counts: Vec<usize> = stats.counts.iter().map(|(_, c)| *c).collect();
    let max_count = *counts.iter().max().unwrap_or(&1).max(&1);

    for (i, severity) in Severity::ALL.iter().enumerate() {
        let count = *stats.counts.get(*severity);
        let pct = *stats.percentages.get(*severity);
        let bar_len = (count as f64 / max_count as f64 * 20.0).ceil() as usize;
        let bar = "█".repeat(bar_len);
        out.push_str(&format!(
            "   {:<12} {:>3}  {:>4}  {}\n",
            (colors[i])(labels[i]),
            count,
            format!("{}%", pct),
            (colors[i])(&bar),
        ));
    }

    out.push_str(&format!("  {}\n", style("─".repeat(46)).dim()));
    out.push_str(&format!(
        "   {:<12} {:>3}\n",
        style("Total").white().bold(),
        stats.total,
    ));

    out
}

/// Render the aggregate score line and any normalization warnings.
pub fn render_stats_block(stats: &Statistics, warnings: &NormalizationWarnings) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n  {} {}   {} {}\n",
        style("Average score:").dim(),
        style(format!("{:.1}", stats.average_score)).white().bold(),
        style("Unscored:").dim(),
        style(stats.unscored.to_string()).white(),
    ));

    if !warnings.is_empty() {
        out.push_str(&format!(
            "  {} {}\n",
            style("⚠").yellow().bold(),
            style(format!(
                "{} normalization warnings (unknown severities: {}, clamped scores: {}, skipped instances: {})",
                warnings.total(),
                warnings.unknown_severities,
                warnings.clamped_scores,
                warnings.skipped_instances,
            ))
            .yellow(),
        ));
    }

    out
}

/// Render a numbered findings table with severity, score, and source.
pub fn render_findings_table(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("\n  {}\n", style("No findings recorded.").dim());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style(format!("Findings ({}):", findings.len())).white().bold(),
    ));

    for (idx, finding) in findings.iter().enumerate() {
        let num = idx + 1; // 1-indexed
        let score = finding
            .score
            .map(|s| format!("{:.1}", s))
            .unwrap_or_else(|| "n/a".to_string());
        out.push_str(&format!(
            "  {} {} {} {} {}  {}\n",
            style(format!("[{:>2}]", num)).dim(),
            render_severity_badge(&finding.severity),
            style(format!("{:>4}", score)).white(),
            style(&finding.id).cyan(),
            style(finding.source.as_str()).dim(),
            finding.title,
        ));
    }
    out
}

/// Render a detailed view of a single finding.
pub fn render_finding_detail(finding: &Finding) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n  {} {}\n\n",
        style(&finding.id).cyan().bold(),
        render_severity_badge(&finding.severity),
    ));
    out.push_str(&format!(
        "  {:<16} {}\n",
        style("Title:").dim(),
        style(&finding.title).white().bold(),
    ));
    out.push_str(&format!(
        "  {:<16} {}\n",
        style("Source:").dim(),
        style(finding.source.as_str()).white(),
    ));
    if let Some(score) = finding.score {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style("Score:").dim(),
            style(format!("{:.1}", score)).white(),
        ));
    }
    if !finding.affected_targets.is_empty() {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style("Affects:").dim(),
            style(finding.affected_targets.join(", ")).white(),
        ));
    }

    if !finding.description.is_empty() {
        out.push_str(&format!(
            "\n  {}\n  {}\n",
            style("Description").white().bold(),
            truncate_chars(&finding.description, 500),
        ));
    }

    if let Some(remediation) = &finding.remediation {
        out.push_str(&format!(
            "\n  {}\n  {}\n",
            style("Remediation").white().bold(),
            remediation,
        ));
    }

    if !finding.references.is_empty() {
        out.push_str(&format!("\n  {}\n", style("References").white().bold()));
        for reference in &finding.references {
            out.push_str(&format!("    {}\n", style(reference).dim()));
        }
    }

    out
}

/// Print an error message.
pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

/// Print a success message.
pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let cut: String = text.chars().take(limit).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BySeverity, ScanSource};
    use crate::triage;

    fn make_finding(id: &str, severity: Severity, score: Option<f64>) -> Finding {
        Finding {
            id: id.to_string(),
            title: format!("{} title", id),
            description: "A test description".to_string(),
            remediation: Some("Fix it".to_string()),
            severity,
            score,
            source: ScanSource::ImageScan,
            affected_targets: vec!["openssl@1.1.1k".to_string()],
            references: vec!["https://nvd.example/1".to_string()],
        }
    }

    #[test]
    fn test_render_severity_badge_all_levels() {
        assert!(render_severity_badge(&Severity::Critical).contains("CRITICAL"));
        assert!(render_severity_badge(&Severity::High).contains("HIGH"));
        assert!(render_severity_badge(&Severity::Medium).contains("MEDIUM"));
        assert!(render_severity_badge(&Severity::Low).contains("LOW"));
        assert!(render_severity_badge(&Severity::Informational).contains("INFO"));
        assert!(render_severity_badge(&Severity::Unknown).contains("UNKNOWN"));
    }

    #[test]
    fn test_render_report_header_contains_provider_and_sources() {
        let output = render_report_header(
            "samples",
            &[("image_scan".to_string(), 7), ("dynamic_scan".to_string(), 6)],
            "2025-11-02T08:45:00Z",
        );
        assert!(output.contains("samples"));
        assert!(output.contains("image_scan (7 records)"));
        assert!(output.contains("dynamic_scan (6 records)"));
        assert!(output.contains("2025-11-02"));
    }

    #[test]
    fn test_render_report_header_without_sources() {
        let output = render_report_header("export-files", &[], "2025-11-02T08:45:00Z");
        assert!(output.contains("none"));
    }

    #[test]
    fn test_render_severity_chart_shows_counts_and_percentages() {
        let findings = vec![
            make_finding("a", Severity::Critical, Some(9.0)),
            make_finding("b", Severity::Critical, Some(8.0)),
            make_finding("c", Severity::Low, None),
            make_finding("d", Severity::Low, None),
        ];
        let stats = triage::summarize(&findings);
        let output = render_severity_chart(&stats);
        assert!(output.contains("CRITICAL"));
        assert!(output.contains("50%"));
        assert!(output.contains("Total"));
        assert!(output.contains("4"));
    }

    #[test]
    fn test_render_severity_chart_empty() {
        let stats = Statistics {
            total: 0,
            counts: BySeverity::default(),
            percentages: BySeverity::default(),
            average_score: 0.0,
            unscored: 0,
        };
        let output = render_severity_chart(&stats);
        assert!(output.contains("Total"));
        assert!(output.contains("0%"));
    }

    #[test]
    fn test_render_stats_block_with_warnings() {
        let stats = triage::summarize(&[make_finding("a", Severity::High, Some(7.0))]);
        let warnings = NormalizationWarnings {
            unknown_severities: 1,
            clamped_scores: 2,
            skipped_instances: 0,
        };
        let output = render_stats_block(&stats, &warnings);
        assert!(output.contains("7.0"));
        assert!(output.contains("3 normalization warnings"));
    }

    #[test]
    fn test_render_stats_block_without_warnings() {
        let stats = triage::summarize(&[]);
        let output = render_stats_block(&stats, &NormalizationWarnings::default());
        assert!(!output.contains("warnings"));
    }

    #[test]
    fn test_render_findings_table_numbered() {
        let findings = vec![
            make_finding("CVE-1", Severity::Critical, Some(9.8)),
            make_finding("CVE-2", Severity::Low, None),
        ];
        let output = render_findings_table(&findings);
        assert!(output.contains("[ 1]"));
        assert!(output.contains("[ 2]"));
        assert!(output.contains("CVE-1"));
        assert!(output.contains("9.8"));
        assert!(output.contains("n/a"));
    }

    #[test]
    fn test_render_findings_table_empty() {
        let output = render_findings_table(&[]);
        assert!(output.contains("No findings"));
    }

    #[test]
    fn test_render_finding_detail_all_fields() {
        let finding = make_finding("CVE-1", Severity::High, Some(7.5));
        let output = render_finding_detail(&finding);
        assert!(output.contains("CVE-1"));
        assert!(output.contains("CVE-1 title"));
        assert!(output.contains("7.5"));
        assert!(output.contains("openssl@1.1.1k"));
        assert!(output.contains("Fix it"));
        assert!(output.contains("https://nvd.example/1"));
    }

    #[test]
    fn test_render_finding_detail_truncates_description() {
        let mut finding = make_finding("CVE-1", Severity::High, None);
        finding.description = "A".repeat(600);
        let output = render_finding_detail(&finding);
        assert!(output.contains("..."));
        assert!(!output.contains(&"A".repeat(600)));
    }

    #[test]
    fn test_render_error_and_success() {
        assert!(render_error("boom").contains("boom"));
        assert!(render_success("done").contains("done"));
    }
}
