use serde_json::json;
use tracing::info;

use crate::cli::commands::ReportArgs;
use crate::cli::render;
use crate::cli::{load_config, select_provider};
use crate::errors::ScandeckError;
use crate::models::ScanSource;
use crate::triage;

pub async fn handle_report(args: ReportArgs) -> Result<(), ScandeckError> {
    let config = load_config(args.config.as_deref()).await?;
    let provider = select_provider(&config);

    info!(provider = provider.provider_name(), "Building findings report");
    let snapshot = provider.fetch().await?;

    let filter: Option<ScanSource> = args
        .source
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(ScandeckError::Config)?;

    let batch = snapshot.normalize(filter)?;

    // Single-finding lookup short-circuits the full report.
    if let Some(id) = &args.id {
        let finding = triage::find_by_id(&batch.findings, id)
            .ok_or_else(|| ScandeckError::FindingNotFound(id.clone()))?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(finding)?);
        } else {
            println!("{}", render::render_finding_detail(finding));
        }
        return Ok(());
    }

    let findings = if args.sorted {
        triage::sort(&batch.findings)
    } else {
        batch.findings.clone()
    };
    let stats = triage::summarize(&findings);

    if args.json {
        let payload = json!({
            "stats": stats,
            "warnings": batch.warnings,
            "findings": findings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let sources: Vec<(String, usize)> = snapshot
        .sources()
        .iter()
        .map(|s| (s.to_string(), snapshot.record_count(*s)))
        .collect();

    print!(
        "{}",
        render::render_report_header(
            provider.provider_name(),
            &sources,
            &snapshot.loaded_at.to_rfc3339(),
        )
    );
    print!("{}", render::render_severity_chart(&stats));
    print!("{}", render::render_stats_block(&stats, &batch.warnings));
    println!("{}", render::render_findings_table(&findings));

    Ok(())
}
