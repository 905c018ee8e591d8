use crate::domain::constants::{DESIGN_STEM, PROCESSOR_SPEC};
use crate::domain::models::{KeyFile, ProjectLayout, SpecLine, SynthesisSummary, TimingStatus};
use std::path::Path;

/// Looks for a slack section in the timing report. This is a presence
/// check only; slack values are never parsed.
pub fn timing_status(path: &Path) -> TimingStatus {
    if !path.exists() {
        return TimingStatus::Missing;
    }
    match std::fs::read_to_string(path) {
        Ok(content) if content.to_lowercase().contains("slack") => TimingStatus::SlackSection,
        Ok(_) => TimingStatus::NoSlackSection,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "timing report unreadable");
            TimingStatus::Unreadable
        }
    }
}

pub fn summarize(layout: &ProjectLayout) -> SynthesisSummary {
    let result = |ext: &str| {
        layout
            .results_dir
            .join(format!("{}.{}", DESIGN_STEM, ext))
            .display()
            .to_string()
    };
    let key_files = [
        ("Final netlist", "v"),
        ("Layout (DEF)", "def"),
        ("Timing (SDF)", "sdf"),
        ("Parasitics", "spef"),
    ]
    .into_iter()
    .map(|(label, ext)| KeyFile {
        label: label.to_string(),
        path: result(ext),
    })
    .collect();

    let gds = layout.results_dir.join(format!("{}.gds", DESIGN_STEM));

    SynthesisSummary {
        timing: timing_status(&layout.timing_report()),
        area_report: layout.area_report().exists(),
        power_report: layout.power_report().exists(),
        results_dir: layout.results_dir.display().to_string(),
        reports_dir: layout.reports_dir.display().to_string(),
        logs_dir: layout.logs_dir.display().to_string(),
        key_files,
        gds: gds.exists().then(|| gds.display().to_string()),
        processor: PROCESSOR_SPEC
            .iter()
            .map(|(label, value)| SpecLine {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn timing_message(status: TimingStatus) -> &'static str {
    match status {
        TimingStatus::Missing => "Timing report not found",
        TimingStatus::SlackSection => "Timing report generated",
        TimingStatus::NoSlackSection => "Check timing report for detailed analysis",
        TimingStatus::Unreadable => "Timing report available but could not be parsed",
    }
}

pub fn render_summary(s: &SynthesisSummary) -> String {
    let rule = "=".repeat(70);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "VIXEN DIO PRO SYNTHESIS SUMMARY".to_string(),
        rule,
        "Timing Analysis:".to_string(),
        format!("  - {}", timing_message(s.timing)),
    ];
    if s.area_report {
        lines.push("Area Analysis:".to_string());
        lines.push("  - Area report generated".to_string());
    }
    if s.power_report {
        lines.push("Power Analysis:".to_string());
        lines.push("  - Power report generated".to_string());
    }

    lines.push(String::new());
    lines.push("Output files available in:".to_string());
    lines.push(format!("  - Results: {}", s.results_dir));
    lines.push(format!("  - Reports: {}", s.reports_dir));
    lines.push(format!("  - Logs: {}", s.logs_dir));

    lines.push(String::new());
    lines.push("Key files:".to_string());
    for f in &s.key_files {
        lines.push(format!("  - {}: {}", f.label, f.path));
    }
    if let Some(gds) = &s.gds {
        lines.push(format!("  - Layout (GDS): {}", gds));
    }

    lines.push(String::new());
    lines.push("Processor specifications targeted:".to_string());
    for p in &s.processor {
        lines.push(format!("  - {}: {}", p.label, p.value));
    }
    lines.join("\n")
}
