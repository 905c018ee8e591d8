use crate::cli::Cli;
use crate::domain::models::{FlowReport, ProjectLayout};
use crate::services::orchestrator::FlowOrchestrator;
use crate::services::output::print_json;
use crate::services::settings::load_settings;

/// Runs prerequisites, then the synthesis run. Returns whether the flow succeeded.
pub fn handle_flow(cli: &Cli) -> anyhow::Result<bool> {
    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }
    let root = cli.project_root()?;
    let settings = load_settings(&ProjectLayout::new(&root).settings_file())?;
    let flow = FlowOrchestrator::new(&root, settings)?.quiet(cli.json);
    tracing::debug!(root = %flow.layout().root.display(), "project layout ready");

    let prerequisites = flow.check_prerequisites();
    if !prerequisites.ok {
        let report = FlowReport {
            prerequisites,
            run: None,
            summary: None,
        };
        if cli.json {
            print_json(false, &report)?;
        }
        return Ok(false);
    }

    let mut run = flow.run_synthesis();
    let summary = run.summary.take();
    let report = FlowReport {
        prerequisites,
        run: Some(run),
        summary,
    };
    let ok = report.ok();
    if cli.json {
        print_json(ok, &report)?;
    }
    Ok(ok)
}
