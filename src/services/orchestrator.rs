use crate::domain::models::{
    FlowSettings, PrerequisiteReport, ProjectLayout, RunResult, SynthesisSummary,
};
use crate::services::reports::{render_summary, summarize};
use crate::services::runner::{run_logged, FlowError};
use crate::services::script::write_control_script;
use crate::services::toolchain::{missing_tools, SearchPath};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Drives one linear run: prerequisites, control script, place-and-route, summary.
pub struct FlowOrchestrator {
    layout: ProjectLayout,
    settings: FlowSettings,
    search: SearchPath,
    quiet: bool,
}

impl FlowOrchestrator {
    /// Computes the layout under `root` and creates the output directories.
    pub fn new(root: &Path, settings: FlowSettings) -> anyhow::Result<Self> {
        let layout = ProjectLayout::new(root);
        for dir in layout.output_dirs() {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self {
            layout,
            settings,
            search: SearchPath::from_env(),
            quiet: false,
        })
    }

    pub fn with_search_path(mut self, search: SearchPath) -> Self {
        self.search = search;
        self
    }

    /// Suppresses console output; used for `--json`.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn config_file(&self) -> PathBuf {
        self.layout.config_dir.join(&self.settings.flow.control_config)
    }

    fn say(&self, line: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", line.as_ref());
        }
    }

    pub fn prerequisites(&self) -> PrerequisiteReport {
        let missing = missing_tools(&self.settings.tools.required, &self.search);
        PrerequisiteReport {
            ok: missing.is_empty(),
            missing,
        }
    }

    pub fn check_prerequisites(&self) -> PrerequisiteReport {
        let report = self.prerequisites();
        if !report.ok {
            self.say(format!(
                "Error: Missing required tools: {}",
                report.missing.join(", ")
            ));
            self.say("Please install OpenROAD and required dependencies");
        }
        report
    }

    pub fn generate_control_script(&self) -> anyhow::Result<PathBuf> {
        let config = self.config_file();
        if !config.exists() {
            tracing::warn!(
                path = %config.display(),
                "control configuration not found; the script will fail to source it"
            );
        }
        write_control_script(&self.layout, &config)
    }

    /// Never fails: every error ends up in the returned [`RunResult`].
    pub fn run_synthesis(&self) -> RunResult {
        let rule = "=".repeat(70);
        self.say(&rule);
        self.say("Starting Vixen Dio Pro Synthesis Flow");
        self.say(&rule);

        let log_path = self.layout.synthesis_log();
        let start = Instant::now();
        let outcome = self.invoke_place_route(&log_path);
        let duration = start.elapsed();

        let mut result = RunResult {
            success: outcome.is_ok(),
            duration,
            log_path: log_path.display().to_string(),
            exit_code: None,
            error: None,
            summary: None,
        };

        match outcome {
            Ok(code) => {
                result.exit_code = code;
                self.say(format!(
                    "\nSynthesis completed successfully in {:.2} seconds!",
                    duration.as_secs_f64()
                ));
                result.summary = Some(self.print_summary());
            }
            Err(e) => {
                if let Some(t) = e.downcast_ref::<FlowError>() {
                    result.exit_code = t.exit_code();
                }
                tracing::error!(error = %e, "synthesis failed");
                self.say(format!("Error: {}", e));
                self.say(format!(
                    "\nSynthesis failed after {:.2} seconds.",
                    duration.as_secs_f64()
                ));
                self.say(format!("Check log file: {}", result.log_path));
                result.error = Some(e.to_string());
            }
        }
        result
    }

    fn invoke_place_route(&self, log_path: &Path) -> anyhow::Result<Option<i32>> {
        let script = match self.generate_control_script() {
            Ok(s) => s,
            Err(e) => {
                std::fs::write(log_path, format!("failed to write control script: {}\n", e))?;
                return Err(e.context("failed to write control script"));
            }
        };
        let tool = &self.settings.tools.place_route;
        let program = match self.search.resolve(tool) {
            Some(p) => p,
            None => {
                std::fs::write(log_path, format!("{} not found on search path\n", tool))?;
                anyhow::bail!("{} not found on search path", tool);
            }
        };

        let mut args = self.settings.tools.place_route_args.clone();
        args.push(script.display().to_string());
        self.say(format!("Running: {} {}", tool, args.join(" ")));

        run_logged(&program, &args, &self.layout.root, log_path)?;
        Ok(Some(0))
    }

    pub fn summary(&self) -> SynthesisSummary {
        summarize(&self.layout)
    }

    pub fn print_summary(&self) -> SynthesisSummary {
        let s = self.summary();
        self.say(render_summary(&s));
        s
    }
}
