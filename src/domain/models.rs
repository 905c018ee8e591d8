use crate::domain::constants::{
    AREA_REPORT_FILE, CONFIG_DIR, CONTROL_CONFIG_FILE, CONTROL_SCRIPT_FILE,
    DEFAULT_REQUIRED_TOOLS, LOGS_DIR, PLACE_ROUTE_TOOL, POWER_REPORT_FILE, REPORTS_DIR,
    RESULTS_DIR, SCRIPTS_DIR, SETTINGS_FILE, SYNTHESIS_LOG_FILE, TIMING_REPORT_FILE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

fn default_place_route() -> String {
    PLACE_ROUTE_TOOL.to_string()
}

fn default_required() -> Vec<String> {
    DEFAULT_REQUIRED_TOOLS.iter().map(|t| t.to_string()).collect()
}

fn default_place_route_args() -> Vec<String> {
    vec!["-no_splash".to_string()]
}

fn default_control_config() -> String {
    CONTROL_CONFIG_FILE.to_string()
}

/// Contents of `config/flow.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct FlowSettings {
    #[serde(default)]
    pub tools: ToolSettings,
    #[serde(default)]
    pub flow: FlowSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ToolSettings {
    #[serde(default = "default_place_route")]
    pub place_route: String,
    #[serde(default = "default_required")]
    pub required: Vec<String>,
    #[serde(default = "default_place_route_args")]
    pub place_route_args: Vec<String>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            place_route: default_place_route(),
            required: default_required(),
            place_route_args: default_place_route_args(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FlowSection {
    /// File name under `config/` sourced by the control script.
    #[serde(default = "default_control_config")]
    pub control_config: String,
}

impl Default for FlowSection {
    fn default() -> Self {
        Self {
            control_config: default_control_config(),
        }
    }
}

/// Fixed directory layout under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub results_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config_dir: PathBuf,
    pub scripts_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            results_dir: root.join(RESULTS_DIR),
            reports_dir: root.join(REPORTS_DIR),
            logs_dir: root.join(LOGS_DIR),
            config_dir: root.join(CONFIG_DIR),
            scripts_dir: root.join(SCRIPTS_DIR),
        }
    }

    /// Directories that must exist before the tool runs.
    pub fn output_dirs(&self) -> [&Path; 4] {
        [
            self.results_dir.as_path(),
            self.reports_dir.as_path(),
            self.logs_dir.as_path(),
            self.config_dir.as_path(),
        ]
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn control_script(&self) -> PathBuf {
        self.scripts_dir.join(CONTROL_SCRIPT_FILE)
    }

    pub fn synthesis_log(&self) -> PathBuf {
        self.logs_dir.join(SYNTHESIS_LOG_FILE)
    }

    pub fn timing_report(&self) -> PathBuf {
        self.reports_dir.join(TIMING_REPORT_FILE)
    }

    pub fn power_report(&self) -> PathBuf {
        self.reports_dir.join(POWER_REPORT_FILE)
    }

    pub fn area_report(&self) -> PathBuf {
        self.reports_dir.join(AREA_REPORT_FILE)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrerequisiteReport {
    pub ok: bool,
    pub missing: Vec<String>,
}

/// Outcome of one place-and-route invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub success: bool,
    #[serde(rename = "duration_secs", serialize_with = "as_secs")]
    pub duration: Duration,
    pub log_path: String,
    /// `None` when the process was killed by a signal or never started.
    pub exit_code: Option<i32>,
    /// Set when the script could not be written or the tool could not be launched.
    pub error: Option<String>,
    /// Summary printed after a successful run; reported separately in `FlowReport`.
    #[serde(skip)]
    pub summary: Option<SynthesisSummary>,
}

fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Heuristic reading of `timing_report.txt`. A slack section says nothing
/// about whether timing closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingStatus {
    Missing,
    SlackSection,
    NoSlackSection,
    Unreadable,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyFile {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisSummary {
    pub timing: TimingStatus,
    pub area_report: bool,
    pub power_report: bool,
    pub results_dir: String,
    pub reports_dir: String,
    pub logs_dir: String,
    pub key_files: Vec<KeyFile>,
    pub gds: Option<String>,
    pub processor: Vec<SpecLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowReport {
    pub prerequisites: PrerequisiteReport,
    pub run: Option<RunResult>,
    pub summary: Option<SynthesisSummary>,
}

impl FlowReport {
    pub fn ok(&self) -> bool {
        self.prerequisites.ok && self.run.as_ref().is_some_and(|r| r.success)
    }
}
