pub const RESULTS_DIR: &str = "results";
pub const REPORTS_DIR: &str = "reports";
pub const LOGS_DIR: &str = "logs";
pub const CONFIG_DIR: &str = "config";
pub const SCRIPTS_DIR: &str = "scripts";

pub const CONTROL_CONFIG_FILE: &str = "openroad_config.tcl";
pub const SETTINGS_FILE: &str = "flow.toml";
pub const CONTROL_SCRIPT_FILE: &str = "vixen_synthesis.tcl";
pub const SYNTHESIS_LOG_FILE: &str = "synthesis.log";

pub const TIMING_REPORT_FILE: &str = "timing_report.txt";
pub const POWER_REPORT_FILE: &str = "power_report.txt";
pub const AREA_REPORT_FILE: &str = "area_report.txt";

/// Prefix of every artifact written into `results/`.
pub const DESIGN_STEM: &str = "vixen_dio_pro_final";

pub const PLACE_ROUTE_TOOL: &str = "openroad";
pub const SYNTHESIS_TOOL: &str = "yosys";
pub const LAYOUT_TOOL: &str = "klayout";

pub const DEFAULT_REQUIRED_TOOLS: [&str; 3] = [PLACE_ROUTE_TOOL, SYNTHESIS_TOOL, LAYOUT_TOOL];

/// Intended characteristics of the design. Printed with the summary; never measured.
pub const PROCESSOR_SPEC: [(&str, &str); 7] = [
    ("Architecture", "x86-64 CISC processor"),
    ("Cores", "1 physical core, 2 HT threads"),
    ("Pipeline", "20 stages"),
    ("Issue width", "3-way superscalar"),
    ("Process", "130nm"),
    ("Target frequency", "3.4 GHz"),
    ("Die area target", "~240 mm²"),
];
