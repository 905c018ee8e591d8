//! OpenROAD control script rendering.
//!
//! The template is fixed text; only the configuration file and the three
//! output directories are substituted, so output is byte-identical for
//! identical paths.

use crate::domain::models::ProjectLayout;
use std::path::{Path, PathBuf};

const CONFIG_FILE_SLOT: &str = "@CONFIG_FILE@";
const RESULTS_DIR_SLOT: &str = "@RESULTS_DIR@";
const REPORTS_DIR_SLOT: &str = "@REPORTS_DIR@";
const LOGS_DIR_SLOT: &str = "@LOGS_DIR@";

const TEMPLATE: &str = r#"
# =============================================================================
# Vixen Dio Pro - OpenROAD Synthesis Script
# =============================================================================

# Load configuration
source @CONFIG_FILE@

# Set up directories
set results_dir "@RESULTS_DIR@"
set reports_dir "@REPORTS_DIR@"
set logs_dir "@LOGS_DIR@"

# Read liberty files
foreach lib_file $LIB_FILES {
    if {[file exists $lib_file]} {
        read_liberty $lib_file
    } else {
        puts "Warning: Liberty file $lib_file not found"
    }
}

# Read LEF files
foreach lef_file $LEF_FILES {
    if {[file exists $lef_file]} {
        read_lef $lef_file
    } else {
        puts "Warning: LEF file $lef_file not found"
    }
}

# Read Verilog files
foreach verilog_file $VERILOG_FILES {
    if {[file exists $verilog_file]} {
        read_verilog $verilog_file
    } else {
        puts "Error: Verilog file $verilog_file not found"
        exit 1
    }
}

# Link design
link_design $TOP_MODULE

# Read constraints
if {[file exists $SDC_FILE]} {
    read_sdc $SDC_FILE
} else {
    puts "Warning: SDC file $SDC_FILE not found, using default constraints"
    create_clock -name clk -period $CLOCK_PERIOD [get_ports clk]
}

# Initialize floorplan
initialize_floorplan \
    -die_area $DIE_AREA \
    -core_area $CORE_AREA \
    -site unithd

# Place macros (if any)
if {$ENABLE_MACRO_PLACEMENT} {
    auto_macro_placement
}

# Power planning
add_global_connection -net $POWER_NETS -pin_pattern VDD -power
add_global_connection -net $GROUND_NETS -pin_pattern VSS -ground

# Global placement
global_placement -density $PLACE_DENSITY
puts "Global placement completed"

# Resize and buffer insertion
estimate_parasitics -placement
repair_design
puts "Initial repair completed"

# Detailed placement
detailed_placement
puts "Detailed placement completed"

# Clock tree synthesis
clock_tree_synthesis \
    -buf_list $CTS_BUF_CELL \
    -root_buf $CTS_BUF_CELL
puts "Clock tree synthesis completed"

# Post-CTS optimization
estimate_parasitics -placement
repair_design
puts "Post-CTS repair completed"

# Global routing
set_routing_layers -signal $MIN_ROUTE_LAYER:$MAX_ROUTE_LAYER
global_route
puts "Global routing completed"

# Detailed routing
detailed_route
puts "Detailed routing completed"

# Final parasitic extraction and optimization
estimate_parasitics -placement
repair_design -max_wire_length 500
puts "Final repair completed"

# Fill insertion
filler_placement sky130_fd_sc_hd__fill_*
puts "Filler placement completed"

# Generate reports
report_checks -path_delay min_max -fields input_pin,net,fanout \
    > $reports_dir/timing_report.txt
report_power > $reports_dir/power_report.txt
report_design_area > $reports_dir/area_report.txt

# Write results
write_def $results_dir/vixen_dio_pro_final.def
write_verilog $results_dir/vixen_dio_pro_final.v
write_sdf $results_dir/vixen_dio_pro_final.sdf
write_spef $results_dir/vixen_dio_pro_final.spef

# GDS generation (if LEF/GDS libraries are available)
if {[info exists GDS_LIBS]} {
    write_gds $results_dir/vixen_dio_pro_final.gds
    puts "GDS file generated successfully"
}

puts "Vixen Dio Pro synthesis flow completed successfully!"
exit 0
"#;

pub fn render_control_script(layout: &ProjectLayout, config_file: &Path) -> String {
    TEMPLATE
        .replace(CONFIG_FILE_SLOT, &config_file.display().to_string())
        .replace(RESULTS_DIR_SLOT, &layout.results_dir.display().to_string())
        .replace(REPORTS_DIR_SLOT, &layout.reports_dir.display().to_string())
        .replace(LOGS_DIR_SLOT, &layout.logs_dir.display().to_string())
}

/// Renders and writes the script, replacing any previous copy.
pub fn write_control_script(layout: &ProjectLayout, config_file: &Path) -> anyhow::Result<PathBuf> {
    let path = layout.control_script();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, render_control_script(layout, config_file))?;
    tracing::debug!(path = %path.display(), "control script written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{render_control_script, write_control_script};
    use crate::domain::models::ProjectLayout;
    use tempfile::TempDir;

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn rendering_is_deterministic() {
        let layout = ProjectLayout::new(std::path::Path::new("/work/vixen"));
        let cfg = layout.config_dir.join("openroad_config.tcl");
        assert_eq!(
            render_control_script(&layout, &cfg),
            render_control_script(&layout, &cfg)
        );
    }

    #[test]
    fn each_substituted_path_appears_once() {
        let layout = ProjectLayout::new(std::path::Path::new("/work/vixen"));
        let cfg = layout.config_dir.join("openroad_config.tcl");
        let text = render_control_script(&layout, &cfg);

        assert_eq!(occurrences(&text, "/work/vixen/config/openroad_config.tcl"), 1);
        assert_eq!(occurrences(&text, "/work/vixen/results"), 1);
        assert_eq!(occurrences(&text, "/work/vixen/reports"), 1);
        assert_eq!(occurrences(&text, "/work/vixen/logs"), 1);
        assert!(!text.contains('@'));
    }

    #[test]
    fn script_covers_the_whole_flow() {
        let layout = ProjectLayout::new(std::path::Path::new("/work/vixen"));
        let text = render_control_script(&layout, &layout.config_dir.join("cfg.tcl"));
        let steps = [
            "read_liberty",
            "read_lef",
            "read_verilog",
            "link_design $TOP_MODULE",
            "read_sdc $SDC_FILE",
            "create_clock -name clk -period $CLOCK_PERIOD",
            "initialize_floorplan",
            "auto_macro_placement",
            "add_global_connection -net $POWER_NETS",
            "global_placement -density $PLACE_DENSITY",
            "detailed_placement",
            "clock_tree_synthesis",
            "set_routing_layers -signal $MIN_ROUTE_LAYER:$MAX_ROUTE_LAYER",
            "global_route",
            "detailed_route",
            "repair_design -max_wire_length 500",
            "filler_placement",
            "$reports_dir/timing_report.txt",
            "$reports_dir/power_report.txt",
            "$reports_dir/area_report.txt",
            "write_spef $results_dir/vixen_dio_pro_final.spef",
            "write_gds $results_dir/vixen_dio_pro_final.gds",
        ];
        for step in steps {
            assert!(text.contains(step), "missing step: {step}");
        }
        assert!(text.trim_end().ends_with("exit 0"));
    }

    #[test]
    fn writing_overwrites_previous_script() {
        let tmp = TempDir::new().expect("temp dir");
        let layout = ProjectLayout::new(tmp.path());
        std::fs::create_dir_all(&layout.scripts_dir).expect("mkdir");
        std::fs::write(layout.control_script(), "stale contents").expect("seed");

        let cfg = layout.config_dir.join("openroad_config.tcl");
        let path = write_control_script(&layout, &cfg).expect("write");
        let written = std::fs::read_to_string(&path).expect("read");
        assert_eq!(path, layout.control_script());
        assert_eq!(written, render_control_script(&layout, &cfg));
    }

    #[test]
    fn writing_creates_the_scripts_dir() {
        let tmp = TempDir::new().expect("temp dir");
        let layout = ProjectLayout::new(tmp.path());
        let path = write_control_script(&layout, &layout.config_dir.join("c.tcl")).expect("write");
        assert!(path.exists());
    }
}
