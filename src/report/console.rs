use crate::report::report_model::RunReport;

/// Format a run report for terminal output.
///
/// Produces output like:
/// ```text
/// === Sync Run: orders ===
///
/// ✓ PASS  Copy customer (2 steps, 3 controls written)
/// ✗ FAIL  Mirror flags (1 steps, 0 controls written)
///     [ERROR] Step 0 failed: cannot transfer 'agree' (checkbox, ...) ...
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &RunReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Sync Run: {} ===\n\n", report.run_name));

    for result in &report.plan_results {
        let marker = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({} steps, {} controls written)\n",
            marker,
            result.plan_name,
            result.steps_run,
            result.controls_written()
        ));

        if let Some(ref error) = result.error {
            out.push_str(&format!("    [ERROR] {}\n", error));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total)",
        report.passed, report.failed, report.total
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}
