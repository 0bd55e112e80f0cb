//! Output formatting utilities

use crate::application::SyncReport;

/// Summary line printed to stdout after a sync
pub fn format_sync_summary(report: &SyncReport) -> String {
    let mut output = String::new();
    if report.initialized {
        output.push_str("Initialized log repository\n");
    }

    let failed = report.failures().count();
    if failed == 0 {
        output.push_str(&format!("Synced logs: {}", report.message));
    } else {
        output.push_str(&format!(
            "Synced logs with {} failed step(s): {}",
            failed, report.message
        ));
    }
    output
}

/// Warnings printed to stderr for each failed sync step
pub fn format_sync_warnings(report: &SyncReport) -> String {
    let mut output = String::new();
    for step in report.failures() {
        if step.detail.is_empty() {
            output.push_str(&format!("Warning: git {} failed\n", step.name));
        } else {
            output.push_str(&format!("Warning: git {} failed: {}\n", step.name, step.detail));
        }
    }
    output
}
