//! Rendering of the merge report.

use console::Style;

use crate::error::Result;
use crate::merge::MergeReport;
use crate::output::OutputConfig;

/// Render the report as plain text, one repository per line.
///
/// Repositories that were already up to date are only listed when
/// `verbose` is set.
pub fn render_text(report: &MergeReport, verbose: bool, output: &OutputConfig) -> String {
    let mut text = String::new();

    if !report.failures.is_empty() {
        let heading = output.paint(
            &Style::new().red().bold(),
            "These repositories failed to merge, fix manually:",
        );
        push_section(&mut text, &heading, &report.failures);
    }
    if !report.merged.is_empty() {
        let heading = output.paint(
            &Style::new().green().bold(),
            "Repos that merged successfully:",
        );
        push_section(&mut text, &heading, &report.merged);
    }
    if verbose && !report.up_to_date.is_empty() {
        let heading = output.paint(&Style::new().dim(), "Repos already up to date:");
        push_section(&mut text, &heading, &report.up_to_date);
    }

    if report.is_clean() {
        text.push_str(&format!(
            "{} merged successfully! Compile and test before pushing to GitHub.\n",
            report.branch
        ));
    } else if report.is_empty() {
        text.push_str("Unable to retrieve any results.\n");
    }

    text
}

fn push_section(text: &mut String, heading: &str, repos: &[String]) {
    text.push('\n');
    text.push_str(heading);
    text.push('\n');
    for repo in repos {
        text.push_str(repo);
        text.push('\n');
    }
}

/// Render the report as a pretty-printed JSON object.
pub fn render_json(report: &MergeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
