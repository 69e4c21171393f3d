//! Plain-text and JSON rendering of a delta

use serde::Serialize;

use crate::changelog::types::Release;
use crate::config::CAUGHT_UP_MESSAGE;

/// Output format for the selected releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    latest: Option<&'a str>,
    releases: &'a [&'a Release],
}

/// Render releases as indented text, or the caught-up message when there are none.
pub fn render_text(releases: &[&Release]) -> String {
    if releases.is_empty() {
        return format!("{CAUGHT_UP_MESSAGE}\n");
    }

    releases
        .iter()
        .map(|release| {
            let mut block = format!("{} - {}\n", release.version, release.title);
            for change in &release.changes {
                block.push_str(&format!("  • {}: {}\n", change.title, change.description));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render releases as a JSON document, along with the version to record as last seen.
pub fn render_json(releases: &[&Release], latest: Option<&str>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput { latest, releases })
}

pub fn render(
    format: OutputFormat,
    releases: &[&Release],
    latest: Option<&str>,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(releases)),
        OutputFormat::Json => render_json(releases, latest),
    }
}
