use std::fmt::Write;
use std::path::{Component, Path, PathBuf};

use colored::{Color, Colorize};
use contractloader_sdk::DownloadSummary;

/// Path relative to the working directory, `.` when they are the same.
pub fn display_path(path: &Path) -> String {
    let relative = if path.is_absolute() {
        std::env::current_dir()
            .ok()
            .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| path.to_path_buf())
    } else {
        path.components()
            .filter(|component| !matches!(component, Component::CurDir))
            .collect::<PathBuf>()
    };

    if relative.as_os_str().is_empty() {
        ".".to_owned()
    } else {
        relative.display().to_string()
    }
}

/// Boxed two-column table printed after a successful download.
pub fn render_summary(summary: &DownloadSummary) -> String {
    let rows = [
        ("Contract Name", summary.contract_name.clone(), Color::Cyan),
        ("Chain", summary.chain.name.clone(), Color::Yellow),
        ("Files Saved", summary.file_count.to_string(), Color::BrightBlack),
        (
            "Output Directory",
            display_path(&summary.output_dir),
            Color::BrightBlack,
        ),
    ];

    let label_width = rows
        .iter()
        .map(|(label, _, _)| label.chars().count())
        .max()
        .unwrap_or_default();
    let value_width = rows
        .iter()
        .map(|(_, value, _)| value.chars().count())
        .max()
        .unwrap_or_default();

    let border = |left: &str, middle: &str, right: &str| {
        format!(
            "{left}{}{middle}{}{right}",
            "─".repeat(label_width.saturating_add(2)),
            "─".repeat(value_width.saturating_add(2))
        )
        .bright_black()
        .to_string()
    };
    let separator = "│".bright_black();

    let mut out = String::new();
    writeln!(out).ok();
    writeln!(out, "{}", border("┌", "┬", "┐")).ok();
    for (index, (label, value, color)) in rows.iter().enumerate() {
        if index > 0 {
            writeln!(out, "{}", border("├", "┼", "┤")).ok();
        }
        let label = format!("{label:<label_width$}").bold();
        let value = format!("{value:<value_width$}").color(*color);
        writeln!(out, "{separator} {label} {separator} {value} {separator}").ok();
    }
    writeln!(out, "{}", border("└", "┴", "┘")).ok();
    out
}
