//! Terminal output for a built dashboard view

use crate::config::StyleConfig;
use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::transform::DashboardView;
use crate::ui::color::{Colors, colorize, score_color, token_color};

/// Print the dashboard view in the requested output format
pub fn display_summary(view: &DashboardView, style: &StyleConfig, output_format: &str) -> Result<()> {
    let rendered = render_summary(view, style, output_format)?;
    print!("{rendered}");
    Ok(())
}

/// Render the dashboard view for the terminal
pub fn render_summary(
    view: &DashboardView,
    style: &StyleConfig,
    output_format: &str,
) -> Result<String> {
    match output_format {
        output_formats::MINIMAL => Ok(render_minimal(view)),
        output_formats::JSON => Ok(format!("{}\n", serde_json::to_string_pretty(view)?)),
        _ => Ok(render_text(view, style)),
    }
}

/// One `key value` line per score, metric and slice, no colors
fn render_minimal(view: &DashboardView) -> String {
    let mut lines = Vec::new();
    for card in &view.summary_cards {
        lines.push(format!("{} {}/{}", card.title, card.score, card.max_score));
    }
    for card in &view.metric_cards {
        lines.push(format!("{} {}", card.label, card.value));
    }
    for slice in &view.category_slices {
        lines.push(format!("{} {}%", slice.category_name, slice.percent));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn heading(text: &str) -> String {
    colorize(
        &format!("{}{}{}", Colors::BOLD, text, Colors::RESET),
        Colors::BRIGHT_CYAN,
    )
}

/// Sectioned text output with score-dependent colors
fn render_text(view: &DashboardView, style: &StyleConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", heading("Summary")));
    for card in &view.summary_cards {
        out.push_str(&format!(
            "  {}: {} / {}\n",
            card.title,
            colorize(&card.score.to_string(), score_color(card.score)),
            card.max_score
        ));
    }

    out.push_str(&format!("\n{}\n", heading("Metrics")));
    for card in &view.metric_cards {
        let value = colorize(&card.value.to_string(), token_color(style.style_for(&card.label)));
        match card.percent {
            Some(percent) => out.push_str(&format!(
                "  {}: {} {}\n",
                card.label,
                value,
                colorize(&format!("({percent}%)"), Colors::DIM)
            )),
            None => out.push_str(&format!("  {}: {}\n", card.label, value)),
        }
    }

    out.push_str(&format!("\n{}\n", heading("Key Metrics Comparison")));
    for point in &view.radar_series {
        out.push_str(&format!(
            "  {}: {}\n",
            point.axis_name,
            colorize(&point.score.to_string(), score_color(point.score))
        ));
    }

    out.push_str(&format!("\n{}\n", heading("Skill Category Distribution")));
    for slice in &view.category_slices {
        out.push_str(&format!("  {}: {}%\n", slice.category_name, slice.percent));
    }

    for (section, entries) in view.feedback.iter() {
        out.push_str(&format!("\n{}\n", heading(section.title())));
        if entries.is_empty() {
            out.push_str(&format!("  {}\n", colorize("(none)", Colors::DIM)));
        }
        for entry in entries {
            out.push_str(&format!("  • {entry}\n"));
        }
    }

    out
}
