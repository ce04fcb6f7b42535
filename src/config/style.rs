use std::collections::BTreeMap;

use crate::core::constants::style;

/// Colors and style tokens the renderer applies to view models.
///
/// View models carry only a `color_index` and a label; this is where
/// those become concrete colors and CSS classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub palette: Vec<String>,
    pub metric_styles: BTreeMap<String, String>,
    pub default_style: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: style::DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            metric_styles: style::DEFAULT_METRIC_STYLES
                .iter()
                .map(|(label, token)| (label.to_string(), token.to_string()))
                .collect(),
            default_style: style::DEFAULT_STYLE.to_string(),
        }
    }
}

impl StyleConfig {
    /// Color for a slice, wrapping around the palette
    pub fn color_for(&self, color_index: usize) -> &str {
        if self.palette.is_empty() {
            return style::DEFAULT_PALETTE[color_index % style::DEFAULT_PALETTE.len()];
        }
        &self.palette[color_index % self.palette.len()]
    }

    /// Style token for a metric label
    pub fn style_for(&self, label: &str) -> &str {
        self.metric_styles
            .get(label)
            .map(String::as_str)
            .unwrap_or(&self.default_style)
    }

    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_wraps() {
        let style = StyleConfig::default();
        assert_eq!(style.color_for(0), "#a78bfa");
        assert_eq!(style.color_for(4), "#34d399");
        assert_eq!(style.color_for(5), "#a78bfa");
    }

    #[test]
    fn test_style_for_falls_back_to_default() {
        let style = StyleConfig::default();
        assert_eq!(style.style_for("Grammar Issues"), "error");
        assert_eq!(style.style_for("Portfolio Links"), "neutral");
    }

    #[test]
    fn test_empty_palette_uses_builtin_colors() {
        let style = StyleConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(style.color_for(1), "#f472b6");
    }
}
