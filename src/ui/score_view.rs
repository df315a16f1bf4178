//! Terminal rendering of scores and suggestions.
//!
//! Displays a per-component bar chart, the enhancement target and the
//! suggestion list with priority icons.

use crate::model::{Enhancement, Priority};
use crate::quality::{ContentAnalysis, ScoreBreakdown, MAX_SCORE};
use crate::ui::colors::{paint, Theme};

/// Renders analyses as plain or colored terminal text.
#[derive(Debug)]
pub struct ScoreRenderer {
    theme: Theme,
    /// Width of the component bars in cells
    bar_width: usize,
    colors_enabled: bool,
}

impl Default for ScoreRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRenderer {
    /// Create a renderer that follows `NO_COLOR`.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            bar_width: 20,
            colors_enabled: crate::ui::colors::colors_supported(),
        }
    }

    /// Create a renderer with a custom theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable colors.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Set the bar width.
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// One-line score, e.g. `svc-lips: 60/100`.
    pub fn render_score_line(&self, service_id: &str, score: u8) -> String {
        format!(
            "{}: {}/100",
            paint(service_id, self.theme.service_id, self.colors_enabled),
            paint(&score.to_string(), self.theme.for_score(score), self.colors_enabled)
        )
    }

    /// Bar chart of the four components.
    pub fn render_breakdown(&self, breakdown: &ScoreBreakdown) -> String {
        let mut output = String::new();

        for (kind, sub) in breakdown.components() {
            let filled = (sub.ratio() * self.bar_width as f64).round() as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(self.bar_width.saturating_sub(filled))
            );
            let color = if sub.ratio() >= 1.0 {
                self.theme.success
            } else if sub.ratio() >= 0.5 {
                self.theme.warning
            } else {
                self.theme.error
            };

            output.push_str(&format!(
                "  {:<16} {} {:>5.1}/{:<3.0}\n",
                kind.label(),
                paint(&bar, color, self.colors_enabled),
                sub.points,
                sub.max
            ));
        }

        output
    }

    /// Suggestion list with priority icons, in emission order.
    pub fn render_suggestions(&self, analysis: &ContentAnalysis) -> String {
        let mut output = String::new();

        for suggestion in &analysis.suggestions {
            let icon = match suggestion.priority {
                Priority::High => paint("▲", self.theme.error, self.colors_enabled),
                Priority::Medium => paint("●", self.theme.warning, self.colors_enabled),
                Priority::Low => paint("▽", self.theme.muted, self.colors_enabled),
            };
            output.push_str(&format!(
                "  {} {} {}\n",
                icon,
                suggestion.description,
                paint(
                    &format!("(+{})", suggestion.estimated_impact),
                    self.theme.muted,
                    self.colors_enabled
                )
            ));
            output.push_str(&format!(
                "      {}\n",
                paint(&suggestion.action, self.theme.muted, self.colors_enabled)
            ));
        }

        output
    }

    /// Full analysis: score line, breakdown, target and suggestions.
    pub fn render_analysis(&self, analysis: &ContentAnalysis) -> String {
        let mut output = String::new();

        output.push_str(&self.render_score_line(&analysis.service_id, analysis.breakdown.total));
        output.push('\n');
        output.push_str(&self.render_breakdown(&analysis.breakdown));
        output.push_str(&format!(
            "  Target {}/100 ({} suggestions, estimated +{})\n",
            analysis.enhancement.target_score,
            analysis.suggestions.len(),
            analysis.projected_impact
        ));
        if analysis.breakdown.total < MAX_SCORE {
            output.push_str(&format!(
                "  Most points to gain: {}\n",
                analysis.breakdown.weakest().label()
            ));
        }
        output.push_str(&self.render_suggestions(analysis));
        output
    }

    /// Compact enhancement listing used by `suggest`.
    pub fn render_enhancement(&self, enhancement: &Enhancement) -> String {
        let mut output = format!(
            "{} {} → {} [{}]\n",
            paint(&enhancement.service_id, self.theme.service_id, self.colors_enabled),
            enhancement.current_score,
            enhancement.target_score,
            enhancement.enhancement_type
        );
        for improvement in &enhancement.improvements {
            output.push_str(&format!("  - {}\n", improvement));
        }
        output
    }
}
