use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::help::help_popup_render;
use crate::notification::render_feed;
use crate::renderer::ConnectionState;
use crate::theme;
use crate::widgets::text::truncate_to_width;

impl App {
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let feed_area = layout[0];
        let status_area = layout[1];

        render_feed(
            frame,
            feed_area,
            self.renderer.feed(),
            &mut self.feed_scroll,
            now,
            self.fade_in,
        );

        self.render_status_line(frame, status_area);

        if self.help.visible {
            help_popup_render::render_popup(&mut self.help, frame);
        }
    }

    /// Connection state, counters and the latest warning on one line
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let (label, color) = match self.renderer.state() {
            ConnectionState::Connecting => ("connecting".to_string(), theme::status::CONNECTING),
            ConnectionState::Open => ("open".to_string(), theme::status::OPEN),
            ConnectionState::Closed(reason) => (format!("{}", reason), theme::status::CLOSED),
        };

        let stats = self.renderer.stats();
        let mut counters = format!(
            " │ {} shown · {} ignored · {} dropped",
            stats.displayed, stats.ignored, stats.dropped
        );
        if !self.feed_scroll.follow {
            counters.push_str(" · paused");
        }

        let mut spans = vec![
            Span::styled(
                format!(" ● {} ", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.endpoint.clone(), Style::default().fg(theme::status::TEXT)),
            Span::styled(counters, Style::default().fg(theme::status::TEXT)),
        ];

        // A bad frame outranks the config warning until a frame decodes again
        let warning = self
            .renderer
            .last_error()
            .map(|e| e.to_string())
            .or_else(|| self.config_warning.clone());

        if let Some(warning) = warning {
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let remaining = (area.width as usize).saturating_sub(used + 3);
            if remaining > 0 {
                spans.push(Span::styled(
                    format!(" │ {}", truncate_to_width(&warning, remaining)),
                    Style::default().fg(theme::status::WARNING),
                ));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
