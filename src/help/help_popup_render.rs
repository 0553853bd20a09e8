//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::HelpPopupState;
use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::theme;
use crate::widgets::popup;

// Help popup display constants
pub const HELP_POPUP_WIDTH: u16 = 52;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(help: &mut HelpPopupState, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 6 {
        return;
    }

    let ideal_height = HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, ideal_height);

    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(theme::help::BORDER)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            let key_span = Span::styled(
                format!("  {:<16}", key),
                Style::default()
                    .fg(theme::help::KEY)
                    .add_modifier(Modifier::BOLD),
            );
            let desc_span = Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION));
            lines.push(Line::from(vec![key_span, desc_span]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(theme::help::FOOTER),
    )));

    let visible_height = popup_area.height.saturating_sub(2);
    help.scroll.update_bounds(lines.len(), visible_height);
    let range = help.scroll.visible_range(lines.len());
    let visible: Vec<Line> = lines.drain(range).collect();

    let popup = Paragraph::new(Text::from(visible))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(theme::help::BORDER))
                .style(Style::default().bg(theme::help::BACKGROUND)),
        );

    frame.render_widget(popup, popup_area);
}
