use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_fade::{blend, opacity};
use super::notification_state::{Notification, NotificationFeed};
use crate::scroll::ScrollState;
use crate::theme;

const PLACEHOLDER: &str = "Waiting for checkout events…";

/// Build one styled line per notification, faded according to its age
pub fn feed_lines<'a>(
    entries: impl Iterator<Item = &'a Notification>,
    now: Instant,
    fade: Duration,
) -> Vec<Line<'static>> {
    entries.map(|n| notification_line(n, now, fade)).collect()
}

fn notification_line(n: &Notification, now: Instant, fade: Duration) -> Line<'static> {
    let o = opacity(now.saturating_duration_since(n.created_at), fade);
    let color = |rgb: (u8, u8, u8)| Style::default().fg(blend(theme::feed::BACKGROUND, rgb, o));

    let mut spans = Vec::with_capacity(7);
    if let Some(ts) = &n.timestamp {
        spans.push(Span::styled(format!("{} ", ts), color(theme::feed::TIMESTAMP)));
    }
    spans.push(Span::styled(
        n.user.clone(),
        color(theme::feed::USER).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" modified ", color(theme::feed::TEXT)));
    spans.push(Span::styled(
        n.ref_name.clone(),
        color(theme::feed::REF).add_modifier(Modifier::BOLD),
    ));
    if let Some(repo) = &n.repo {
        spans.push(Span::styled(" in ", color(theme::feed::TEXT)));
        spans.push(Span::styled(repo.clone(), color(theme::feed::REPO)));
    }
    if let Some(revisions) = &n.revisions {
        spans.push(Span::styled(
            format!(" ({})", revisions),
            color(theme::feed::REVISIONS),
        ));
    }

    Line::from(spans)
}

/// Render the feed pane, keeping `scroll` in sync with the content size
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    feed: &NotificationFeed,
    scroll: &mut ScrollState,
    now: Instant,
    fade: Duration,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Events ({}) ", feed.len()))
        .border_style(Style::default().fg(theme::feed::BORDER));

    let viewport_height = area.height.saturating_sub(2);

    if feed.is_empty() {
        scroll.update_bounds(0, viewport_height);
        let placeholder = Paragraph::new(PLACEHOLDER)
            .block(block)
            .style(Style::default().fg(theme::feed::PLACEHOLDER));
        frame.render_widget(placeholder, area);
        return;
    }

    // Only the visible window is built, so cost does not grow with the feed
    scroll.update_bounds(feed.len(), viewport_height);
    let lines = feed_lines(feed.window(scroll.visible_range(feed.len())), now, fade);

    let content = Paragraph::new(lines).block(block);

    frame.render_widget(content, area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
