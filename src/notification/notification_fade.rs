use std::time::Duration;

use ratatui::style::Color;

/// How long a new notification takes to become fully visible
pub const FADE_IN_DURATION: Duration = Duration::from_millis(1000);

/// Visibility in `0.0..=1.0` after `elapsed` of a fade lasting `duration`.
///
/// A zero duration means no animation.
pub fn opacity(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Mix two RGB colors; `t = 0.0` yields `from`, `t = 1.0` yields `to`
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[cfg(test)]
#[path = "notification_fade_tests.rs"]
mod notification_fade_tests;
