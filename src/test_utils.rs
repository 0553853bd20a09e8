#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};
    use std::time::Instant;

    use chrono::NaiveTime;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use url::Url;

    use crate::app::App;
    use crate::clock::Clock;
    use crate::notification::FADE_IN_DURATION;
    use crate::renderer::{NotificationRenderer, RendererOptions};
    use crate::source::{DEFAULT_ENDPOINT, EventStream, SourceEvent};

    /// Clock frozen at one time of day
    pub struct FixedClock(pub NaiveTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveTime {
            self.0
        }
    }

    pub fn fixed_clock(hour: u32, minute: u32) -> Box<FixedClock> {
        Box::new(FixedClock(NaiveTime::from_hms_opt(hour, minute, 0).unwrap()))
    }

    /// JSON frame for a change event
    pub fn frame(user: &str, ref_name: &str, checked_out: bool) -> String {
        serde_json::json!({
            "User": user,
            "RefName": ref_name,
            "CheckedOut": checked_out,
        })
        .to_string()
    }

    /// Renderer fed by a channel the test controls, clock fixed at 14:30
    pub fn test_renderer(options: RendererOptions) -> (NotificationRenderer, Sender<SourceEvent>) {
        let (tx, rx) = mpsc::channel();
        let renderer = NotificationRenderer::new(Box::new(EventStream::from_channel(rx)), options)
            .with_clock(fixed_clock(14, 30));
        (renderer, tx)
    }

    pub fn test_app() -> (App, Sender<SourceEvent>) {
        let (renderer, tx) = test_renderer(RendererOptions::default());
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        (App::new(renderer, &endpoint, FADE_IN_DURATION), tx)
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16, now: Instant) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f, now)).unwrap();
        terminal.backend().to_string()
    }
}
