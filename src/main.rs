use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use refwatch::app::App;
use refwatch::cli::Args;
use refwatch::config::{ConfigResult, load_config, load_explicit_config};
use refwatch::logging::{init_logging, log_sink};
use refwatch::{NotificationRenderer, plain};

/// Redraw interval while a notification is fading in
const ANIMATION_TICK: Duration = Duration::from_millis(33);
/// Redraw interval otherwise
const IDLE_TICK: Duration = Duration::from_millis(100);
/// Stream polling interval in plain mode
const PLAIN_POLL: Duration = Duration::from_millis(20);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => ConfigResult {
            config: load_explicit_config(path)?,
            warning: None,
        },
        None => load_config(),
    };

    init_logging(args.log_level, log_sink(args.log_file.as_deref(), args.plain))?;
    if let Some(warning) = &warning {
        log::warn!("{}", warning);
    }

    let settings = args.resolve(&config)?;
    log::info!("Watching {}", settings.endpoint);

    let mut renderer = NotificationRenderer::connect(&settings.endpoint, settings.options);

    if settings.plain {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        plain::run(&mut renderer, &mut out, PLAIN_POLL)?;
        return Ok(());
    }

    let app = App::new(renderer, &settings.endpoint, settings.fade_in).with_config_warning(warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| app.render(frame, now))?;

        let timeout = if app.is_animating(now) {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
