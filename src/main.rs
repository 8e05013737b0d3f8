use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::atomic::Ordering;

use mediatui::app::App;
use mediatui::config::Config;
use mediatui::handlers;
use mediatui::ui;
use mediatui::ui::icons::{IconMode, IconRenderer, IconTheme};
use mediatui::{log_debug, DEBUG_MODE};

/// Media store TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: ~/.config/mediatui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

fn load_config(path_override: Option<&str>) -> Result<Config> {
    let path = match path_override {
        Some(p) => std::path::PathBuf::from(p),
        None => dirs::config_dir()
            .context("Could not determine config directory")?
            .join("mediatui")
            .join("config.yaml"),
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.debug {
        DEBUG_MODE.store(true, Ordering::Relaxed);
    }

    let config = load_config(args.config.as_deref())?;

    let icon_renderer = IconRenderer::new(
        IconMode::from_config(&config.icon_mode),
        IconTheme::default(),
    );

    // Query the terminal for its graphics protocol before raw mode
    let image_picker = if config.image_preview {
        let picker = match ratatui_image::picker::Picker::from_query_stdio() {
            Ok(p) => p,
            Err(e) => {
                log_debug(&format!("Image preview: failed to detect terminal: {}", e));
                ratatui_image::picker::Picker::from_fontsize((8, 16))
            }
        };
        Some(picker)
    } else {
        log_debug("Image preview disabled in config");
        None
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, icon_renderer, image_picker);
    let result = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Timer-based state reverts, polled once per frame
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }
        if app.model.ui.copy.should_reset() {
            app.model.ui.copy.reset();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Process finished preview loads (non-blocking)
        while let Ok((public_id, outcome)) = app.preview_rx.try_recv() {
            app.apply_preview_outcome(public_id, outcome);
        }

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
