use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use leadview::{
    config::{self, Config},
    messages::ServiceEvent,
    model::Model,
    services::{loader, Clipboard, CommandClipboard},
    ui,
};

/// Terminal viewer for business-lead JSON files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lead sources (file paths or http(s) URLs); overrides the configured list
    sources: Vec<String>,

    /// Enable debug logging to the leadview-debug.log file in the temp dir
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (h/l records, j/k fields)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL that relative sources are fetched from
    #[arg(long)]
    base_url: Option<String>,

    /// Directory that relative source paths are read from
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

mod app;
mod handlers;
mod utils;

pub struct App {
    pub model: Model,

    clipboard: Arc<dyn Clipboard>,
    open_command: Option<String>,

    service_tx: mpsc::UnboundedSender<ServiceEvent>,
    service_rx: mpsc::UnboundedReceiver<ServiceEvent>,
}

impl App {
    pub fn new(vim_mode: bool, clipboard: Arc<dyn Clipboard>, open_command: Option<String>) -> Self {
        let (service_tx, service_rx) = mpsc::unbounded_channel();
        Self {
            model: Model::new(vim_mode),
            clipboard,
            open_command,
            service_tx,
            service_rx,
        }
    }

    /// Sender background services report on
    pub fn service_sender(&self) -> mpsc::UnboundedSender<ServiceEvent> {
        self.service_tx.clone()
    }
}

/// Route tracing output to the debug log file; the terminal belongs to the UI
fn init_debug_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.debug {
        init_debug_logging()?;
        tracing::debug!("Debug mode enabled");
    }

    // Load configuration (all keys optional; no file means defaults)
    let config_path = config::get_config_path(args.config.as_deref())?;
    let mut config = match &config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => {
            tracing::info!("no config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if !args.sources.is_empty() {
        config.sources = args.sources;
    }
    if args.base_url.is_some() {
        config.base_url = args.base_url;
    }
    if args.data_dir.is_some() {
        config.data_dir = args.data_dir;
    }
    if args.vim {
        config.vim_mode = true;
    }

    let clipboard = Arc::new(CommandClipboard::from_config(
        config.clipboard_command.as_deref(),
    )?);
    tracing::debug!(program = clipboard.program(), "clipboard command");

    let mut app = App::new(config.vim_mode, clipboard, config.open_command.clone());

    // Start loading before the terminal is set up; the loading view covers the wait
    match loader::resolve_sources(
        &config.sources,
        config.base_url.as_deref(),
        config.data_dir.as_deref(),
    ) {
        Ok(sources) => {
            for source in &sources {
                tracing::debug!(source = %source.name, location = ?source.location, "resolved source");
            }
            loader::spawn_load(reqwest::Client::new(), sources, app.service_sender());
        }
        Err(e) => {
            let _ = app.service_sender().send(ServiceEvent::Loaded(Err(e)));
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();

        // Controls whose feedback period is over go back to idle
        app.model.ui.expire_copy_feedback(now);

        if app.model.ui.should_dismiss_toast(now) {
            app.model.ui.dismiss_toast();
        }

        // Always render the whole screen from the model
        terminal.draw(|f| {
            ui::render(f, &app.model, now);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process service events (non-blocking)
        while let Ok(event) = app.service_rx.try_recv() {
            handlers::handle_service_event(app, event);
        }

        // Short poll keeps the entrance animation and feedback expiry smooth
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
