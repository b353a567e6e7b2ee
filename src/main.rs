use booklist::adapters::ReqwestHttpClient;
use booklist::app::App;
use booklist::cli::{parse_args, run_cli_command};
use booklist::config::ApiConfig;
use booklist::gateway::HttpGateway;
use booklist::logging::init_tracing;
use booklist::repository::{BookRepository, HttpBookRepository};
use booklist::state::BookStore;
use booklist::terminal::{setup_panic_hook, TerminalManager};
use booklist::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Frame interval for animations (spinner) and state polling.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // CLI flags are handled before any terminal setup
    let mode = match parse_args(std::env::args()) {
        Ok(command) => run_cli_command(command),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;
    let log_path = init_tracing();

    let config = ApiConfig::from_env();
    config.validate()?;
    tracing::info!(
        base_url = %config.base_url(),
        mode = %mode,
        log = ?log_path,
        "starting booklist"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let gateway = HttpGateway::new(ReqwestHttpClient::new(), config.base_url());
        let store = BookStore::with_view_mode(HttpBookRepository::new(gateway), mode);
        let mut app = App::new(store.clone(), config.user_id.clone());

        // Initial load runs while the first frames draw
        tokio::spawn(async move { store.init().await });

        let mut term_manager = TerminalManager::new()?;
        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore();

        tracing::info!("booklist exiting");
        result
    })
}

async fn run_app<B, R>(terminal: &mut Terminal<B>, app: &mut App<R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    R: BookRepository + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    // Separate receiver used only to wake the loop; `App` copies the state
    let mut changes = app.store.subscribe();

    loop {
        app.sync_state();

        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.render_context()))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            Ok(()) = changes.changed() => {
                app.mark_dirty();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
