use crate::app::{App, AppMessage};
use crate::config::Config;
use crate::omdb::{OmdbApi, OmdbClient};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

pub async fn run(config: Config) -> Result<()> {
    let provider: Arc<dyn OmdbApi> = Arc::new(OmdbClient::new(&config)?);
    let (mut app, mut rx) = App::with_channel(provider);

    let mut terminal = ratatui::try_init().context("Failed to initialise terminal")?;
    info!("Terminal ready, starting event loop");
    let result = event_loop(&mut terminal, &mut app, &mut rx).await;
    if let Err(e) = ratatui::try_restore() {
        error!("Failed to restore terminal: {}", e);
    }
    info!(
        watch_list = app.detail().watch_list().len(),
        "Event loop finished"
    );
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut events = EventStream::new();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    app.start();
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .context("Failed to draw frame")?;

        tokio::select! {
            Some(msg) = rx.recv() => app.handle_message(msg),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
            _ = &mut shutdown => break,
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Shutdown signal received (SIGTERM)");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }

    #[cfg(not(unix))]
    std::future::pending::<()>().await;
}
