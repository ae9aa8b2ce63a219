use crate::config::Config;
use crate::persistence::{FileSlotStorage, PersistenceStore};
use crate::service::ScoringClient;
use crate::ui::app::App;
use crate::ui::effects::EffectRunner;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::workflow::WorkflowIntent;
use anyhow::Context;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

/// Startup switches that are not part of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Start with an empty form instead of the saved snapshot.
    pub no_restore: bool,
}

pub fn run(config: Config, options: RunOptions) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("resume-bandit-io")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let storage_dir = config
        .storage
        .dir
        .clone()
        .unwrap_or_else(FileSlotStorage::default_dir);
    let store = PersistenceStore::new(
        FileSlotStorage::new(storage_dir),
        config.storage.slot.clone(),
    );
    let client = ScoringClient::new(&config.service).context("failed to build HTTP client")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(&config);
    if options.no_restore {
        tracing::info!("Skipping saved form restore");
    } else {
        let snapshot = store.load();
        if !snapshot.is_empty() {
            tracing::info!(slot = %store.slot(), "Restoring saved form data");
        }
        app.dispatch(WorkflowIntent::Restore { snapshot });
    }

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let runner = EffectRunner::new(runtime.handle().clone(), client, store, events.sender());
    runner.spawn_health_check();
    spawn_signal_listener(runtime.handle(), events.sender());

    tracing::info!(base_url = %config.service.base_url, "Resume Bandit started");

    loop {
        runner.run_pending(&mut app, Instant::now());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event, Instant::now()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight requests are abandoned; their outcome has nowhere to go.
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Resume Bandit exited");
    Ok(())
}

/// Route one queued event into the app.
pub fn apply_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.paste(&text),
        AppEvent::Tick => app.on_tick(now),
        AppEvent::Resize(_, _) => {}
        AppEvent::Workflow(intent) => app.dispatch(intent),
        AppEvent::Shutdown => app.request_quit(),
    }
}

/// Post [`AppEvent::Shutdown`] when the process is asked to terminate, so the
/// loop exits through the terminal guard.
fn spawn_signal_listener(handle: &tokio::runtime::Handle, events: Sender<AppEvent>) {
    handle.spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                tracing::info!(signal, "Termination signal received");
                let _ = events.send(AppEvent::Shutdown);
            }
            Err(err) => tracing::warn!(error = %err, "Failed to listen for signals"),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let mut hangup = signal(SignalKind::hangup())?;
    tokio::select! {
        _ = terminate.recv() => Ok("SIGTERM"),
        _ = hangup.recv() => Ok("SIGHUP"),
        result = tokio::signal::ctrl_c() => result.map(|_| "SIGINT"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|_| "ctrl-c")
}
