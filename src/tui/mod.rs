// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, chat replies)
// - Rendering the storefront
// - Running assistant requests off the event loop

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::assistant::{AssistantError, GenerationRequest, TextGenerator};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::shop::{Shop, ViewState};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use theme::Theme;
use tokio::sync::mpsc;

/// Outcome of one assistant request, sent back to the event loop
type Reply = Result<String, AssistantError>;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(shop: Shop, log_buffer: LogBuffer, config: Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(shop, log_buffer, Theme::from_config(&config.theme));

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (navigation, intents, text entry)
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Assistant replies from spawned requests
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let (reply_tx, mut reply_rx) = mpsc::channel::<Reply>(4);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Assistant replies
            Some(reply) = reply_rx.recv() => {
                app.apply_reply(reply);
            }
        }

        // A submission may have produced a request to run
        if let Some(request) = app.take_dispatch() {
            match app.shop.assistant().generator() {
                Some(generator) => spawn_request(generator, request, reply_tx.clone()),
                None => app.apply_reply(Err(AssistantError::NotConfigured)),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run one generation on its own task and post the outcome back
fn spawn_request(
    generator: Arc<dyn TextGenerator>,
    request: GenerationRequest,
    reply_tx: mpsc::Sender<Reply>,
) {
    tokio::spawn(async move {
        let outcome = generator.generate(&request).await;
        if reply_tx.send(outcome).await.is_err() {
            tracing::debug!("Event loop gone, dropping assistant reply");
        }
    });
}

/// Handle keyboard input
/// Layered dispatch: Modal → Chat → Search → Global → View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if let Some(ref mut modal) = app.modal {
        let action = modal.handle_input(key_event);
        app.apply_modal_action(action);
        return;
    }

    // Layer 2: Chat overlay owns text entry while open
    if app.chat_open {
        handle_chat_input(app, &key_event);
        return;
    }

    // Layer 3: Catalog search box
    if app.search_focused {
        handle_search_input(app, &key_event);
        return;
    }

    // Layer 4: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 5: View-specific keys
    handle_view_keys(app, &key_event);
}

fn handle_chat_input(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Esc => app.toggle_chat(),
        KeyCode::Enter => app.submit_chat(),
        KeyCode::PageUp => app.chat_scroll = app.chat_scroll.saturating_add(5),
        KeyCode::PageDown => app.chat_scroll = app.chat_scroll.saturating_sub(5),
        KeyCode::Backspace if app.chat_input_enabled() => {
            app.chat_input.pop();
        }
        KeyCode::Char(c) if app.chat_input_enabled() => app.chat_input.push(c),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => app.search_focused = false,
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::F(1) | KeyCode::Char('1') => app.set_view(ViewState::Home),
        KeyCode::F(2) | KeyCode::Char('2') => app.set_view(ViewState::Catalog),
        KeyCode::F(3) | KeyCode::Char('3') => app.set_view(ViewState::Cart),
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('c') => app.toggle_chat(),
        KeyCode::Char('s') => app.toggle_session(),
        KeyCode::Char('L') => app.show_logs = !app.show_logs,
        KeyCode::Char('t') => {
            let next = app.theme.kind.next();
            app.theme = next.theme();
            app.show_toast(format!("Theme: {}", next.name()));
        }
        _ => return false,
    }
    true
}

fn handle_view_keys(app: &mut App, key_event: &KeyEvent) {
    let view = app.shop.view();

    match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_row(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_row(true),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Char('a') | KeyCode::Char(' ') if view != ViewState::Cart => {
            app.adopt_selected()
        }
        KeyCode::Char('d') | KeyCode::Delete if view == ViewState::Cart => app.remove_selected(),
        KeyCode::Char('/') if view == ViewState::Catalog => app.search_focused = true,
        KeyCode::Char(']') if view == ViewState::Catalog => app.cycle_breed(true),
        KeyCode::Char('[') if view == ViewState::Catalog => app.cycle_breed(false),
        KeyCode::Char('x') if view == ViewState::Catalog => app.clear_filters(),
        _ => {}
    }
}
