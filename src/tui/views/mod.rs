// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Home: hero, features, New Arrivals
// - Catalog: searchable, filterable card grid
// - Cart: adoption request and summary
//
// The chat overlay, modals and toasts are layered on top in that order.

mod cart;
mod catalog;
mod chat;
mod home;
mod modal;

use super::app::App;
use crate::shop::ViewState;
use crate::tui::components;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the system logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame
    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(logs_height),
        Constraint::Length(2),
    ])
    .split(f.area());

    components::navbar::render(f, chunks[0], app);

    let content = chunks[1].inner(ratatui::layout::Margin::new(1, 0));
    match app.shop.view() {
        ViewState::Home => home::render(f, content, app),
        ViewState::Catalog => catalog::render(f, content, app),
        ViewState::Cart => cart::render(f, content, app),
    }

    if app.chat_open {
        chat::render(f, chunks[1], app);
    }

    if app.show_logs {
        components::logs_panel::render(f, chunks[2], app);
    }
    components::status_bar::render(f, chunks[3], app);

    // Render modal overlay (on top of everything)
    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
