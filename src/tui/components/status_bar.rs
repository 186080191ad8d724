// Status bar component
//
// Renders key hints for the current screen and the assistant status at the
// bottom.

use crate::assistant::AssistantState;
use crate::shop::ViewState;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for the active input layer
///
/// Narrow terminals get the short form.
pub fn hints(app: &App, bp: Breakpoint) -> &'static str {
    let wide = bp.at_least(Breakpoint::Wide);

    if app.chat_open {
        return if wide {
            "Enter send │ PgUp/PgDn scroll │ Esc close chat"
        } else {
            "Enter send │ Esc close"
        };
    }
    if app.search_focused {
        return "Type to search │ Enter/Esc done";
    }

    match (app.shop.view(), wide) {
        (ViewState::Home, true) => {
            "←→↑↓ select │ Enter details │ a adopt │ 2 browse all │ ? help │ q quit"
        }
        (ViewState::Catalog, true) => {
            "←→↑↓ select │ Enter details │ a adopt │ / search │ [ ] breed │ x clear │ q quit"
        }
        (ViewState::Cart, true) => "↑↓ select │ Enter details │ d remove │ ? help │ q quit",
        (ViewState::Home, false) => "Enter details │ a adopt │ ? help",
        (ViewState::Catalog, false) => "/ search │ [ ] breed │ a adopt",
        (ViewState::Cart, false) => "d remove │ ? help",
    }
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let assistant = app.shop.assistant();

    let bot = match (assistant.state(), assistant.is_online()) {
        (AssistantState::Awaiting, _) => format!("{} PurrBot is thinking", app.spinner_char()),
        (AssistantState::Idle, true) => "PurrBot online".to_string(),
        (AssistantState::Idle, false) => "PurrBot offline".to_string(),
    };

    let status_text = format!(" {} │ {}", bot, hints(app, bp));

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
