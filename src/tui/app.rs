// TUI application state
//
// Wraps the Shop controller with the state that only matters on screen:
// selection, open overlays, text inputs, toasts, animation. Key handling in
// tui/mod.rs calls the methods here; rendering reads from here.

use super::components::{Toast, ToastKind};
use super::layout::Breakpoint;
use super::modal::{AuthForm, Modal, ModalAction};
use super::theme::Theme;
use crate::assistant::{AssistantError, GenerationRequest, Submission};
use crate::catalog::{self, Cat};
use crate::logging::LogBuffer;
use crate::shop::{AdoptResult, Shop, ViewState};

/// Main application state for the TUI
pub struct App {
    /// Domain state and intents
    pub shop: Shop,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Selected card or cart row in the current view
    pub selected: usize,

    /// Cards per row, refreshed on every draw
    pub columns: usize,

    /// Typing goes to the catalog search box
    pub search_focused: bool,

    /// Chat overlay visible
    pub chat_open: bool,

    /// Pending chat input line
    pub chat_input: String,

    /// Transcript lines scrolled up from the bottom
    pub chat_scroll: u16,

    /// System logs panel visible
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Spinner frame, advanced on every tick
    animation_frame: usize,

    /// Request dispatched by the assistant, waiting to be spawned
    outbox: Option<GenerationRequest>,
}

impl App {
    pub fn new(shop: Shop, log_buffer: LogBuffer, theme: Theme) -> Self {
        Self {
            shop,
            theme,
            log_buffer,
            modal: None,
            toast: None,
            selected: 0,
            columns: Breakpoint::Normal.card_columns(),
            search_focused: false,
            chat_open: false,
            chat_input: String::new(),
            chat_scroll: 0,
            show_logs: false,
            should_quit: false,
            animation_frame: 0,
            outbox: None,
        }
    }

    // ─── Animation & toasts ──────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.clear_expired_toast();
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Animated dots for the thinking indicator
    pub fn thinking_dots(&self) -> &'static str {
        const DOTS: [&str; 4] = ["", ".", "..", "..."];
        DOTS[self.animation_frame % DOTS.len()]
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─── Views & selection ───────────────────────────────────────────────────

    pub fn set_view(&mut self, view: ViewState) {
        self.shop.navigate(view);
        self.selected = 0;
        self.search_focused = false;
    }

    pub fn next_view(&mut self) {
        let idx = ViewState::ALL
            .iter()
            .position(|v| *v == self.shop.view())
            .unwrap_or(0);
        self.set_view(ViewState::ALL[(idx + 1) % ViewState::ALL.len()]);
    }

    pub fn prev_view(&mut self) {
        let len = ViewState::ALL.len();
        let idx = ViewState::ALL
            .iter()
            .position(|v| *v == self.shop.view())
            .unwrap_or(0);
        self.set_view(ViewState::ALL[(idx + len - 1) % len]);
    }

    /// Cats listed in the current view, in display order
    pub fn visible_cats(&self) -> Vec<&'static Cat> {
        match self.shop.view() {
            ViewState::Home => catalog::featured().iter().collect(),
            ViewState::Catalog => self.shop.filtered(),
            ViewState::Cart => self.shop.cart().entries().iter().map(|e| e.cat).collect(),
        }
    }

    pub fn selected_cat(&self) -> Option<&'static Cat> {
        self.visible_cats().get(self.selected).copied()
    }

    /// Move the selection by `delta` items, clamped to the list
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.visible_cats().len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, count as isize - 1) as usize;
    }

    /// Move one row up or down in a grid (one item in the cart list)
    pub fn move_row(&mut self, down: bool) {
        let step = match self.shop.view() {
            ViewState::Cart => 1,
            _ => self.columns.max(1) as isize,
        };
        self.move_selection(if down { step } else { -step });
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_selection(&mut self) {
        let count = self.visible_cats().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    // ─── Catalog filters ─────────────────────────────────────────────────────

    pub fn push_search_char(&mut self, c: char) {
        self.shop.push_query_char(c);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.shop.pop_query_char();
        self.clamp_selection();
    }

    pub fn cycle_breed(&mut self, forward: bool) {
        self.shop.cycle_breed(forward);
        self.clamp_selection();
    }

    pub fn clear_filters(&mut self) {
        self.shop.set_query("");
        self.shop.set_breed(catalog::BreedFilter::All);
        self.clamp_selection();
    }

    // ─── Shop intents ────────────────────────────────────────────────────────

    pub fn adopt_selected(&mut self) {
        if let Some(cat) = self.selected_cat() {
            let result = self.shop.adopt(cat.id);
            self.report_adopt(result);
        }
    }

    pub fn open_selected_detail(&mut self) {
        if let Some(cat) = self.selected_cat() {
            self.shop.open_detail(cat.id);
            self.sync_modal();
        }
    }

    pub fn remove_selected(&mut self) {
        if self.shop.view() != ViewState::Cart {
            return;
        }
        if let Some(cat) = self.selected_cat() {
            if self.shop.remove_from_cart(cat.id) {
                self.show_toast(format!("Removed {} from your request", cat.name));
                self.clamp_selection();
            }
        }
    }

    /// Sign in when signed out, sign out when signed in
    pub fn toggle_session(&mut self) {
        if self.shop.session().is_signed_in() {
            self.shop.logout();
            self.selected = 0;
            self.search_focused = false;
            self.show_toast("Signed out. See you soon!");
        } else {
            self.shop.open_auth();
        }
        self.sync_modal();
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::Help);
    }

    fn report_adopt(&mut self, result: AdoptResult) {
        match result {
            AdoptResult::Added(cat) => {
                self.notify(
                    ToastKind::Success,
                    format!("{} added to your adoption request", cat.name),
                )
            }
            AdoptResult::AlreadyInCart(cat) => {
                self.show_toast(format!("{} is already in your cart", cat.name))
            }
            AdoptResult::AuthRequired => self.notify(ToastKind::Warning, "Please sign in to adopt"),
            AdoptResult::UnknownCat => {}
        }
        self.sync_modal();
    }

    // ─── Modals ──────────────────────────────────────────────────────────────

    /// Mirror the Shop's dialog state into the modal slot
    ///
    /// The Shop decides whether the auth or detail dialog is open; the App
    /// only owns what is typed into them. Auth wins over detail.
    pub fn sync_modal(&mut self) {
        let auth_open = self.shop.is_auth_open();
        let detail = self.shop.detail();

        self.modal = match (self.modal.take(), auth_open, detail) {
            (Some(Modal::Auth(form)), true, _) => Some(Modal::Auth(form)),
            (_, true, _) => Some(Modal::Auth(AuthForm::new())),
            (_, false, Some(cat)) => Some(Modal::Detail(cat.id)),
            (Some(Modal::Help), false, None) => Some(Modal::Help),
            _ => None,
        };
    }

    pub fn apply_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::None => return,
            ModalAction::Close => match self.modal {
                Some(Modal::Auth(_)) => self.shop.close_auth(),
                Some(Modal::Detail(_)) => self.shop.close_detail(),
                Some(Modal::Help) | None => self.modal = None,
            },
            ModalAction::Login { name, email } => {
                let user = self.shop.login(&name, &email);
                self.notify(ToastKind::Success, format!("Welcome, {}!", user.name));
            }
            ModalAction::Adopt => {
                if let Some(result) = self.shop.adopt_from_detail() {
                    self.report_adopt(result);
                }
            }
        }
        self.sync_modal();
    }

    // ─── Chat ────────────────────────────────────────────────────────────────

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        self.chat_scroll = 0;
    }

    /// Input is disabled while a reply is outstanding
    pub fn chat_input_enabled(&self) -> bool {
        !self.shop.assistant().is_awaiting()
    }

    pub fn submit_chat(&mut self) {
        if !self.chat_input_enabled() {
            return;
        }
        let input = std::mem::take(&mut self.chat_input);
        match self.shop.assistant_mut().submit(&input) {
            Submission::Dispatched(request) => self.outbox = Some(request),
            Submission::Offline => {}
            Submission::Ignored => self.chat_input = input,
        }
        self.chat_scroll = 0;
    }

    /// Take the request the event loop should run, if any
    pub fn take_dispatch(&mut self) -> Option<GenerationRequest> {
        self.outbox.take()
    }

    pub fn apply_reply(&mut self, outcome: Result<String, AssistantError>) {
        self.shop.assistant_mut().resolve(outcome);
        self.chat_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::tests::ScriptedGenerator;
    use crate::assistant::{AssistantSettings, ChatAssistant, Role, TextGenerator};
    use crate::session::SessionStore;
    use crate::shop::tests::shop;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn app() -> App {
        App::new(shop(), LogBuffer::new(), Theme::default())
    }

    fn online_app() -> App {
        let generator = ScriptedGenerator::new(vec![Ok("Try Luna!".to_string())]);
        let shop = Shop::new(
            SessionStore::restore(Box::new(MemoryStore::new())),
            ChatAssistant::new(
                Some(generator as Arc<dyn TextGenerator>),
                AssistantSettings::default(),
            ),
        );
        App::new(shop, LogBuffer::new(), Theme::default())
    }

    #[test]
    fn adopt_signed_out_opens_auth_modal() {
        let mut app = app();
        app.adopt_selected();
        assert!(matches!(app.modal, Some(Modal::Auth(_))));
        assert!(app.shop.cart().is_empty());

        app.apply_modal_action(ModalAction::Login {
            name: "sonu".into(),
            email: "sonu@example.com".into(),
        });
        assert!(app.modal.is_none());
        assert!(app.shop.session().is_signed_in());

        app.adopt_selected();
        assert_eq!(app.shop.cart().count(), 1);
        assert!(app.toast.as_ref().unwrap().message.contains("Luna"));
    }

    #[test]
    fn closing_auth_clears_shop_state() {
        let mut app = app();
        app.toggle_session();
        assert!(app.shop.is_auth_open());
        app.apply_modal_action(ModalAction::Close);
        assert!(!app.shop.is_auth_open());
        assert!(app.modal.is_none());
    }

    #[test]
    fn detail_adopt_signed_out_switches_to_auth() {
        let mut app = app();
        app.open_selected_detail();
        assert!(matches!(app.modal, Some(Modal::Detail("c1"))));

        app.apply_modal_action(ModalAction::Adopt);
        assert!(matches!(app.modal, Some(Modal::Auth(_))));
        assert!(app.shop.detail().is_none());
    }

    #[test]
    fn selection_clamps_to_filtered_list() {
        let mut app = app();
        app.set_view(ViewState::Catalog);
        app.move_selection(100);
        assert_eq!(app.selected, catalog::all().len() - 1);

        for c in "Luna".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_cat().map(|c| c.name), Some("Luna"));

        app.clear_filters();
        assert_eq!(app.visible_cats().len(), catalog::all().len());
    }

    #[test]
    fn grid_rows_move_by_columns() {
        let mut app = app();
        app.set_view(ViewState::Catalog);
        app.columns = 3;
        app.move_row(true);
        assert_eq!(app.selected, 3);
        app.move_row(false);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn remove_from_cart_view() {
        let mut app = app();
        app.shop.login("Sonu", "sonu@example.com");
        app.shop.adopt("c1");
        app.shop.adopt("c2");
        app.set_view(ViewState::Cart);
        app.move_selection(1);

        app.remove_selected();
        assert_eq!(app.shop.cart().count(), 1);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_cat().map(|c| c.id), Some("c1"));
    }

    #[test]
    fn sign_out_goes_home() {
        let mut app = app();
        app.shop.login("Sonu", "sonu@example.com");
        app.set_view(ViewState::Cart);
        app.toggle_session();
        assert_eq!(app.shop.view(), ViewState::Home);
        assert!(!app.shop.session().is_signed_in());
        assert!(app.modal.is_none());
    }

    #[test]
    fn offline_chat_replies_immediately() {
        let mut app = app();
        app.chat_input = "Hi".into();
        app.submit_chat();

        assert!(app.take_dispatch().is_none());
        assert!(app.chat_input.is_empty());
        let transcript = app.shop.assistant().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].role, Role::Assistant);
    }

    #[tokio::test]
    async fn online_chat_dispatches_then_resolves() {
        let mut app = online_app();
        app.chat_input = "A calm cat?".into();
        app.submit_chat();

        let request = app.take_dispatch().expect("request dispatched");
        assert!(!app.chat_input_enabled());

        // Input while awaiting is kept, not sent
        app.chat_input = "hello?".into();
        app.submit_chat();
        assert_eq!(app.chat_input, "hello?");
        assert!(app.take_dispatch().is_none());

        let generator = app.shop.assistant().generator().unwrap();
        let outcome = generator.generate(&request).await;
        app.apply_reply(outcome);

        assert!(app.chat_input_enabled());
        let last = app.shop.assistant().transcript().last().unwrap();
        assert_eq!(last.text, "Try Luna!");
    }

    #[test]
    fn toast_expiry_clears_on_tick() {
        let mut app = app();
        app.toast = Some(Toast::with_duration(ToastKind::Info, "hi", std::time::Duration::ZERO));
        app.tick_animation();
        assert!(app.toast.is_none());
    }
}
