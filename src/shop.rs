// Shop controller - owns every store and routes visitor intents
//
// One Shop per running client. The TUI renders from it and translates key
// presses into the intent methods below; nothing else mutates the stores.

use crate::assistant::ChatAssistant;
use crate::cart::{AddOutcome, Cart};
use crate::catalog::{self, BreedFilter, Cat};
use crate::session::{SessionStore, User};

/// Screens reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Catalog,
    Cart,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Home, ViewState::Catalog, ViewState::Cart];

    /// Navigation bar label
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Home => "Home",
            ViewState::Catalog => "Our Cats",
            ViewState::Cart => "Cart",
        }
    }
}

/// Result of an adopt intent, for user feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptResult {
    Added(&'static Cat),
    AlreadyInCart(&'static Cat),
    /// Not signed in; the auth dialog was opened
    AuthRequired,
    UnknownCat,
}

pub struct Shop {
    view: ViewState,
    session: SessionStore,
    cart: Cart,
    assistant: ChatAssistant,
    query: String,
    breed: BreedFilter,
    auth_open: bool,
    detail: Option<&'static Cat>,
}

impl Shop {
    pub fn new(session: SessionStore, assistant: ChatAssistant) -> Self {
        Self {
            view: ViewState::Home,
            session,
            cart: Cart::new(),
            assistant,
            query: String::new(),
            breed: BreedFilter::All,
            auth_open: false,
            detail: None,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn assistant(&self) -> &ChatAssistant {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut ChatAssistant {
        &mut self.assistant
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn breed(&self) -> BreedFilter {
        self.breed
    }

    pub fn is_auth_open(&self) -> bool {
        self.auth_open
    }

    pub fn detail(&self) -> Option<&'static Cat> {
        self.detail
    }

    /// Catalog cats matching the current search and breed selection
    pub fn filtered(&self) -> Vec<&'static Cat> {
        catalog::filter(&self.query, self.breed)
    }

    // ─── Navigation ──────────────────────────────────────────────────────────

    pub fn navigate(&mut self, view: ViewState) {
        if self.view != view {
            tracing::debug!("View: {:?} -> {:?}", self.view, view);
        }
        self.view = view;
    }

    // ─── Cart intents ────────────────────────────────────────────────────────

    /// Adopt a cat; prompts for sign-in when there is no session
    pub fn adopt(&mut self, cat_id: &str) -> AdoptResult {
        let Some(cat) = catalog::find(cat_id) else {
            tracing::warn!("Adopt requested for unknown cat id {}", cat_id);
            return AdoptResult::UnknownCat;
        };

        match self.cart.add(cat, self.session.is_signed_in()) {
            AddOutcome::Added => {
                tracing::info!("{} added to adoption request", cat.name);
                AdoptResult::Added(cat)
            }
            AddOutcome::AlreadyInCart => AdoptResult::AlreadyInCart(cat),
            AddOutcome::AuthRequired => {
                tracing::debug!("Adopt {} needs sign-in", cat.name);
                self.auth_open = true;
                AdoptResult::AuthRequired
            }
        }
    }

    pub fn remove_from_cart(&mut self, cat_id: &str) -> bool {
        self.cart.remove(cat_id)
    }

    // ─── Session intents ─────────────────────────────────────────────────────

    pub fn login(&mut self, name: &str, email: &str) -> User {
        let user = self.session.login(name, email);
        self.auth_open = false;
        user
    }

    /// Sign out and go back to the home screen
    pub fn logout(&mut self) {
        self.session.logout();
        self.navigate(ViewState::Home);
    }

    // ─── Catalog inputs ──────────────────────────────────────────────────────

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn set_breed(&mut self, breed: BreedFilter) {
        self.breed = breed;
    }

    pub fn cycle_breed(&mut self, forward: bool) {
        self.breed = if forward {
            self.breed.next()
        } else {
            self.breed.prev()
        };
    }

    // ─── Dialogs ─────────────────────────────────────────────────────────────

    pub fn open_auth(&mut self) {
        self.auth_open = true;
    }

    pub fn close_auth(&mut self) {
        self.auth_open = false;
    }

    pub fn open_detail(&mut self, cat_id: &str) -> bool {
        self.detail = catalog::find(cat_id);
        self.detail.is_some()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// "Adopt Me" inside the detail dialog: adopt, then close the dialog
    pub fn adopt_from_detail(&mut self) -> Option<AdoptResult> {
        let cat = self.detail?;
        let result = self.adopt(cat.id);
        self.detail = None;
        Some(result)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assistant::AssistantSettings;
    use crate::catalog::Breed;
    use crate::storage::MemoryStore;

    pub(crate) fn shop() -> Shop {
        Shop::new(
            SessionStore::restore(Box::new(MemoryStore::new())),
            ChatAssistant::new(None, AssistantSettings::default()),
        )
    }

    #[test]
    fn starts_on_home_signed_out() {
        let shop = shop();
        assert_eq!(shop.view(), ViewState::Home);
        assert!(shop.user().is_none());
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn any_view_reachable_from_any_view() {
        let mut shop = shop();
        for from in ViewState::ALL {
            for to in ViewState::ALL {
                shop.navigate(from);
                shop.navigate(to);
                assert_eq!(shop.view(), to);
            }
        }
    }

    #[test]
    fn adopt_signed_out_opens_auth_and_leaves_cart() {
        let mut shop = shop();
        assert_eq!(shop.adopt("c1"), AdoptResult::AuthRequired);
        assert!(shop.is_auth_open());
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn adopt_after_login() {
        let mut shop = shop();
        shop.adopt("c1");
        shop.login("Sonu", "sonu@example.com");
        assert!(!shop.is_auth_open());

        assert!(matches!(shop.adopt("c1"), AdoptResult::Added(c) if c.id == "c1"));
        assert!(matches!(shop.adopt("c1"), AdoptResult::AlreadyInCart(_)));
        assert_eq!(shop.cart().count(), 1);
        assert_eq!(shop.adopt("nope"), AdoptResult::UnknownCat);
    }

    #[test]
    fn logout_returns_home_from_any_view_and_clears_session() {
        for view in ViewState::ALL {
            let mut shop = shop();
            shop.login("Sonu", "sonu@example.com");
            shop.navigate(view);
            shop.logout();

            assert_eq!(shop.view(), ViewState::Home);
            assert!(shop.user().is_none());
            assert!(shop.session().persisted().is_none());
        }
    }

    #[test]
    fn filtered_follows_inputs() {
        let mut shop = shop();
        assert_eq!(shop.filtered().len(), catalog::all().len());

        for c in "Luna".chars() {
            shop.push_query_char(c);
        }
        assert_eq!(shop.filtered().len(), 1);

        shop.set_query("");
        shop.set_breed(BreedFilter::Only(Breed::Sphynx));
        let names: Vec<_> = shop.filtered().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Cleo"]);

        shop.pop_query_char();
        shop.cycle_breed(true);
        assert_eq!(shop.breed(), BreedFilter::Only(Breed::BritishShorthair));
    }

    #[test]
    fn detail_adopt_closes_dialog() {
        let mut shop = shop();
        shop.login("Sonu", "sonu@example.com");
        assert!(shop.open_detail("c6"));
        let result = shop.adopt_from_detail();
        assert!(matches!(result, Some(AdoptResult::Added(c)) if c.name == "Leo"));
        assert!(shop.detail().is_none());
        assert!(shop.cart().contains("c6"));
    }

    #[test]
    fn detail_adopt_signed_out_prompts() {
        let mut shop = shop();
        shop.open_detail("c6");
        assert_eq!(shop.adopt_from_detail(), Some(AdoptResult::AuthRequired));
        assert!(shop.is_auth_open());
        assert!(shop.detail().is_none());
    }

    #[test]
    fn open_unknown_detail_is_rejected() {
        let mut shop = shop();
        assert!(!shop.open_detail("c99"));
        assert!(shop.detail().is_none());
    }
}
