// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Auth form submitted with a valid name and email
    Login { name: String, email: String },
    /// "Adopt Me" pressed in the detail dialog
    Adopt,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Sign in / sign up form
    Auth(AuthForm),
    /// Cat detail, by cat id
    Detail(&'static str),
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyEvent) -> ModalAction {
        match self {
            Modal::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail(_) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Enter | KeyCode::Char('a') => ModalAction::Adopt,
                _ => ModalAction::None,
            },
            Modal::Auth(form) => form.handle_input(key),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Join Our Family",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to continue your adoption journey",
            AuthMode::SignUp => "Create an account to adopt a cat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Full Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }
}

/// Form state for the auth dialog
///
/// Nothing is verified: any non-empty email and password sign the visitor
/// in. The password is only kept to render its mask.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    password: String,
    focus: usize,
    pub error: Option<&'static str>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields shown in the current mode, top to bottom
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password],
            AuthMode::SignUp => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    pub fn focused(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Current value of a field as displayed (password masked)
    pub fn display_value(&self, field: AuthField) -> String {
        match field {
            AuthField::Name => self.name.clone(),
            AuthField::Email => self.email.clone(),
            AuthField::Password => "•".repeat(self.password.chars().count()),
        }
    }

    pub fn toggle_mode(&mut self) {
        let focused = self.focused();
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        // Keep focus on the same field when it still exists
        self.focus = self
            .fields()
            .iter()
            .position(|f| *f == focused)
            .unwrap_or(0);
        self.error = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn push_char(&mut self, c: char) {
        self.error = None;
        match self.focused() {
            AuthField::Name => self.name.push(c),
            AuthField::Email => self.email.push(c),
            AuthField::Password => self.password.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focused() {
            AuthField::Name => self.name.pop(),
            AuthField::Email => self.email.pop(),
            AuthField::Password => self.password.pop(),
        };
    }

    /// Validate and produce `(display name, email)`
    ///
    /// Email and password are required. The display name is the name field
    /// when given, otherwise the part of the email before '@'.
    pub fn submit(&mut self) -> Option<(String, String)> {
        let email = self.email.trim();
        if email.is_empty() {
            self.error = Some("Email is required");
            return None;
        }
        if self.password.is_empty() {
            self.error = Some("Password is required");
            return None;
        }

        let name = match (self.mode, self.name.trim()) {
            (AuthMode::SignUp, name) if !name.is_empty() => name.to_string(),
            _ => email.split('@').next().unwrap_or(email).to_string(),
        };

        self.error = None;
        Some((name, email.to_string()))
    }

    fn handle_input(&mut self, key: KeyEvent) -> ModalAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('t') {
                self.toggle_mode();
            }
            return ModalAction::None;
        }

        match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => match self.submit() {
                Some((name, email)) => ModalAction::Login { name, email },
                None => ModalAction::None,
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                ModalAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                ModalAction::None
            }
            KeyCode::Backspace => {
                self.pop_char();
                ModalAction::None
            }
            KeyCode::Char(c) => {
                self.push_char(c);
                ModalAction::None
            }
            _ => ModalAction::None,
        }
    }
}
