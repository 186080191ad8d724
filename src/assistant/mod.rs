//! Chat assistant ("PurrBot")
//!
//! Keeps the conversation transcript and mediates between chat input and an
//! external text generator. The assistant is an explicit two-state machine:
//!
//! ```text
//!            submit(non-empty)                 resolve(outcome)
//!   [Idle] ──────────────────────▶ [Awaiting] ──────────────────▶ [Idle]
//!     │  ▲                              │
//!     │  │ no generator: offline reply  │ submit(..) ignored
//!     └──┘                              └──▶ (no change)
//! ```
//!
//! The user's turn is appended as soon as it is submitted. The request
//! itself is built here but executed by the caller (see
//! [`ChatAssistant::ask`] for the inline version, or the TUI which runs it
//! on a spawned task), so tests can assert on state instead of timing.
//!
//! Failures never surface as error states: every outcome becomes an
//! assistant turn with user-facing text.

mod error;
pub mod gemini;
pub mod prompt;

pub use error::AssistantError;

use async_trait::async_trait;
use std::sync::Arc;

/// First assistant turn of every conversation
pub const GREETING: &str =
    "Meow! Welcome to Sonu's. I'm PurrBot. Tell me what kind of cat you're looking for!";

/// Reply used when no API credential is configured
pub const OFFLINE_MESSAGE: &str =
    "I'm sorry, my brain is currently offline (API Key missing). Please try again later!";

/// Reply used when the call fails (network, service, malformed response)
pub const FAILURE_MESSAGE: &str =
    "Oops! I seem to have coughed up a hairball (technical error). Please try again.";

/// Reply used when the service answers without any text
pub const EMPTY_REPLY_MESSAGE: &str =
    "Purr... I'm thinking, but I got distracted by a laser pointer. Try again?";

/// Who said a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssistantState {
    #[default]
    Idle,
    /// A request is outstanding; input is disabled
    Awaiting,
}

/// Everything the generator needs for one call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub temperature: f32,
    /// Full transcript, ending with the new user turn
    pub turns: Vec<ChatTurn>,
}

/// What happened to a submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Empty input or a request already outstanding
    Ignored,
    /// No credential: offline reply appended, no call made
    Offline,
    /// Now awaiting; the caller must run this request and `resolve` it
    Dispatched(GenerationRequest),
}

/// External text generation
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce the assistant's reply text for `request`
    async fn generate(&self, request: &GenerationRequest) -> Result<String, AssistantError>;

    fn name(&self) -> &'static str;
}

/// Assistant settings independent of the transport
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: prompt::DEFAULT_MODEL.to_string(),
            temperature: prompt::DEFAULT_TEMPERATURE,
        }
    }
}

pub struct ChatAssistant {
    transcript: Vec<ChatTurn>,
    state: AssistantState,
    generator: Option<Arc<dyn TextGenerator>>,
    settings: AssistantSettings,
    system_instruction: String,
}

impl ChatAssistant {
    /// Create an assistant. `None` means no credential: every submission
    /// gets the offline reply.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, settings: AssistantSettings) -> Self {
        match &generator {
            Some(g) => tracing::info!("Assistant online ({}, model {})", g.name(), settings.model),
            None => tracing::warn!("Assistant offline: no API key configured"),
        }

        Self {
            transcript: vec![ChatTurn::assistant(GREETING)],
            state: AssistantState::Idle,
            generator,
            settings,
            system_instruction: prompt::system_instruction(),
        }
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn state(&self) -> AssistantState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == AssistantState::Awaiting
    }

    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Generator handle for running a dispatched request off the event loop
    pub fn generator(&self) -> Option<Arc<dyn TextGenerator>> {
        self.generator.clone()
    }

    /// Submit user input
    pub fn submit(&mut self, input: &str) -> Submission {
        let text = input.trim();
        if text.is_empty() || self.is_awaiting() {
            return Submission::Ignored;
        }

        self.transcript.push(ChatTurn::user(text));

        if self.generator.is_none() {
            self.transcript.push(ChatTurn::assistant(OFFLINE_MESSAGE));
            return Submission::Offline;
        }

        self.state = AssistantState::Awaiting;
        tracing::debug!("Assistant awaiting reply ({} turns)", self.transcript.len());

        Submission::Dispatched(GenerationRequest {
            model: self.settings.model.clone(),
            system_instruction: self.system_instruction.clone(),
            temperature: self.settings.temperature,
            turns: self.transcript.clone(),
        })
    }

    /// Apply the outcome of a dispatched request
    ///
    /// Ignored unless a request is outstanding.
    pub fn resolve(&mut self, outcome: Result<String, AssistantError>) {
        if !self.is_awaiting() {
            tracing::debug!("Ignoring assistant reply with no request outstanding");
            return;
        }

        let reply = match outcome {
            Ok(text) => text,
            Err(AssistantError::EmptyResponse) => EMPTY_REPLY_MESSAGE.to_string(),
            Err(e) => {
                tracing::error!("Assistant request failed: {}", e);
                FAILURE_MESSAGE.to_string()
            }
        };

        self.transcript.push(ChatTurn::assistant(reply));
        self.state = AssistantState::Idle;
    }

    /// Submit and, if dispatched, run the request inline
    pub async fn ask(&mut self, input: &str) -> Submission {
        let submission = self.submit(input);
        if let Submission::Dispatched(ref request) = submission {
            let outcome = match &self.generator {
                Some(generator) => generator.generate(request).await,
                None => Err(AssistantError::NotConfigured),
            };
            self.resolve(outcome);
        }
        submission
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted generator that records every request it sees
    pub(crate) struct ScriptedGenerator {
        pub replies: Mutex<Vec<Result<String, AssistantError>>>,
        pub calls: AtomicUsize,
        pub seen: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedGenerator {
        pub(crate) fn new(replies: Vec<Result<String, AssistantError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, AssistantError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                Ok("Meow.".to_string())
            } else {
                replies.remove(0)
            }
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    fn online(replies: Vec<Result<String, AssistantError>>) -> (ChatAssistant, Arc<ScriptedGenerator>) {
        let generator = ScriptedGenerator::new(replies);
        let assistant = ChatAssistant::new(
            Some(generator.clone() as Arc<dyn TextGenerator>),
            AssistantSettings::default(),
        );
        (assistant, generator)
    }

    #[test]
    fn starts_idle_with_greeting() {
        let assistant = ChatAssistant::new(None, AssistantSettings::default());
        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(assistant.transcript(), &[ChatTurn::assistant(GREETING)]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let (mut assistant, _) = online(vec![]);
        assert_eq!(assistant.submit("   "), Submission::Ignored);
        assert_eq!(assistant.transcript().len(), 1);
        assert_eq!(assistant.state(), AssistantState::Idle);
    }

    #[test]
    fn submit_appends_user_turn_and_awaits() {
        let (mut assistant, _) = online(vec![]);
        let submission = assistant.submit("  a calm cat please ");

        let Submission::Dispatched(request) = submission else {
            panic!("expected dispatch, got {:?}", submission);
        };
        assert_eq!(assistant.state(), AssistantState::Awaiting);
        assert_eq!(
            assistant.transcript().last(),
            Some(&ChatTurn::user("a calm cat please"))
        );
        assert_eq!(request.turns, assistant.transcript());
        assert_eq!(request.model, prompt::DEFAULT_MODEL);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert!(request.system_instruction.contains("PurrBot"));
    }

    #[test]
    fn submit_while_awaiting_has_no_effect() {
        let (mut assistant, _) = online(vec![]);
        assistant.submit("first");
        let len = assistant.transcript().len();

        assert_eq!(assistant.submit("second"), Submission::Ignored);
        assert_eq!(assistant.transcript().len(), len);
        assert_eq!(assistant.state(), AssistantState::Awaiting);
    }

    #[test]
    fn resolve_success_appends_reply() {
        let (mut assistant, _) = online(vec![]);
        assistant.submit("hi");
        assistant.resolve(Ok("Try Bella!".to_string()));

        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(
            assistant.transcript().last(),
            Some(&ChatTurn::assistant("Try Bella!"))
        );
    }

    #[test]
    fn resolve_failure_keeps_user_turn_and_apologizes() {
        let (mut assistant, _) = online(vec![]);
        assistant.submit("hi");
        assistant.resolve(Err(AssistantError::Network("reset".into())));

        let t = assistant.transcript();
        assert_eq!(t[t.len() - 2], ChatTurn::user("hi"));
        assert_eq!(t[t.len() - 1], ChatTurn::assistant(FAILURE_MESSAGE));
        assert_eq!(assistant.state(), AssistantState::Idle);
    }

    #[test]
    fn empty_response_gets_laser_pointer_reply() {
        let (mut assistant, _) = online(vec![]);
        assistant.submit("hi");
        assistant.resolve(Err(AssistantError::EmptyResponse));
        assert_eq!(
            assistant.transcript().last(),
            Some(&ChatTurn::assistant(EMPTY_REPLY_MESSAGE))
        );
    }

    #[test]
    fn stray_resolve_is_ignored() {
        let (mut assistant, _) = online(vec![]);
        assistant.resolve(Ok("unsolicited".into()));
        assert_eq!(assistant.transcript().len(), 1);
    }

    #[tokio::test]
    async fn offline_reply_without_calling_out() {
        let generator = ScriptedGenerator::new(vec![]);
        let mut assistant = ChatAssistant::new(None, AssistantSettings::default());

        assert_eq!(assistant.ask("hello?").await, Submission::Offline);
        assert_eq!(
            assistant.transcript().last(),
            Some(&ChatTurn::assistant(OFFLINE_MESSAGE))
        );
        assert_eq!(assistant.state(), AssistantState::Idle);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ask_sends_full_history_each_turn() {
        let (mut assistant, generator) =
            online(vec![Ok("Meet Leo!".into()), Ok("He is 10 months old.".into())]);

        assistant.ask("an active cat?").await;
        assistant.ask("how old?").await;

        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen[0].turns.len(), 2);
        assert_eq!(
            seen[1].turns,
            vec![
                ChatTurn::assistant(GREETING),
                ChatTurn::user("an active cat?"),
                ChatTurn::assistant("Meet Leo!"),
                ChatTurn::user("how old?"),
            ]
        );
        assert_eq!(assistant.transcript().len(), 5);
    }

    #[tokio::test]
    async fn transcript_order_is_conversation_order() {
        let (mut assistant, _) = online(vec![Ok("same".into()), Ok("same".into())]);
        assistant.ask("same").await;
        assistant.ask("same").await;

        let roles: Vec<Role> = assistant.transcript().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
    }
}
