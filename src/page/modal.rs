//! Vim mode toggle.
//!
//! Two states. Enabling attaches a session from the `ModalLayer` and
//! defines the `:w` ex command; disabling disposes the session. Both
//! transitions are no-ops when already in the target state.
//!
//! Ex commands carry their handler into the session, so a layer that
//! parses `:w` itself calls straight back into the page.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::editor::EditorHost;

pub const ENABLE_LABEL: &str = "Enable Vim Mode";
pub const DISABLE_LABEL: &str = "Disable Vim Mode";

/// Ex command that runs the snippet.
pub const WRITE_COMMAND: &str = "w";

/// The modal-editing emulation attached to an editor.
pub trait ModalLayer: Send + Sync {
    fn attach(&self, editor: &EditorHost) -> Box<dyn ModalSession>;
}

/// Work started by an ex command.
pub type ExFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Callback bound to an ex command name.
pub type ExHandler = Arc<dyn Fn() -> ExFuture + Send + Sync>;

/// One attached emulation instance.
pub trait ModalSession: Send {
    /// Register `:name`. The session awaits (or spawns) `handler()` when
    /// the user enters the command.
    fn define_ex(&mut self, name: &str, handler: ExHandler);
    /// Mode text for the status line, e.g. `-- INSERT --`.
    fn status(&self) -> String;
    fn dispose(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Disabled,
    Enabled,
}

impl ModalState {
    /// Toggle button text shown in this state.
    pub fn label(self) -> &'static str {
        match self {
            ModalState::Disabled => ENABLE_LABEL,
            ModalState::Enabled => DISABLE_LABEL,
        }
    }
}

pub struct ModalToggle {
    layer: Arc<dyn ModalLayer>,
    session: Option<Box<dyn ModalSession>>,
    commands: HashMap<String, ExHandler>,
}

impl ModalToggle {
    pub fn new(layer: Arc<dyn ModalLayer>) -> Self {
        Self {
            layer,
            session: None,
            commands: HashMap::new(),
        }
    }

    pub fn state(&self) -> ModalState {
        if self.session.is_some() {
            ModalState::Enabled
        } else {
            ModalState::Disabled
        }
    }

    /// Attach a session with `:w` bound to `write`. Returns false if one
    /// was already attached.
    pub fn enable(&mut self, editor: &EditorHost, write: ExHandler) -> bool {
        if self.session.is_some() {
            return false;
        }
        let mut session = self.layer.attach(editor);
        session.define_ex(WRITE_COMMAND, write.clone());
        self.commands.insert(WRITE_COMMAND.to_string(), write);
        self.session = Some(session);
        true
    }

    /// Dispose the session. Returns false if there was none.
    pub fn disable(&mut self) -> bool {
        match self.session.take() {
            Some(mut session) => {
                session.dispose();
                self.commands.clear();
                true
            }
            None => false,
        }
    }

    /// Look up an ex command; nothing is defined while disabled.
    pub fn command(&self, name: &str) -> Option<ExHandler> {
        self.session.as_ref()?;
        self.commands.get(name).cloned()
    }

    pub fn status(&self) -> String {
        self.session.as_ref().map(|s| s.status()).unwrap_or_default()
    }
}
