//! The page: editor, vim toggle, and the Run/Reset/Share buttons.

use std::sync::{Arc, Mutex, Weak};

use tokio::task::JoinHandle;

use super::client::PlaygroundApi;
use super::editor::{EditorHost, EditorOptions, EditorWidget};
use super::execution::{render_compile_result, render_run_failure, COMPILING_TEXT};
use super::modal::{ExFuture, ExHandler, ModalLayer, ModalState, ModalToggle};
use super::settings::{read_flag, SettingsStore, VI_MODE_KEY};
use super::sharing::{share_field_text, Clipboard, TOOLTIP_DURATION};
use super::view::PageView;
use super::{lock, PageError, RequestGeneration, DEFAULT_SNIPPET};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Run,
    Reset,
    Share,
    ToggleModal,
}

/// External collaborators the page is built from.
pub struct Capabilities {
    pub widget: Box<dyn EditorWidget>,
    pub modal_layer: Arc<dyn ModalLayer>,
    pub settings: Arc<dyn SettingsStore>,
    pub api: Arc<dyn PlaygroundApi>,
    pub clipboard: Arc<dyn Clipboard>,
}

pub struct Page {
    this: Weak<Page>,
    editor: Mutex<EditorHost>,
    view: Arc<Mutex<PageView>>,
    modal: Mutex<ModalToggle>,
    settings: Arc<dyn SettingsStore>,
    api: Arc<dyn PlaygroundApi>,
    clipboard: Arc<dyn Clipboard>,
    runs: RequestGeneration,
    shares: RequestGeneration,
}

impl Page {
    /// Build the page: editor seeded with the default snippet, panels hidden
    /// on every edit, vim mode restored from settings.
    pub fn load(caps: Capabilities) -> Arc<Self> {
        let mut editor = EditorHost::create(EditorOptions::go(DEFAULT_SNIPPET), caps.widget);

        let view = Arc::new(Mutex::new(PageView::default()));
        let panels = view.clone();
        editor.on_change(move |_| lock(&panels).hide_panels());

        let page = Arc::new_cyclic(|this| Self {
            this: this.clone(),
            editor: Mutex::new(editor),
            view,
            modal: Mutex::new(ModalToggle::new(caps.modal_layer)),
            settings: caps.settings,
            api: caps.api,
            clipboard: caps.clipboard,
            runs: RequestGeneration::default(),
            shares: RequestGeneration::default(),
        });

        if read_flag(page.settings.as_ref(), VI_MODE_KEY) {
            page.enable_modal();
        }
        page
    }

    pub fn view(&self) -> PageView {
        let mut view = lock(&self.view).clone();
        view.status = lock(&self.modal).status();
        view
    }

    pub fn text(&self) -> String {
        lock(&self.editor).text()
    }

    pub fn modal_state(&self) -> ModalState {
        lock(&self.modal).state()
    }

    /// Replace the snippet as if the user typed it.
    pub fn edit(&self, text: &str) {
        lock(&self.editor).set_text(text);
    }

    pub async fn click(&self, button: Button) {
        tracing::debug!(?button, "click");
        match button {
            Button::Run => self.run().await,
            Button::Reset => self.reset(),
            Button::Share => self.share().await,
            Button::ToggleModal => self.toggle_modal(),
        }
    }

    /// Send the snippet to the playground and show its output.
    ///
    /// Responses of superseded runs are dropped.
    pub async fn run(&self) {
        let generation = self.runs.next();
        {
            let mut view = lock(&self.view);
            view.result_visible = true;
            view.result_text = COMPILING_TEXT.to_string();
        }
        let code = self.text();

        let text = match self.api.compile(&code).await {
            Ok(response) => render_compile_result(&response),
            Err(e) => render_run_failure(&e),
        };

        if !self.runs.is_current(generation) {
            tracing::debug!(generation, "dropping superseded run result");
            return;
        }
        lock(&self.view).result_text = text;
    }

    /// Share the snippet and show its URL, or a placeholder on failure.
    pub async fn share(&self) {
        let generation = self.shares.next();
        let code = self.text();

        let field = share_field_text(self.api.share(&code).await);

        if !self.shares.is_current(generation) {
            tracing::debug!(generation, "dropping superseded share result");
            return;
        }
        let mut view = lock(&self.view);
        view.share_url = field;
        view.share_visible = true;
    }

    /// Restore the default snippet and hide both panels.
    pub fn reset(&self) {
        lock(&self.editor).set_text(DEFAULT_SNIPPET);
        lock(&self.view).hide_panels();
    }

    pub fn toggle_modal(&self) {
        let enabled = match self.modal_state() {
            ModalState::Enabled => {
                self.disable_modal();
                false
            }
            ModalState::Disabled => {
                self.enable_modal();
                true
            }
        };
        self.settings.set(VI_MODE_KEY, if enabled { "true" } else { "false" });
    }

    fn enable_modal(&self) {
        let write = self.write_handler();
        let mut modal = lock(&self.modal);
        if !modal.enable(&lock(&self.editor), write) {
            return;
        }
        let mut view = lock(&self.view);
        view.help_note_visible = true;
        view.toggle_label = ModalState::Enabled.label().to_string();
        tracing::info!("vim mode enabled");
    }

    fn disable_modal(&self) {
        let mut modal = lock(&self.modal);
        if !modal.disable() {
            return;
        }
        let mut view = lock(&self.view);
        view.help_note_visible = false;
        view.toggle_label = ModalState::Disabled.label().to_string();
        tracing::info!("vim mode disabled");
    }

    /// `:w` handler. Holds the page weakly so an attached session does not
    /// keep it alive.
    fn write_handler(&self) -> ExHandler {
        let page = self.this.clone();
        Arc::new(move || {
            let page = page.clone();
            let run: ExFuture = Box::pin(async move {
                if let Some(page) = page.upgrade() {
                    page.run().await;
                }
            });
            run
        })
    }

    /// Dispatch an ex command typed in vim mode, for hosts that parse ex
    /// commands themselves.
    pub async fn ex_command(&self, name: &str) {
        let handler = lock(&self.modal).command(name);
        match handler {
            Some(handler) => handler().await,
            None => tracing::debug!(name, "ignoring ex command"),
        }
    }

    /// Select the share URL, copy it, and flash the tooltip.
    ///
    /// The returned handle completes once the tooltip is hidden again.
    pub async fn copy_share_url(&self) -> Result<JoinHandle<()>, PageError> {
        let url = {
            let mut view = lock(&self.view);
            view.share_selected = true;
            view.share_url.clone()
        };

        self.clipboard.write_text(&url).await?;

        lock(&self.view).tooltip_visible = true;
        let view = self.view.clone();
        Ok(tokio::spawn(async move {
            tokio::time::sleep(TOOLTIP_DURATION).await;
            lock(&view).tooltip_visible = false;
        }))
    }
}
