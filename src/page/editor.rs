//! Editor host.
//!
//! Owns the snippet text through an `EditorWidget` and notifies listeners
//! after every change, the way Monaco's `onDidChangeModelContent` does.

/// Options used when creating the editor widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    /// Id of the element the widget is mounted in.
    pub container: String,
    pub value: String,
    pub language: String,
    pub theme: String,
}

impl EditorOptions {
    /// Go source in the dark theme, mounted in `#container`.
    pub fn go(value: impl Into<String>) -> Self {
        Self {
            container: "container".to_string(),
            value: value.into(),
            language: "go".to_string(),
            theme: "vs-dark".to_string(),
        }
    }
}

/// The embedded text-editing widget.
pub trait EditorWidget: Send {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
}

/// Headless widget holding the text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryWidget {
    value: String,
}

impl EditorWidget for MemoryWidget {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.value = text.to_string();
    }
}

type ChangeListener = Box<dyn FnMut(&str) + Send>;

pub struct EditorHost {
    widget: Box<dyn EditorWidget>,
    options: EditorOptions,
    listeners: Vec<ChangeListener>,
}

impl EditorHost {
    /// Mount `widget` and seed it with `options.value`.
    pub fn create(options: EditorOptions, mut widget: Box<dyn EditorWidget>) -> Self {
        widget.set_value(&options.value);
        tracing::debug!(
            container = %options.container,
            language = %options.language,
            theme = %options.theme,
            "editor created"
        );
        Self {
            widget,
            options,
            listeners: Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        self.widget.value()
    }

    /// Replace the content, then run every change listener in order.
    pub fn set_text(&mut self, text: &str) {
        self.widget.set_value(text);
        for listener in self.listeners.iter_mut() {
            listener(text);
        }
    }

    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }
}
