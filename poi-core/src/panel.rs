//! Side panel state machine.
//!
//! The panel never builds markup from raw strings: it keeps structured
//! [`PanelContent`] and escapes every text field when rendering.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelContent {
    Point { title: String, description: String },
    Error { message: String },
}

impl PanelContent {
    pub fn error(message: impl Into<String>) -> Self {
        PanelContent::Error {
            message: message.into(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            PanelContent::Point { title, description } => format!(
                "<h2>{}</h2><p>{}</p>",
                escape_html(title),
                escape_html(description)
            ),
            PanelContent::Error { message } => {
                format!("<p class=\"error\">{}</p>", escape_html(message))
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DetailPanel {
    state: PanelState,
    content: Option<PanelContent>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content and open the panel.
    pub fn render(&mut self, content: PanelContent) {
        self.content = Some(content);
        self.state = PanelState::Open;
    }

    pub fn open(&mut self) {
        self.state = PanelState::Open;
    }

    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    /// Escaped markup of the current content, empty if nothing was rendered.
    pub fn html(&self) -> String {
        self.content
            .as_ref()
            .map(PanelContent::to_html)
            .unwrap_or_default()
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
