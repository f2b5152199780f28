/// Pages the content area can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Welcome,
    Todo,
}

impl Page {
    /// Parse the `ui.start_page` config value
    pub fn from_config(name: &str) -> Option<Self> {
        match name {
            "welcome" => Some(Page::Welcome),
            "todo" => Some(Page::Todo),
            _ => None,
        }
    }
}

/// Which half of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Menu,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    ShowPage(Page),
    FocusPane(Pane),

    // Rendering
    Redraw,

    // App control
    Quit,
    None,
}
