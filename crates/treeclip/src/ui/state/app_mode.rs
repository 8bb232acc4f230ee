pub enum AppMode {
    /// Cursor over the flattened tree rows, output pane alongside.
    Browse { cursor: usize, output_scroll: u16 },
    Help { context: HelpContext },
}

impl AppMode {
    pub fn browse() -> Self {
        AppMode::Browse {
            cursor: 0,
            output_scroll: 0,
        }
    }
}

/// Captures which view opened the help overlay so it can be restored on
/// close.
pub enum HelpContext {
    Browse { cursor: usize, output_scroll: u16 },
}

impl HelpContext {
    /// Returns the keybinding pairs `(key, description)` for the
    /// originating view.
    pub fn keybindings(&self) -> &[(&str, &str)] {
        match self {
            HelpContext::Browse { .. } => &[
                ("j / k", "Move tree cursor"),
                ("Space", "Toggle selection"),
                ("Enter", "Build output"),
                ("c", "Copy output to clipboard"),
                ("Up / Down", "Scroll output"),
                ("x", "Clear selection"),
                ("R", "Reset selection and output"),
                ("r", "Rescan folder"),
                ("?", "Help"),
                ("q / Esc", "Quit"),
            ],
        }
    }

    /// Reconstructs the `AppMode` that was active before help was opened.
    pub fn restore_mode(self) -> AppMode {
        match self {
            HelpContext::Browse {
                cursor,
                output_scroll,
            } => AppMode::Browse {
                cursor,
                output_scroll,
            },
        }
    }

    /// Display title for the help overlay header.
    pub fn title(&self) -> &'static str {
        "Keybindings"
    }
}
