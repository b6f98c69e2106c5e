//! Semantic commands, independent of the keys bound to them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,

    FocusNext,
    FocusPrev,
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    ActivateFocused,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::FocusLeft => "focusLeft",
            Command::FocusRight => "focusRight",
            Command::FocusUp => "focusUp",
            Command::FocusDown => "focusDown",
            Command::ActivateFocused => "activate",
            Command::ScrollUp => "scrollUp",
            Command::ScrollDown => "scrollDown",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::ScrollTop => "scrollTop",
            Command::ScrollBottom => "scrollBottom",
        }
    }

    /// Parses a command name from settings; matching ignores case, `_` and `.`.
    pub fn from_name(name: &str) -> Option<Command> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '.')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let cmd = match normalized.as_str() {
            "quit" | "exit" => Command::Quit,
            "focusnext" => Command::FocusNext,
            "focusprev" | "focusprevious" => Command::FocusPrev,
            "focusleft" => Command::FocusLeft,
            "focusright" => Command::FocusRight,
            "focusup" => Command::FocusUp,
            "focusdown" => Command::FocusDown,
            "activate" | "activatefocused" | "learnmore" => Command::ActivateFocused,
            "scrollup" => Command::ScrollUp,
            "scrolldown" => Command::ScrollDown,
            "pageup" => Command::PageUp,
            "pagedown" => Command::PageDown,
            "scrolltop" | "top" => Command::ScrollTop,
            "scrollbottom" | "bottom" => Command::ScrollBottom,
            _ => return None,
        };
        Some(cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
