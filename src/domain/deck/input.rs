//! Input bindings - maps raw keys, clicks and swipes to navigation commands.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Default minimum horizontal travel, in pixels, for a swipe to count.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// A keyboard key the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
    F11,
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowLeft => write!(f, "ArrowLeft"),
            Key::ArrowRight => write!(f, "ArrowRight"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::Escape => write!(f, "Escape"),
            Key::F11 => write!(f, "F11"),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Key {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            "Home" => Ok(Key::Home),
            "End" => Ok(Key::End),
            "Escape" | "Esc" => Ok(Key::Escape),
            "F11" => Ok(Key::F11),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(ValidationError::invalid_format(
                        "key",
                        format!("unknown key '{}'", other),
                    )),
                }
            }
        }
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }

    fn is_ctrl_char(&self, expected: char) -> bool {
        self.ctrl && matches!(self.key, Key::Char(c) if c.eq_ignore_ascii_case(&expected))
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Parses `ArrowLeft`, `End`, `Ctrl+S`, `ctrl+p` and similar.
impl FromStr for KeyPress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lowered = s.to_ascii_lowercase();
        if lowered.starts_with("ctrl+") {
            let key = s[5..].parse()?;
            return Ok(KeyPress::ctrl(key));
        }
        Ok(KeyPress::plain(s.parse()?))
    }
}

/// A discrete request to move through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Previous,
    Next,
    GoTo(usize),
    First,
    Last,
}

impl NavigationCommand {
    /// Navigation bound to a key, if any.
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        match press.key {
            Key::ArrowLeft => Some(NavigationCommand::Previous),
            Key::ArrowRight => Some(NavigationCommand::Next),
            Key::Home => Some(NavigationCommand::First),
            Key::End => Some(NavigationCommand::Last),
            _ => None,
        }
    }
}

/// Horizontal touch movement between touch start and touch end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    pub start_x: f32,
    pub end_x: f32,
}

impl SwipeGesture {
    pub fn new(start_x: f32, end_x: f32) -> Self {
        Self { start_x, end_x }
    }

    /// Swiping left advances, swiping right goes back. Travel must strictly
    /// exceed `threshold_px`. Non-finite coordinates are ignored.
    pub fn command(&self, threshold_px: f32) -> Option<NavigationCommand> {
        let diff = self.start_x - self.end_x;
        if !diff.is_finite() || diff.abs() <= threshold_px {
            return None;
        }
        if diff > 0.0 {
            Some(NavigationCommand::Next)
        } else {
            Some(NavigationCommand::Previous)
        }
    }
}

/// Presentation-level actions reachable by shortcut or context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationAction {
    ToggleFullscreen,
    Print,
    ExportDecisions,
}

impl PresentationAction {
    /// Context menu entries, in display order.
    pub const MENU: [PresentationAction; 3] = [
        PresentationAction::ToggleFullscreen,
        PresentationAction::Print,
        PresentationAction::ExportDecisions,
    ];

    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if press.key == Key::F11 {
            Some(PresentationAction::ToggleFullscreen)
        } else if press.is_ctrl_char('p') {
            Some(PresentationAction::Print)
        } else if press.is_ctrl_char('s') {
            Some(PresentationAction::ExportDecisions)
        } else {
            None
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            PresentationAction::ToggleFullscreen => "Toggle Fullscreen (F11)",
            PresentationAction::Print => "Print Slides (Ctrl+P)",
            PresentationAction::ExportDecisions => "Export Decisions (Ctrl+S)",
        }
    }
}
