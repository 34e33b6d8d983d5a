//! Widget-specific event types.
//!
//! Every event carries an [`EventBase`] with an accepted flag. Accepting an
//! event suppresses the host's default action for it (scrolling on Space,
//! focus traversal on Tab) and stops it from propagating to parent widgets.

use storefront_core::{Point, TimerId};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, suppressing default handling and propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing default handling and propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }

    /// A plain left click at `local_pos`.
    pub fn left(local_pos: Point) -> Self {
        Self::new(MouseButton::Left, local_pos, KeyboardModifiers::NONE)
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            modifiers,
        }
    }
}

/// Mouse wheel (scroll) event.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    /// Base event data.
    pub base: EventBase,
    /// Vertical scroll delta. Positive scrolls up (content moves down).
    pub delta_y: f32,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl WheelEvent {
    /// Create a new wheel event.
    pub fn new(delta_y: f32, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            delta_y,
            local_pos,
        }
    }
}

/// Mouse leave event, sent when the pointer exits the widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus in event, sent when the widget gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Keyboard key codes.
///
/// Letters and digits are carried as characters; the remaining variants are
/// the keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key, as typed (case preserved).
    Character(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    Tab,
    Space,
    Escape,
    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// The character for an ASCII letter or digit key (`[a-zA-Z0-9]`).
    pub fn alphanumeric_char(&self) -> Option<char> {
        match self {
            Key::Character(c) if c.is_ascii_alphanumeric() => Some(*c),
            _ => None,
        }
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (empty for non-printable keys).
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// A press of `key` with no modifiers, deriving the text from the key.
    pub fn from_key(key: Key) -> Self {
        let text = match key {
            Key::Character(c) => c.to_string(),
            Key::Space => " ".to_string(),
            _ => String::new(),
        };
        let modifiers = match key {
            Key::Character(c) if c.is_ascii_uppercase() => KeyboardModifiers::SHIFT,
            _ => KeyboardModifiers::NONE,
        };
        Self::new(key, modifiers, text, false)
    }
}

/// Timer event, sent when a widget-owned timer fires.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    /// Base event data.
    pub base: EventBase,
    /// The ID of the timer that fired.
    pub id: TimerId,
}

impl TimerEvent {
    /// Create a new timer event.
    pub fn new(id: TimerId) -> Self {
        Self {
            base: EventBase::new(),
            id,
        }
    }
}

/// Enumeration of all widget event types.
#[derive(Debug)]
pub enum WidgetEvent {
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Mouse wheel event.
    Wheel(WheelEvent),
    /// Mouse leave event.
    Leave(LeaveEvent),
    /// Focus in event.
    FocusIn(FocusInEvent),
    /// Focus out event.
    FocusOut(FocusOutEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Timer event.
    Timer(TimerEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Wheel(e) => &e.base,
            Self::Leave(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::Timer(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Wheel(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::Timer(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Check if this event should propagate to parent widgets.
    ///
    /// Input events propagate unless accepted; focus, leave, and timer
    /// events belong to the widget they were sent to.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::MousePress(_) | Self::MouseMove(_) | Self::Wheel(_) | Self::KeyPress(_) => {
                !self.is_accepted()
            }
            Self::Leave(_) | Self::FocusIn(_) | Self::FocusOut(_) | Self::Timer(_) => false,
        }
    }

    /// Shorthand for a key press event with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyPress(KeyPressEvent::from_key(key))
    }

    /// Shorthand for a left click at `pos`.
    pub fn click(pos: Point) -> Self {
        Self::MousePress(MousePressEvent::left(pos))
    }

    /// Shorthand for a pointer move to `pos`.
    pub fn hover(pos: Point) -> Self {
        Self::MouseMove(MouseMoveEvent::new(pos, KeyboardModifiers::NONE))
    }
}
