//! Searchable single/multi selection dropdown.
//!
//! `SearchableMultiSelect` shows a label, a selection area, and, while open,
//! a list of options below it. It never owns the selection: values are read
//! from a [`SelectionSource`] and every change goes through
//! [`SelectionSource::update`].
//!
//! Single-select mode replaces the selection on each pick and closes the
//! list. Multi-select mode toggles membership, keeps the list open, and
//! shows each selected value as a chip with its own delete control.
//!
//! # Keyboard
//!
//! | Key | Effect |
//! |-----|--------|
//! | Space | Open, or toggle the focused option (multi-select) |
//! | Enter | Toggle open/closed |
//! | Escape, Tab | Close if open |
//! | ArrowDown / ArrowUp | Move the focused option |
//! | `[a-zA-Z0-9]` | Type-ahead: focus the first option starting with the typed text |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use storefront::model::{SelectionSource, SharedSelection};
//! use storefront::widget::widgets::SearchableMultiSelect;
//! use storefront::widget::{Key, Widget, WidgetEvent, FocusInEvent, FocusReason};
//! use storefront_core::SharedTimerManager;
//!
//! let selection = SharedSelection::new();
//! let timers = Arc::new(SharedTimerManager::new());
//! let mut select = SearchableMultiSelect::new(
//!     ["Apple", "Banana", "Cherry"],
//!     Arc::new(selection.clone()),
//!     timers,
//! )
//! .with_label("Fruit")
//! .with_multiple(true);
//!
//! select.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
//! select.event(&mut WidgetEvent::key(Key::Space));
//! select.event(&mut WidgetEvent::key(Key::ArrowDown));
//! select.event(&mut WidgetEvent::key(Key::Space));
//!
//! assert!(select.is_open());
//! assert_eq!(selection.values(), vec!["Apple"]);
//! ```

use std::sync::Arc;
use std::time::Duration;

use storefront_core::logging::targets;
use storefront_core::{Point, Rect, SharedTimerManager, Signal, Size, TimerId};

use crate::model::{OptionList, SelectionSource, toggled, without};
use crate::settings::SelectSettings;
use crate::widget::{
    FixedAdvanceMetrics, FocusPolicy, IconName, Key, KeyPressEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, Role, TextMetrics, TimerEvent, ViewNode, WheelEvent, Widget, WidgetBase,
    WidgetEvent,
};

const FONT_SIZE: f32 = 14.0;
const LABEL_HEIGHT: f32 = 20.0;
const PADDING: f32 = 8.0;
const MIN_SELECTION_HEIGHT: f32 = 36.0;
const ARROW_WIDTH: f32 = 24.0;
const CHIP_HEIGHT: f32 = 24.0;
const CHIP_SPACING: f32 = 4.0;
const DELETE_SIZE: f32 = 16.0;
const ITEM_HEIGHT: f32 = 32.0;
const CHECKBOX_SIZE: f32 = 16.0;
const DEFAULT_WIDTH: f32 = 240.0;

/// Parts of the widget for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MultiSelectPart {
    #[default]
    None,
    Label,
    /// The selection area outside any chip or the arrow.
    Selection,
    Arrow,
    /// The body of the chip for the selected value at this position.
    Chip(usize),
    /// The delete control inside a chip.
    ChipDelete(usize),
    /// An option row, by option index.
    Option(usize),
}

#[derive(Debug, Clone)]
struct ChipLayout {
    value: String,
    rect: Rect,
    delete: Rect,
}

/// Widget-local geometry for one frame.
#[derive(Debug, Clone)]
struct Layout {
    label: Rect,
    selection: Rect,
    arrow: Rect,
    chips: Vec<ChipLayout>,
    popup: Rect,
}

/// A dropdown for choosing one or many values from a fixed option list.
///
/// Keyboard input is only handled while the widget has focus; the host
/// delivers [`WidgetEvent::FocusIn`] and [`WidgetEvent::FocusOut`] as focus
/// moves. Type-ahead uses a one-shot timer on the shared timer manager; the
/// host routes its expiry back through [`Widget::event`], for example with
/// [`deliver_expired_timers`](crate::widget::deliver_expired_timers).
///
/// # Signals
///
/// - `open_changed(bool)`: emitted when the option list opens or closes
/// - `focused_index_changed(Option<usize>)`: emitted when the keyboard focus
///   moves to another option
pub struct SearchableMultiSelect {
    base: WidgetBase,

    options: OptionList,
    selection: Arc<dyn SelectionSource>,
    label: String,
    placeholder: String,
    multiple: bool,

    open: bool,
    /// Option under keyboard focus, independent of the selection.
    focused_index: Option<usize>,
    /// First option row shown in the popup.
    scroll_offset: usize,
    max_visible_items: usize,

    timers: Arc<SharedTimerManager>,
    type_ahead: String,
    type_ahead_timer: Option<TimerId>,
    type_ahead_timeout: Duration,

    metrics: Box<dyn TextMetrics>,
    hover_part: MultiSelectPart,

    /// Signal emitted when the option list opens or closes.
    pub open_changed: Signal<bool>,
    /// Signal emitted when the focused option changes.
    pub focused_index_changed: Signal<Option<usize>>,
}

impl SearchableMultiSelect {
    /// Create a closed, single-select widget over `options`.
    pub fn new(
        options: impl Into<OptionList>,
        selection: Arc<dyn SelectionSource>,
        timers: Arc<SharedTimerManager>,
    ) -> Self {
        let mut base = WidgetBase::new();
        base.set_focus_policy(FocusPolicy::StrongFocus);
        let defaults = SelectSettings::default();

        Self {
            base,
            options: options.into(),
            selection,
            label: String::new(),
            placeholder: String::new(),
            multiple: false,
            open: false,
            focused_index: None,
            scroll_offset: 0,
            max_visible_items: defaults.max_visible_items,
            timers,
            type_ahead: String::new(),
            type_ahead_timer: None,
            type_ahead_timeout: defaults.type_ahead_timeout(),
            metrics: Box::new(FixedAdvanceMetrics::default()),
            hover_part: MultiSelectPart::None,
            open_changed: Signal::new(),
            focused_index_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Replace the option list.
    ///
    /// A focus index past the end of the new list is cleared.
    pub fn set_options(&mut self, options: impl Into<OptionList>) {
        self.options = options.into();
        if self.focused_index.is_some_and(|i| i >= self.options.len()) {
            self.set_focused_index(None);
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.base.update();
    }

    /// The selection this widget reads and updates.
    pub fn selection(&self) -> &Arc<dyn SelectionSource> {
        &self.selection
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.base.update();
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.base.update();
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether several values may be selected at once.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
        self.base.update();
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Apply type-ahead timeout and popup size from settings.
    pub fn with_settings(mut self, settings: &SelectSettings) -> Self {
        self.type_ahead_timeout = settings.type_ahead_timeout();
        self.max_visible_items = settings.max_visible_items.max(1);
        self
    }

    /// Idle time after which the type-ahead buffer is cleared.
    pub fn type_ahead_timeout(&self) -> Duration {
        self.type_ahead_timeout
    }

    pub fn with_type_ahead_timeout(mut self, timeout: Duration) -> Self {
        self.type_ahead_timeout = timeout;
        self
    }

    pub fn max_visible_items(&self) -> usize {
        self.max_visible_items
    }

    pub fn set_max_visible_items(&mut self, count: usize) {
        self.max_visible_items = count.max(1);
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.ensure_focused_visible();
        self.base.update();
    }

    pub fn with_max_visible_items(mut self, count: usize) -> Self {
        self.max_visible_items = count.max(1);
        self
    }

    /// Use `metrics` to measure text for layout and hit testing.
    pub fn with_metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the option list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The option under keyboard focus.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    /// Characters typed since the type-ahead timer last expired.
    pub fn type_ahead_buffer(&self) -> &str {
        &self.type_ahead
    }

    /// Index of the first option row shown in the popup.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn set_focused_index(&mut self, index: Option<usize>) {
        if self.focused_index != index {
            self.focused_index = index;
            self.ensure_focused_visible();
            self.base.update();
            self.focused_index_changed.emit(index);
        }
    }

    // =========================================================================
    // Popup Control
    // =========================================================================

    /// Open the option list. An empty option list opens with no rows.
    pub fn show_popup(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.ensure_focused_visible();
        self.base.update();
        tracing::debug!(target: targets::MULTI_SELECT, label = %self.label, "opened");
        self.open_changed.emit(true);
    }

    /// Close the option list.
    pub fn hide_popup(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.base.update();
        tracing::debug!(target: targets::MULTI_SELECT, label = %self.label, "closed");
        self.open_changed.emit(false);
    }

    pub fn toggle_popup(&mut self) {
        if self.open {
            self.hide_popup();
        } else {
            self.show_popup();
        }
    }

    fn visible_count(&self) -> usize {
        self.options.len().min(self.max_visible_items)
    }

    fn max_scroll(&self) -> usize {
        self.options.len().saturating_sub(self.max_visible_items)
    }

    fn ensure_focused_visible(&mut self) {
        let Some(idx) = self.focused_index else {
            return;
        };
        if idx < self.scroll_offset {
            self.scroll_offset = idx;
        } else if idx >= self.scroll_offset + self.max_visible_items {
            self.scroll_offset = idx + 1 - self.max_visible_items;
        }
    }

    // =========================================================================
    // Selection Changes
    // =========================================================================

    /// Apply a pick of the option at `index` the way a click does.
    fn pick(&mut self, index: usize) {
        let Some(value) = self.options.value(index).map(str::to_owned) else {
            return;
        };
        if self.multiple {
            self.selection.update(&|prev| toggled(prev, &value));
        } else {
            self.selection.replace(vec![value]);
            self.hide_popup();
        }
        self.base.update();
    }

    fn delete_value(&mut self, value: &str) {
        self.selection.update(&|prev| without(prev, value));
        self.base.update();
    }

    // =========================================================================
    // Type-ahead
    // =========================================================================

    #[tracing::instrument(skip(self), target = "storefront::multi_select", level = "trace")]
    fn type_ahead_char(&mut self, c: char) {
        self.stop_type_ahead_timer();
        self.type_ahead_timer = Some(self.timers.start_one_shot(self.type_ahead_timeout));
        self.type_ahead.push(c);

        let Some(index) = self.options.find_prefix(&self.type_ahead) else {
            return;
        };
        self.set_focused_index(Some(index));
        if !self.multiple
            && let Some(value) = self.options.value(index)
        {
            self.selection.replace(vec![value.to_owned()]);
        }
    }

    fn stop_type_ahead_timer(&mut self) {
        if let Some(id) = self.type_ahead_timer.take()
            && let Err(err) = self.timers.stop(id)
        {
            // Already fired; its event is ignored once the id no longer matches.
            tracing::trace!(target: targets::MULTI_SELECT, ?id, %err, "type-ahead timer not stopped");
        }
    }

    // =========================================================================
    // Geometry Helpers
    // =========================================================================

    fn width(&self) -> f32 {
        let width = self.base.geometry().width();
        if width > 0.0 { width } else { DEFAULT_WIDTH }
    }

    fn layout(&self) -> Layout {
        let width = self.width();
        let label_height = if self.label.is_empty() { 0.0 } else { LABEL_HEIGHT };
        let label = Rect::new(0.0, 0.0, width, label_height);

        let mut chips = Vec::new();
        let mut content_bottom = label_height + MIN_SELECTION_HEIGHT;
        if self.multiple {
            let left = PADDING;
            let right = width - ARROW_WIDTH;
            let max_chip_width = (right - left).max(0.0);
            let first_row = label_height + (MIN_SELECTION_HEIGHT - CHIP_HEIGHT) / 2.0;
            let (mut x, mut y) = (left, first_row);

            for value in self.selection.values() {
                let natural = PADDING
                    + self.metrics.text_width(&value, FONT_SIZE)
                    + CHIP_SPACING
                    + DELETE_SIZE
                    + CHIP_SPACING;
                let chip_width = natural.min(max_chip_width);
                if x > left && x + chip_width > right {
                    x = left;
                    y += CHIP_HEIGHT + CHIP_SPACING;
                }
                let rect = Rect::new(x, y, chip_width, CHIP_HEIGHT);
                let delete = Rect::new(
                    rect.right() - CHIP_SPACING - DELETE_SIZE,
                    y + (CHIP_HEIGHT - DELETE_SIZE) / 2.0,
                    DELETE_SIZE,
                    DELETE_SIZE,
                );
                chips.push(ChipLayout {
                    value,
                    rect,
                    delete,
                });
                x += chip_width + CHIP_SPACING;
            }

            if let Some(last) = chips.last() {
                content_bottom = content_bottom.max(last.rect.bottom() + first_row - label_height);
            }
        }

        let selection = Rect::new(0.0, label_height, width, content_bottom - label_height);
        let arrow = Rect::new(width - ARROW_WIDTH, label_height, ARROW_WIDTH, selection.height());
        let popup_height = if self.open {
            self.visible_count() as f32 * ITEM_HEIGHT
        } else {
            0.0
        };
        let popup = Rect::new(0.0, selection.bottom(), width, popup_height);

        Layout {
            label,
            selection,
            arrow,
            chips,
            popup,
        }
    }

    fn row_rect(&self, layout: &Layout, index: usize) -> Option<Rect> {
        if !self.open || index < self.scroll_offset || index >= self.options.len() {
            return None;
        }
        let row = index - self.scroll_offset;
        if row >= self.visible_count() {
            return None;
        }
        Some(Rect::new(
            layout.popup.left(),
            layout.popup.top() + row as f32 * ITEM_HEIGHT,
            layout.popup.width(),
            ITEM_HEIGHT,
        ))
    }

    /// The clickable selection area, in widget-local coordinates.
    pub fn selection_rect(&self) -> Rect {
        self.layout().selection
    }

    /// The open/closed indicator.
    pub fn arrow_rect(&self) -> Rect {
        self.layout().arrow
    }

    /// The chip for the selected value at `position` (multi-select only).
    pub fn chip_rect(&self, position: usize) -> Option<Rect> {
        self.layout().chips.get(position).map(|c| c.rect)
    }

    /// The delete control of the chip at `position` (multi-select only).
    pub fn chip_delete_rect(&self, position: usize) -> Option<Rect> {
        self.layout().chips.get(position).map(|c| c.delete)
    }

    /// The row of the option at `index`, if the list is open and the row is
    /// scrolled into view.
    pub fn option_rect(&self, index: usize) -> Option<Rect> {
        let layout = self.layout();
        self.row_rect(&layout, index)
    }

    fn hit_test(&self, pos: Point) -> MultiSelectPart {
        let layout = self.layout();

        if self.open && layout.popup.contains(pos) {
            let row = ((pos.y - layout.popup.top()) / ITEM_HEIGHT) as usize;
            let index = self.scroll_offset + row;
            if row < self.visible_count() && index < self.options.len() {
                return MultiSelectPart::Option(index);
            }
            return MultiSelectPart::None;
        }

        for (position, chip) in layout.chips.iter().enumerate() {
            if chip.delete.contains(pos) {
                return MultiSelectPart::ChipDelete(position);
            }
            if chip.rect.contains(pos) {
                return MultiSelectPart::Chip(position);
            }
        }

        if layout.arrow.contains(pos) {
            MultiSelectPart::Arrow
        } else if layout.selection.contains(pos) {
            MultiSelectPart::Selection
        } else if layout.label.contains(pos) {
            MultiSelectPart::Label
        } else {
            MultiSelectPart::None
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &mut MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        match self.hit_test(event.local_pos) {
            MultiSelectPart::Selection | MultiSelectPart::Arrow => {
                self.toggle_popup();
                true
            }
            MultiSelectPart::ChipDelete(position) => {
                let value = self.layout().chips.get(position).map(|c| c.value.clone());
                if let Some(value) = value {
                    self.delete_value(&value);
                }
                event.base.accept();
                true
            }
            MultiSelectPart::Chip(_) => {
                event.base.accept();
                true
            }
            MultiSelectPart::Option(index) => {
                self.pick(index);
                true
            }
            MultiSelectPart::Label | MultiSelectPart::None => false,
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        let part = self.hit_test(event.local_pos);
        if part == self.hover_part {
            return false;
        }
        self.hover_part = part;
        if let MultiSelectPart::Option(index) = part {
            self.set_focused_index(Some(index));
        }
        self.base.set_hovered(part != MultiSelectPart::None);
        self.base.update();
        true
    }

    fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        if !self.base.has_focus() {
            return false;
        }

        let key = event.key;
        match key {
            Key::Space => {
                event.base.accept();
                if !self.open {
                    self.show_popup();
                } else if self.multiple
                    && let Some(index) = self.focused_index
                {
                    self.pick(index);
                }
                true
            }
            Key::Escape | Key::Tab => {
                if self.open {
                    event.base.accept();
                    self.hide_popup();
                    true
                } else {
                    false
                }
            }
            Key::Enter => {
                self.toggle_popup();
                true
            }
            Key::ArrowDown => {
                event.base.accept();
                let next = match (self.focused_index, self.options.len()) {
                    (_, 0) => None,
                    (None, _) => Some(0),
                    (Some(i), len) => Some((i + 1).min(len - 1)),
                };
                self.set_focused_index(next);
                true
            }
            Key::ArrowUp => {
                event.base.accept();
                if !self.options.is_empty() {
                    let next = self.focused_index.map_or(0, |i| i.saturating_sub(1));
                    self.set_focused_index(Some(next));
                }
                true
            }
            _ => match key.alphanumeric_char() {
                Some(c) => {
                    self.type_ahead_char(c);
                    true
                }
                None => false,
            },
        }
    }

    fn handle_wheel(&mut self, event: &mut WheelEvent) -> bool {
        if !self.open || event.delta_y == 0.0 {
            return false;
        }
        let max_scroll = self.max_scroll();
        let offset = if event.delta_y > 0.0 {
            self.scroll_offset.saturating_sub(1)
        } else {
            (self.scroll_offset + 1).min(max_scroll)
        };
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.base.update();
        }
        event.base.accept();
        true
    }

    fn handle_focus_out(&mut self) -> bool {
        self.base.set_focused(false);
        self.hide_popup();
        if !self.multiple {
            let index = self
                .selection
                .values()
                .first()
                .and_then(|value| self.options.index_of(value));
            self.set_focused_index(index);
        }
        true
    }

    fn handle_timer(&mut self, event: &TimerEvent) -> bool {
        if self.type_ahead_timer != Some(event.id) {
            return false;
        }
        self.type_ahead_timer = None;
        tracing::trace!(target: targets::MULTI_SELECT, typed = %self.type_ahead, "type-ahead cleared");
        self.type_ahead.clear();
        true
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_values(&self, layout: &Layout, values: &[String]) -> Vec<ViewNode> {
        let text_rect = Rect::new(
            PADDING,
            layout.selection.top(),
            (layout.selection.width() - ARROW_WIDTH - PADDING).max(0.0),
            layout.selection.height(),
        );

        if values.is_empty() {
            return vec![
                ViewNode::new(Role::Placeholder, text_rect)
                    .with_class("placeholder")
                    .with_text(self.placeholder.as_str()),
            ];
        }

        if self.multiple {
            return layout
                .chips
                .iter()
                .map(|chip| {
                    ViewNode::new(Role::Chip, chip.rect)
                        .with_class("multiple")
                        .with_class("value")
                        .with_text(chip.value.as_str())
                        .with_data_value(chip.value.as_str())
                        .with_child(
                            ViewNode::new(Role::ChipDelete, chip.delete)
                                .with_class("delete")
                                .with_data_value(chip.value.as_str())
                                .with_icon(IconName::Close),
                        )
                })
                .collect();
        }

        vec![
            ViewNode::new(Role::Value, text_rect)
                .with_class("value")
                .with_text(values[0].as_str())
                .with_data_value(values[0].as_str()),
        ]
    }

    fn render_options(&self, layout: &Layout, values: &[String]) -> ViewNode {
        let rows = (self.scroll_offset..self.options.len()).filter_map(|index| {
            let rect = self.row_rect(layout, index)?;
            let value = self.options.value(index)?;
            let selected = values.iter().any(|v| v == value);

            let mut row = ViewNode::new(Role::OptionItem, rect)
                .with_class("option")
                .with_class_if(selected, "selected")
                .with_class_if(self.focused_index == Some(index), "focused")
                .with_text(value)
                .with_data_value(value);

            if self.multiple {
                let mut checkbox = ViewNode::new(
                    Role::Checkbox,
                    Rect::new(
                        PADDING,
                        rect.top() + (ITEM_HEIGHT - CHECKBOX_SIZE) / 2.0,
                        CHECKBOX_SIZE,
                        CHECKBOX_SIZE,
                    ),
                )
                .with_class("checkbox");
                if selected {
                    checkbox = checkbox.with_icon(IconName::Check);
                }
                row = row.with_child(checkbox);
            }
            Some(row)
        });

        ViewNode::new(Role::OptionList, layout.popup)
            .with_class("options")
            .with_children(rows)
    }
}

impl Widget for SearchableMultiSelect {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        let layout = self.layout();
        Size::new(self.width(), layout.selection.bottom())
    }

    fn render(&self) -> ViewNode {
        let layout = self.layout();
        let values = self.selection.values();

        let arrow_icon = if self.open {
            IconName::ChevronUp
        } else {
            IconName::ChevronDown
        };

        let selection = ViewNode::new(Role::Selection, layout.selection)
            .with_class("selection")
            .with_children(self.render_values(&layout, &values))
            .with_child(
                ViewNode::new(Role::Arrow, layout.arrow)
                    .with_class("arrow")
                    .with_icon(arrow_icon),
            );

        let bounds = Rect::new(
            0.0,
            0.0,
            layout.selection.width(),
            layout.popup.bottom().max(layout.selection.bottom()),
        );
        let mut root = ViewNode::new(Role::Root, bounds)
            .with_class("select")
            .with_child(
                ViewNode::new(Role::Label, layout.label)
                    .with_class("label")
                    .with_text(self.label.as_str()),
            )
            .with_child(selection);

        if self.open {
            root = root.with_child(self.render_options(&layout, &values));
        }
        root
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::Wheel(e) => self.handle_wheel(e),
            WidgetEvent::FocusIn(_) => {
                self.base.set_focused(true);
                true
            }
            WidgetEvent::FocusOut(_) => self.handle_focus_out(),
            WidgetEvent::Timer(e) => self.handle_timer(e),
            WidgetEvent::Leave(_) => {
                self.hover_part = MultiSelectPart::None;
                self.base.set_hovered(false);
                false
            }
        }
    }
}

impl Drop for SearchableMultiSelect {
    fn drop(&mut self) {
        self.stop_type_ahead_timer();
    }
}

static_assertions::assert_impl_all!(SearchableMultiSelect: Send, Sync);

// ============================================================================
// Tests
// ============================================================================
