//! Integration tests for SearchableMultiSelect driven through widget events.

use std::sync::Arc;
use std::time::Duration;

use storefront::model::{SelectionSource, SharedSelection};
use storefront::widget::widgets::SearchableMultiSelect;
use storefront::widget::{
    FocusInEvent, FocusOutEvent, FocusReason, Key, Role, Widget, WidgetEvent,
    deliver_expired_timers,
};
use storefront_core::{ManualClock, SharedTimerManager};

struct Fixture {
    select: SearchableMultiSelect,
    selection: SharedSelection,
    clock: Arc<ManualClock>,
    timers: Arc<SharedTimerManager>,
}

fn fixture(options: &[&str], multiple: bool) -> Fixture {
    let clock = Arc::new(ManualClock::new());
    let timers = Arc::new(SharedTimerManager::with_clock(clock.clone()));
    let selection = SharedSelection::new();
    let select = SearchableMultiSelect::new(
        options.to_vec(),
        Arc::new(selection.clone()),
        timers.clone(),
    )
    .with_label("Fruit")
    .with_placeholder("Choose fruit")
    .with_multiple(multiple);

    Fixture {
        select,
        selection,
        clock,
        timers,
    }
}

fn fruits(multiple: bool) -> Fixture {
    fixture(&["Apple", "Banana", "Cherry"], multiple)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn focus_in(select: &mut SearchableMultiSelect) {
    select.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
}

fn focus_out(select: &mut SearchableMultiSelect) {
    select.event(&mut WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse)));
}

fn press(select: &mut SearchableMultiSelect, key: Key) -> WidgetEvent {
    let mut event = WidgetEvent::key(key);
    select.event(&mut event);
    event
}

fn type_text(select: &mut SearchableMultiSelect, text: &str) {
    for c in text.chars() {
        press(select, Key::Character(c));
    }
}

fn click_option(select: &mut SearchableMultiSelect, index: usize) -> WidgetEvent {
    let rect = select.option_rect(index).expect("option row is visible");
    let mut event = WidgetEvent::click(rect.center());
    select.event(&mut event);
    event
}

fn pump_timers(f: &mut Fixture) -> usize {
    deliver_expired_timers(&f.timers, &mut [&mut f.select as &mut dyn Widget])
}

// ============================================================================
// Keyboard focus movement
// ============================================================================

#[test]
fn arrow_down_never_passes_last_option() {
    let mut f = fruits(false);
    focus_in(&mut f.select);

    let mut seen = Vec::new();
    for _ in 0..6 {
        let event = press(&mut f.select, Key::ArrowDown);
        assert!(event.is_accepted());
        seen.push(f.select.focused_index());
    }
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(2), Some(2), Some(2)]);
}

#[test]
fn arrow_up_never_goes_below_first_option() {
    let mut f = fruits(false);
    focus_in(&mut f.select);
    press(&mut f.select, Key::ArrowDown);
    press(&mut f.select, Key::ArrowDown);

    for _ in 0..4 {
        press(&mut f.select, Key::ArrowUp);
    }
    assert_eq!(f.select.focused_index(), Some(0));
}

#[test]
fn hovering_an_option_moves_focus() {
    let mut f = fruits(true);
    f.select.show_popup();
    let rect = f.select.option_rect(2).expect("visible");
    f.select.event(&mut WidgetEvent::hover(rect.center()));
    assert_eq!(f.select.focused_index(), Some(2));
}

// ============================================================================
// Picking options
// ============================================================================

#[test]
fn multi_select_click_toggles_exactly_once() {
    let mut f = fruits(true);
    f.select.show_popup();

    click_option(&mut f.select, 1);
    assert_eq!(f.selection.values(), strings(&["Banana"]));
    assert!(f.select.is_open());

    click_option(&mut f.select, 2);
    assert_eq!(f.selection.values(), strings(&["Banana", "Cherry"]));

    click_option(&mut f.select, 1);
    assert_eq!(f.selection.values(), strings(&["Cherry"]));
    assert!(f.select.is_open());
}

#[test]
fn single_select_click_replaces_and_closes() {
    let mut f = fruits(false);
    f.selection.replace(strings(&["Apple"]));
    f.select.show_popup();

    click_option(&mut f.select, 2);
    assert_eq!(f.selection.values(), strings(&["Cherry"]));
    assert!(!f.select.is_open());
    assert!(f.select.option_rect(0).is_none());
}

#[test]
fn picks_build_on_external_changes() {
    let mut f = fruits(true);
    f.select.show_popup();
    click_option(&mut f.select, 0);

    // Another part of the page changes the selection behind the widget.
    f.selection.replace(strings(&["Cherry"]));

    click_option(&mut f.select, 1);
    assert_eq!(f.selection.values(), strings(&["Cherry", "Banana"]));
}

#[test]
fn clicking_selection_area_toggles_open() {
    let mut f = fruits(false);
    let area = f.select.selection_rect();
    let arrow = f.select.arrow_rect();

    f.select.event(&mut WidgetEvent::click(area.center()));
    assert!(f.select.is_open());
    f.select.event(&mut WidgetEvent::click(arrow.center()));
    assert!(!f.select.is_open());
}

// ============================================================================
// Chips
// ============================================================================

#[test]
fn chip_delete_removes_value_without_toggling_open() {
    let mut f = fruits(true);
    f.selection.replace(strings(&["Apple", "Banana"]));

    let delete = f.select.chip_delete_rect(0).expect("chip for Apple");
    let mut event = WidgetEvent::click(delete.center());
    f.select.event(&mut event);

    assert_eq!(f.selection.values(), strings(&["Banana"]));
    assert!(!f.select.is_open());
    assert!(event.is_accepted());
    assert!(!event.should_propagate());

    f.select.show_popup();
    let delete = f.select.chip_delete_rect(0).expect("chip for Banana");
    f.select.event(&mut WidgetEvent::click(delete.center()));
    assert!(f.selection.is_empty());
    assert!(f.select.is_open());
}

#[test]
fn chip_body_click_is_swallowed() {
    let mut f = fruits(true);
    f.selection.replace(strings(&["Cherry"]));
    let chip = f.select.chip_rect(0).expect("chip");

    let mut event = WidgetEvent::click(chip.origin);
    f.select.event(&mut event);
    assert!(event.is_accepted());
    assert!(!f.select.is_open());
    assert_eq!(f.selection.values(), strings(&["Cherry"]));
}

#[test]
fn chips_render_with_delete_controls() {
    let f = fruits(true);
    f.selection.replace(strings(&["Apple", "Cherry"]));

    let view = f.select.render();
    let chips = view.find_all(Role::Chip);
    assert_eq!(chips.len(), 2);
    assert_eq!(chips[0].class_name(), "multiple value");
    assert_eq!(chips[1].data_value.as_deref(), Some("Cherry"));
    let deletes = view.find_all(Role::ChipDelete);
    assert_eq!(deletes[0].data_value.as_deref(), Some("Apple"));
    assert!(view.find(Role::Placeholder).is_none());
}

#[test]
fn single_select_renders_first_value() {
    let f = fruits(false);
    f.selection.replace(strings(&["Banana"]));
    let view = f.select.render();
    let value = view.find(Role::Value).expect("value node");
    assert_eq!(value.text.as_deref(), Some("Banana"));
    assert!(view.find(Role::Chip).is_none());
}

// ============================================================================
// Keyboard open/close
// ============================================================================

#[test]
fn space_opens_and_is_always_accepted() {
    let mut f = fruits(true);
    focus_in(&mut f.select);
    assert!(press(&mut f.select, Key::Space).is_accepted());
    assert!(f.select.is_open());
    assert!(press(&mut f.select, Key::Space).is_accepted());
    assert!(f.select.is_open());
}

#[test]
fn tab_closes_only_when_open() {
    let mut f = fruits(false);
    focus_in(&mut f.select);
    assert!(!press(&mut f.select, Key::Tab).is_accepted());

    press(&mut f.select, Key::Enter);
    assert!(f.select.is_open());
    assert!(press(&mut f.select, Key::Tab).is_accepted());
    assert!(!f.select.is_open());
}

// ============================================================================
// Focus loss
// ============================================================================

#[test]
fn blur_in_single_select_focuses_selected_value() {
    let mut f = fruits(false);
    f.selection.replace(strings(&["Banana"]));
    focus_in(&mut f.select);
    press(&mut f.select, Key::Enter);
    press(&mut f.select, Key::ArrowDown);
    press(&mut f.select, Key::ArrowDown);
    press(&mut f.select, Key::ArrowDown);

    focus_out(&mut f.select);
    assert!(!f.select.is_open());
    assert_eq!(f.select.focused_index(), Some(1));
}

#[test]
fn blur_while_closed_focuses_selected_value() {
    let mut f = fruits(false);
    f.selection.replace(strings(&["Banana"]));
    focus_in(&mut f.select);
    assert!(!f.select.is_open());

    focus_out(&mut f.select);
    assert!(!f.select.is_open());
    assert_eq!(f.select.focused_index(), Some(1));
}

#[test]
fn blur_without_selection_clears_focus() {
    let mut f = fruits(false);
    focus_in(&mut f.select);
    press(&mut f.select, Key::ArrowDown);
    focus_out(&mut f.select);
    assert_eq!(f.select.focused_index(), None);

    f.selection.replace(strings(&["Durian"]));
    focus_in(&mut f.select);
    press(&mut f.select, Key::ArrowDown);
    focus_out(&mut f.select);
    assert_eq!(f.select.focused_index(), None);
}

// ============================================================================
// Type-ahead
// ============================================================================

#[test]
fn type_ahead_matches_whole_buffer() {
    let mut f = fixture(&["Apricot", "Apple", "Banana"], false);
    focus_in(&mut f.select);

    type_text(&mut f.select, "ap");
    assert_eq!(f.select.focused_index(), Some(0));
    assert_eq!(f.selection.values(), strings(&["Apricot"]));

    type_text(&mut f.select, "p");
    assert_eq!(f.select.type_ahead_buffer(), "app");
    assert_eq!(f.select.focused_index(), Some(1));
    assert_eq!(f.selection.values(), strings(&["Apple"]));
}

#[test]
fn type_ahead_resets_after_idle_timeout() {
    let mut f = fruits(false);
    focus_in(&mut f.select);

    type_text(&mut f.select, "b");
    assert_eq!(f.selection.values(), strings(&["Banana"]));

    f.clock.advance(Duration::from_millis(1001));
    assert_eq!(pump_timers(&mut f), 1);
    assert_eq!(f.select.type_ahead_buffer(), "");

    type_text(&mut f.select, "a");
    assert_eq!(f.selection.values(), strings(&["Apple"]));
    assert_eq!(f.select.focused_index(), Some(0));
}

#[test]
fn type_ahead_picks_first_prefix_match_in_list_order() {
    let mut f = fixture(&["Apple", "Apricot", "Banana"], false);
    focus_in(&mut f.select);

    type_text(&mut f.select, "ap");
    assert_eq!(f.select.type_ahead_buffer(), "ap");
    assert_eq!(f.select.focused_index(), Some(0));
    assert_eq!(f.selection.values(), strings(&["Apple"]));
}

#[test]
fn type_ahead_keeps_buffer_while_typing() {
    let mut f = fruits(false);
    focus_in(&mut f.select);

    type_text(&mut f.select, "b");
    f.clock.advance(Duration::from_millis(600));
    assert_eq!(pump_timers(&mut f), 0);
    type_text(&mut f.select, "a");

    // The second key restarted the idle timer.
    f.clock.advance(Duration::from_millis(600));
    assert_eq!(pump_timers(&mut f), 0);
    assert_eq!(f.select.type_ahead_buffer(), "ba");
    assert_eq!(f.selection.values(), strings(&["Banana"]));
}

#[test]
fn type_ahead_without_match_changes_nothing() {
    let mut f = fruits(false);
    f.selection.replace(strings(&["Cherry"]));
    focus_in(&mut f.select);
    press(&mut f.select, Key::ArrowDown);

    type_text(&mut f.select, "z");
    assert_eq!(f.select.focused_index(), Some(0));
    assert_eq!(f.selection.values(), strings(&["Cherry"]));
}

#[test]
fn type_ahead_in_multi_select_only_moves_focus() {
    let mut f = fruits(true);
    focus_in(&mut f.select);
    type_text(&mut f.select, "C");
    assert_eq!(f.select.focused_index(), Some(2));
    assert!(f.selection.is_empty());
}

#[test]
fn non_alphanumeric_keys_are_ignored_by_type_ahead() {
    let mut f = fruits(false);
    focus_in(&mut f.select);
    type_text(&mut f.select, "-é");
    assert_eq!(f.select.type_ahead_buffer(), "");
    assert_eq!(f.timers.active_count(), 0);
}

#[test]
fn dropping_the_widget_stops_its_timer() {
    let mut f = fruits(false);
    focus_in(&mut f.select);
    type_text(&mut f.select, "c");
    assert_eq!(f.timers.active_count(), 1);

    let Fixture { select, timers, .. } = f;
    drop(select);
    assert_eq!(timers.active_count(), 0);
}
