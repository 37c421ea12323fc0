use std::sync::{Arc, Mutex};

use datagrid::prelude::*;

fn columns() -> Vec<Column> {
    vec![Column::new("name", "Name")]
}

fn rows() -> Vec<Row> {
    vec![
        Row::new("1").cell("name", "Alice"),
        Row::new("2").cell("name", "Bob"),
        Row::new("3").cell("name", "Carol"),
        Row::new("4").cell("name", "Dave"),
    ]
}

type Emitted = Arc<Mutex<Vec<Vec<String>>>>;

fn recording_grid(mode: SelectionMode) -> (Grid, Emitted) {
    let emitted: Emitted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&emitted);
    let mut grid = Grid::new(columns())
        .with_selection_mode(mode)
        .on_selection_change(move |ids| sink.lock().unwrap().push(ids.to_vec()));
    grid.set_rows(rows());
    (grid, emitted)
}

#[test]
fn test_single_mode_selecting_twice_is_idempotent() {
    let (mut grid, emitted) = recording_grid(SelectionMode::Single);
    grid.row_click("3", Modifiers::NONE);
    grid.row_click("3", Modifiers::NONE);
    assert_eq!(grid.selected_ids(), vec!["3"]);
    // Both interactions emitted the same full set.
    assert_eq!(*emitted.lock().unwrap(), vec![vec!["3"], vec!["3"]]);
}

#[test]
fn test_single_mode_replaces_previous_selection() {
    let (mut grid, _) = recording_grid(SelectionMode::Single);
    grid.row_click("1", Modifiers::NONE);
    grid.row_click("2", Modifiers::NONE);
    assert_eq!(grid.selected_ids(), vec!["2"]);
}

#[test]
fn test_multi_mode_plain_click_toggles() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.row_click("2", Modifiers::NONE);
    assert_eq!(grid.selected_ids(), vec!["2"]);
    grid.row_click("2", Modifiers::NONE);
    assert!(grid.selected_ids().is_empty());
}

#[test]
fn test_shift_click_selects_range_in_view_order() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.row_click("1", Modifiers::NONE);
    grid.row_click("3", Modifiers::SHIFT);
    assert_eq!(grid.selected_ids(), vec!["1", "2", "3"]);
}

#[test]
fn test_shift_click_range_is_a_union() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.row_click("4", Modifiers::NONE);
    grid.row_click("2", Modifiers::NONE);
    grid.row_click("3", Modifiers::SHIFT);
    // 4 stays selected; 2..=3 joins it.
    assert_eq!(grid.selected_ids(), vec!["4", "2", "3"]);
}

#[test]
fn test_shift_click_backwards_range() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.row_click("3", Modifiers::NONE);
    grid.row_click("1", Modifiers::SHIFT);
    assert_eq!(grid.selected_ids(), vec!["3", "1", "2"]);
}

#[test]
fn test_shift_click_without_visible_anchor_toggles_target() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.row_click("1", Modifiers::NONE);
    // Narrow the view so the anchor row disappears from it.
    grid.set_search("carol");
    grid.row_click("3", Modifiers::SHIFT);
    assert_eq!(grid.selected_ids(), vec!["1", "3"]);
}

#[test]
fn test_range_follows_sorted_view_positions() {
    let mut grid = Grid::new(vec![
        Column::new("name", "Name"),
        Column::new("rank", "Rank").data_type(DataType::Int),
    ])
    .with_selection_mode(SelectionMode::Multi);
    grid.set_rows(vec![
        Row::new("1").cell("rank", 3),
        Row::new("2").cell("rank", 1),
        Row::new("3").cell("rank", 2),
    ]);
    grid.header_click("rank");
    // View order is 2, 3, 1; anchor 2, shift-click 3 covers just those two.
    grid.row_click("2", Modifiers::NONE);
    grid.row_click("3", Modifiers::SHIFT);
    assert_eq!(grid.selected_ids(), vec!["2", "3"]);
}

#[test]
fn test_select_all_covers_the_current_view_only() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.set_search("a");
    // Alice, Carol and Dave match "a".
    grid.set_select_all(true);
    assert_eq!(grid.selected_ids(), vec!["1", "3", "4"]);
}

#[test]
fn test_select_all_off_clears_everything() {
    let (mut grid, emitted) = recording_grid(SelectionMode::Multi);
    grid.set_select_all(true);
    grid.set_select_all(false);
    assert!(grid.selected_ids().is_empty());
    assert_eq!(emitted.lock().unwrap().last().unwrap().len(), 0);
}

#[test]
fn test_explicit_boolean_call_sets_membership() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.set_row_selected("2", true);
    grid.set_row_selected("2", true);
    assert_eq!(grid.selected_ids(), vec!["2"]);
    grid.set_row_selected("2", false);
    assert!(grid.selected_ids().is_empty());
}

#[test]
fn test_switching_multi_to_single_truncates_and_notifies() {
    let (mut grid, emitted) = recording_grid(SelectionMode::Multi);
    grid.row_click("2", Modifiers::NONE);
    grid.row_click("4", Modifiers::NONE);
    grid.set_selection_mode(SelectionMode::Single);
    assert_eq!(grid.selected_ids(), vec!["2"]);
    assert_eq!(emitted.lock().unwrap().last().unwrap(), &vec!["2"]);
}

#[test]
fn test_controlled_selection_is_source_of_truth() {
    let (mut grid, emitted) = recording_grid(SelectionMode::Multi);
    grid.set_controlled_selection(Some(vec!["1".to_string()]));
    grid.row_click("2", Modifiers::NONE);
    // The grid emitted the would-be set but did not adopt it.
    assert_eq!(emitted.lock().unwrap().last().unwrap(), &vec!["1", "2"]);
    assert_eq!(grid.selected_ids(), vec!["1"]);
    // The caller feeds the new value back in.
    grid.set_controlled_selection(Some(vec!["1".to_string(), "2".to_string()]));
    assert_eq!(grid.selected_ids(), vec!["1", "2"]);
}

#[test]
fn test_uncontrolled_grid_owns_selection_after_release() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.set_controlled_selection(Some(vec!["1".to_string()]));
    grid.set_controlled_selection(None);
    grid.row_click("3", Modifiers::NONE);
    assert_eq!(grid.selected_ids(), vec!["3"]);
}

#[test]
fn test_clicking_unknown_row_is_ignored() {
    let (mut grid, emitted) = recording_grid(SelectionMode::Multi);
    assert_eq!(grid.row_click("99", Modifiers::NONE), EventResult::Ignored);
    assert!(emitted.lock().unwrap().is_empty());
}

#[test]
fn test_selection_survives_re_rendering_the_same_dataset() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.row_click("2", Modifiers::NONE);
    grid.set_rows(rows());
    assert_eq!(grid.selected_ids(), vec!["2"]);
}

#[test]
fn test_cursor_navigation_and_space_toggle() {
    let (mut grid, _) = recording_grid(SelectionMode::Multi);
    grid.cursor_down();
    grid.cursor_down();
    assert_eq!(grid.cursor(), Some(1));
    grid.toggle_at_cursor();
    assert_eq!(grid.selected_ids(), vec!["2"]);
    grid.cursor_first();
    assert_eq!(grid.cursor(), Some(0));
    grid.cursor_last();
    assert_eq!(grid.cursor(), Some(3));
}

#[test]
fn test_activation_fires_activate_callback() {
    let activated: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&activated);
    let mut grid = Grid::new(columns()).on_activate(move |id| sink.lock().unwrap().push(id.to_string()));
    grid.set_rows(rows());
    grid.cursor_down();
    grid.activate_at_cursor();
    assert_eq!(*activated.lock().unwrap(), vec!["1"]);
}

#[test]
fn test_link_click_notifies_with_cell_value() {
    let seen: Arc<Mutex<Vec<(String, String, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut grid = Grid::new(vec![
        Column::new("name", "Name"),
        Column::new("url", "URL").data_type(DataType::Link),
    ])
    .on_link_activate(move |id, key, value| {
        sink.lock()
            .unwrap()
            .push((id.to_string(), key.to_string(), value.raw_string()));
    });
    grid.set_rows(vec![Row::new("1").cell("url", "https://example.com")]);

    assert_eq!(grid.link_click("1", "url"), EventResult::Consumed);
    // Non-link columns never activate.
    assert_eq!(grid.link_click("1", "name"), EventResult::Ignored);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(
            "1".to_string(),
            "url".to_string(),
            "https://example.com".to_string()
        )]
    );
}
