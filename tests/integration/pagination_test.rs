//! Integration tests for the pagination windower.

use stack_core::config::pagination::PaginationConfig;
use stack_core::error::ErrorKind;
use stack_core::types::pagination::{
    ELLIPSIS, PageRequest, PageSlot, PageState, WINDOW_SIZE, page_numbers, page_range,
    page_range_for_count, try_page_range,
};

use PageSlot::{Ellipsis, Page};

#[test]
fn test_short_lists_are_returned_unchanged() {
    for count in 1..=WINDOW_SIZE as u64 {
        let pages = page_numbers(count);
        for current in 1..=count {
            let expected: Vec<PageSlot> = pages.iter().copied().map(Page).collect();
            assert_eq!(page_range(current, &pages), expected);
        }
    }
    assert_eq!(
        page_range(3, &[1, 2, 3, 4, 5]),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
    );
}

#[test]
fn test_window_near_start() {
    let pages = page_numbers(20);
    let expected = vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)];
    for current in 1..=4 {
        assert_eq!(page_range(current, &pages), expected);
    }
}

#[test]
fn test_window_in_middle() {
    assert_eq!(
        page_range(10, &page_numbers(20)),
        vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
    );
    assert_eq!(
        page_range(5, &page_numbers(20)),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(20)]
    );
}

#[test]
fn test_window_near_end() {
    let pages = page_numbers(20);
    let expected = vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)];
    for current in 17..=20 {
        assert_eq!(page_range(current, &pages), expected);
    }
}

#[test]
fn test_window_shape_holds_for_every_page() {
    for count in (WINDOW_SIZE as u64 + 1)..=40 {
        let pages = page_numbers(count);
        for current in 1..=count {
            let window = page_range(current, &pages);
            assert_eq!(window.len(), WINDOW_SIZE, "count={count} current={current}");
            assert_eq!(window.first(), Some(&Page(1)));
            assert_eq!(window.last(), Some(&Page(count)));
            assert!(window.contains(&Page(current)), "count={count} current={current}");

            let numbers: Vec<u64> = window.iter().filter_map(PageSlot::page).collect();
            assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(window.windows(2).all(|pair| !(pair[0].is_ellipsis() && pair[1].is_ellipsis())));

            assert_eq!(page_range(current, &pages), window);
            assert_eq!(page_range_for_count(current, count), window);
        }
    }
}

#[test]
fn test_eight_pages_boundaries() {
    let pages = page_numbers(8);
    assert_eq!(
        page_range(4, &pages),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(8)]
    );
    assert_eq!(
        page_range(5, &pages),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8)]
    );
}

#[test]
fn test_out_of_range_is_clamped_or_rejected() {
    let pages = page_numbers(20);
    assert_eq!(page_range(0, &pages), page_range(1, &pages));
    assert_eq!(page_range(99, &pages), page_range(20, &pages));
    assert!(page_range(1, &[]).is_empty());

    let err = try_page_range(21, &pages).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(try_page_range(0, &pages).is_err());
    assert!(try_page_range(1, &[]).is_err());
    assert_eq!(try_page_range(10, &pages).expect("in range"), page_range(10, &pages));
}

#[test]
fn test_window_serializes_with_ellipsis_marker() {
    let window = page_range(10, &page_numbers(20));
    let json = serde_json::to_value(&window).expect("serialize");
    assert_eq!(json, serde_json::json!([1, ELLIPSIS, 9, 10, 11, ELLIPSIS, 20]));

    let parsed: Vec<PageSlot> = serde_json::from_value(json).expect("deserialize");
    assert_eq!(parsed, window);
}

#[test]
fn test_page_state_from_configured_request() {
    let config = PaginationConfig { page_size: 10 };
    let request = PageRequest::from_config(3, &config);
    assert_eq!(request.offset(), 20);

    let state = PageState::from_request(&request, 95);
    assert_eq!(state.total_pages, 10);
    assert_eq!(state.current_page, 3);
    assert_eq!(state.previous_page(), Some(2));
    assert_eq!(state.next_page(), Some(4));
    assert_eq!(
        state.window,
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
    );
}

#[test]
fn test_page_state_for_empty_collection() {
    let state = PageState::new(4, 0, 25);
    assert_eq!(state.total_pages, 1);
    assert_eq!(state.current_page, 1);
    assert!(!state.has_previous);
    assert!(!state.has_next);
    assert_eq!(state.window, vec![Page(1)]);
}
