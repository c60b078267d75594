#![allow(clippy::unwrap_used)]

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_plain() {
    assert_eq!(format_amount(5000.0), "5,000.00");
}

#[test]
fn test_format_no_separator_needed() {
    assert_eq!(format_amount(200.0), "200.00");
}

#[test]
fn test_format_millions() {
    assert_eq!(format_amount(1_234_567.89), "1,234,567.89");
}

#[test]
fn test_format_negative() {
    assert_eq!(format_amount(-30.5), "-30.50");
}

#[test]
fn test_format_zero() {
    assert_eq!(format_amount(0.0), "0.00");
}

#[test]
fn test_format_rounds_to_cents() {
    assert_eq!(format_amount(0.005), "0.01");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("ünïcödé strïng", 7), "ünïcöd…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_cursor() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 10, 5);
    assert_eq!(index, 1);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_down_at_end_stays() {
    let (mut index, mut scroll) = (9, 5);
    scroll_down(&mut index, &mut scroll, 10, 5);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_down_advances_page() {
    let (mut index, mut scroll) = (4, 0);
    scroll_down(&mut index, &mut scroll, 10, 5);
    assert_eq!(index, 5);
    assert_eq!(scroll, 1);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (7, 4);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 5);
    assert_eq!((index, scroll), (9, 5));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (3, 1);
    scroll_to_bottom(&mut index, &mut scroll, 0, 5);
    // Nothing to land on; cursor untouched.
    assert_eq!((index, scroll), (3, 1));
}
