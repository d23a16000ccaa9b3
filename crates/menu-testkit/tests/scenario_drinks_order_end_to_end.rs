//! Scenario: Drinks, limit 5, items A and B, driven through the desk.
//!
//! Invariants:
//! - A=3 leaves 2; B's ceiling drops to 2
//! - B=2 leaves 0; A's ceiling is its own value, 3
//! - placing records "A x 3", "B x 2" and resets every control
//! - after the reset both ceilings and the category are back to 5

use menu_desk::NoticeKind;
use menu_history::PlaceOutcome;
use menu_schemas::OrderLine;
use menu_testkit::{desk_with, drinks_catalog, fixed_time};

#[test]
fn drinks_walkthrough_places_and_resets() -> anyhow::Result<()> {
    let mut desk = desk_with(drinks_catalog()?)?;

    let a = desk.set_quantity("A", 3)?;
    assert_eq!(a.remaining, 2);
    assert_eq!(desk.form().control("B").map(|c| c.max()), Some(2));

    let b = desk.set_quantity("B", 2)?;
    assert_eq!(b.remaining, 0);
    assert_eq!(desk.form().control("A").map(|c| c.max()), Some(3));
    assert!(desk.form().within_limits());

    let outcome = desk.place_order_at(fixed_time(12, 0, 0));
    assert_eq!(outcome, PlaceOutcome::Placed { index: 0 });

    let record = &desk.history().records()[0];
    assert_eq!(record.timestamp(), "01/15/2025 12:00:00");
    assert_eq!(
        record.lines(),
        &[OrderLine::new("A", 3), OrderLine::new("B", 2)]
    );

    assert_eq!(desk.form().quantity("A"), Some(0));
    assert_eq!(desk.form().quantity("B"), Some(0));
    assert_eq!(desk.form().remaining("Drinks"), Some(5));
    assert_eq!(desk.form().control("A").map(|c| c.max()), Some(5));
    assert_eq!(desk.form().control("B").map(|c| c.max()), Some(5));

    assert_eq!(desk.notifier().kinds(), vec![NoticeKind::OrderPlaced]);
    Ok(())
}

#[test]
fn over_request_never_breaks_the_limit() -> anyhow::Result<()> {
    let mut desk = desk_with(drinks_catalog()?)?;

    desk.set_quantity("A", 4)?;
    let b = desk.set_quantity("B", 5)?;
    assert!(b.was_clamped());
    assert_eq!(b.applied, 1);
    assert_eq!(desk.form().remaining("Drinks"), Some(0));

    // Lowering A frees room for B, but B keeps its value until changed.
    desk.set_quantity("A", 1)?;
    assert_eq!(desk.form().quantity("B"), Some(1));
    assert_eq!(desk.form().control("B").map(|c| c.max()), Some(4));
    Ok(())
}

#[test]
fn second_order_is_appended_after_the_first() -> anyhow::Result<()> {
    let mut desk = desk_with(drinks_catalog()?)?;

    desk.set_quantity("A", 1)?;
    desk.place_order_at(fixed_time(9, 0, 0));
    desk.set_quantity("B", 2)?;
    desk.place_order_at(fixed_time(9, 5, 0));

    assert_eq!(
        desk.history_view(),
        "Order History:\n\
         01/15/2025 09:00:00\nOrder:\nA x 1\n\n\
         01/15/2025 09:05:00\nOrder:\nB x 2\n\n"
    );
    assert_eq!(desk.notifier().count(NoticeKind::OrderPlaced), 2);
    Ok(())
}
