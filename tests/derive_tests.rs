#![cfg(feature = "derive")]
//! Tests for `#[derive(Value)]`.
//!
//! - Without attributes the derived type is always `Some`
//! - `#[value(nil = "...")]` decides nil-ness under both policies
//! - `#[value(falsy = "...")]` only matters under the falsy policy

use rstest::rstest;
use tryad::value::{Absence, Falsy, Nil};
use tryad::{Kind, Value, of, tryad};

// =============================================================================
// Test Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Value)]
struct Plain(i32);

#[derive(Debug, Clone, PartialEq, Value)]
#[value(nil = "Reading::is_missing", falsy = "Reading::is_zero")]
struct Reading(Option<f64>);

impl Reading {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    fn is_zero(&self) -> bool {
        self.0 == Some(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Value)]
#[value(nil = "Slot::is_empty")]
enum Slot<T> {
    Empty,
    Full(T),
}

impl<T> Slot<T> {
    const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Value)]
#[value(falsy = "Flag::is_off")]
struct Flag {
    on: bool,
}

impl Flag {
    const fn is_off(&self) -> bool {
        !self.on
    }
}

// =============================================================================
// Derived predicates
// =============================================================================

#[rstest]
fn plain_type_is_never_absent() {
    assert!(!Plain(0).is_nil());
    assert!(!Plain(0).is_falsy());
    assert_eq!(of(Plain(0)).kind().now(), Some(Kind::Some));
}

#[rstest]
#[case(Reading(None), true, true)]
#[case(Reading(Some(0.0)), false, true)]
#[case(Reading(Some(1.5)), false, false)]
fn reading_predicates(#[case] reading: Reading, #[case] nil: bool, #[case] falsy: bool) {
    assert_eq!(Nil::is_absent(&reading), nil);
    assert_eq!(Falsy::is_absent(&reading), falsy);
}

#[rstest]
fn nil_is_always_falsy() {
    let flag = Flag { on: true };
    assert!(!flag.is_nil());
    assert!(!flag.is_falsy());

    let empty: Slot<u8> = Slot::Empty;
    assert!(empty.is_nil());
    assert!(empty.is_falsy());
}

// =============================================================================
// Derived types in chains
// =============================================================================

#[rstest]
fn nil_policy_uses_nil_predicate() {
    assert_eq!(tryad(Reading(None)).kind().now(), Some(Kind::None));
    assert_eq!(tryad(Reading(Some(0.0))).kind().now(), Some(Kind::Some));
    assert_eq!(tryad(Slot::Full("x")).kind().now(), Some(Kind::Some));
}

#[rstest]
fn falsy_policy_uses_falsy_predicate() {
    assert_eq!(of(Reading(Some(0.0))).kind().now(), Some(Kind::None));
    assert_eq!(of(Flag { on: false }).kind().now(), Some(Kind::None));
    assert_eq!(of(Flag { on: true }).kind().now(), Some(Kind::Some));
}

#[rstest]
fn map_reclassifies_derived_results() {
    let emptied = tryad(Slot::Full(3)).map(|slot| match slot {
        Slot::Full(value) if value > 5 => Slot::Full(value),
        _ => Slot::Empty,
    });
    assert_eq!(emptied.kind().now(), Some(Kind::None));
}
