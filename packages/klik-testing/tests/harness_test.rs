use klik_core::{Component, NodeId, VDomArena, el};
use klik_testing::{Harness, HarnessError, QueryError};
use std::cell::Cell;
use std::rc::Rc;

/// Toggle used to exercise the harness itself: flips a label between "on"
/// and "off" and alerts the flip count.
struct Toggle {
    on: Rc<Cell<bool>>,
    flips: Rc<Cell<u32>>,
}

impl Toggle {
    fn new() -> Self {
        Self {
            on: Rc::new(Cell::new(false)),
            flips: Rc::new(Cell::new(0)),
        }
    }
}

impl Component for Toggle {
    fn view(&self, arena: &mut VDomArena) -> NodeId {
        let on = self.on.clone();
        let flips = self.flips.clone();
        el("div")
            .child(
                el("span")
                    .test_id("label")
                    .text(if self.on.get() { "on" } else { "off" }),
            )
            .child(
                el("button")
                    .test_id("flip")
                    .on_click(move |ctx| {
                        on.set(!on.get());
                        flips.set(flips.get() + 1);
                        ctx.host.alert("flipped");
                    })
                    .text("flip"),
            )
            .build(arena)
    }
}

struct Duplicated;

impl Component for Duplicated {
    fn view(&self, arena: &mut VDomArena) -> NodeId {
        el("div")
            .child(el("span").test_id("twin").text("a"))
            .child(el("span").test_id("twin").text("b"))
            .build(arena)
    }
}

struct Nested;

impl Component for Nested {
    fn view(&self, arena: &mut VDomArena) -> NodeId {
        el("div")
            .test_id("outer")
            .text("Count: ")
            .child(el("b").text("3"))
            .text("!")
            .build(arena)
    }
}

#[test]
fn test_query_hit() {
    let harness = Harness::mount(Toggle::new());
    assert!(harness.get_by_test_id("label").is_ok());
    assert_eq!(harness.text_content("label").unwrap(), "off");
}

#[test]
fn test_query_miss() {
    let harness = Harness::mount(Toggle::new());
    let err = harness.text_content("missing").unwrap_err();
    assert!(matches!(err, QueryError::NotFound { .. }));
}

#[test]
fn test_query_ambiguous() {
    let harness = Harness::mount(Duplicated);
    let err = harness.get_by_test_id("twin").unwrap_err();
    assert!(matches!(err, QueryError::Ambiguous { count: 2, .. }));
}

#[test]
fn test_text_content_aggregates_descendants() {
    let harness = Harness::mount(Nested);
    assert_eq!(harness.text_content("outer").unwrap(), "Count: 3!");
}

#[test]
fn test_click_rerenders() {
    let mut harness = Harness::mount(Toggle::new());
    assert_eq!(harness.text_content("label").unwrap(), "off");

    harness.click("flip").unwrap();
    assert_eq!(harness.text_content("label").unwrap(), "on");

    harness.click("flip").unwrap();
    assert_eq!(harness.text_content("label").unwrap(), "off");
    assert_eq!(harness.component().flips.get(), 2);
}

#[test]
fn test_click_on_missing_element() {
    let mut harness = Harness::mount(Toggle::new());
    let err = harness.click("missing").unwrap_err();
    assert!(matches!(err, HarnessError::Query(QueryError::NotFound { .. })));
}

#[test]
fn test_recording_host_preserves_order() {
    let mut harness = Harness::mount(Toggle::new());
    harness.click("flip").unwrap();
    harness.click("flip").unwrap();
    harness.click("flip").unwrap();

    assert_eq!(harness.alerts().len(), 3);
    assert!(harness.alerts().iter().all(|m| m == "flipped"));
}

#[test]
fn test_html_snapshot() {
    let harness = Harness::mount(Nested);
    assert_eq!(
        harness.html(),
        "<div data-testid=\"outer\">Count: <b>3</b>!</div>"
    );
}
