use klik_core::{Component, NodeId, VDomArena, el};
use std::cell::Cell;
use std::rc::Rc;

/// Signed counter with increment, decrement and reset triggers.
///
/// The value starts at 0 and is unbounded in both directions; nothing outside
/// the three triggers mutates it. Updates are synchronous, one per click.
pub struct Counter {
    value: Rc<Cell<i64>>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            value: Rc::new(Cell::new(0)),
        }
    }

    pub fn value(&self) -> i64 {
        self.value.get()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Counter {
    fn view(&self, arena: &mut VDomArena) -> NodeId {
        let inc = self.value.clone();
        let dec = self.value.clone();
        let reset = self.value.clone();

        el("div")
            .child(
                el("span")
                    .test_id("counter-value")
                    .text(self.value.get().to_string()),
            )
            .child(
                el("button")
                    .test_id("increment-button")
                    .on_click(move |_| inc.set(inc.get() + 1))
                    .text("+"),
            )
            .child(
                el("button")
                    .test_id("decrement-button")
                    .on_click(move |_| dec.set(dec.get() - 1))
                    .text("-"),
            )
            .child(
                el("button")
                    .test_id("reset-button")
                    .on_click(move |_| reset.set(0))
                    .text("Reset"),
            )
            .build(arena)
    }
}
