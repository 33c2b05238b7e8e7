use klik_core::{Component, NodeId, VDomArena, el};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertButtonProps {
    pub message: Option<String>,
}

/// Button that raises the host notification on every click.
///
/// The message is fixed at construction (missing means empty). The `clicked`
/// flag is monotonic: it switches on at the first click and nothing exposed
/// here switches it back off. Clicking keeps alerting in either state.
pub struct AlertButton {
    message: String,
    clicked: Rc<Cell<bool>>,
}

impl AlertButton {
    pub fn new(props: AlertButtonProps) -> Self {
        Self {
            message: props.message.unwrap_or_default(),
            clicked: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self::new(AlertButtonProps {
            message: Some(message.into()),
        })
    }

    pub fn clicked(&self) -> bool {
        self.clicked.get()
    }
}

impl Default for AlertButton {
    fn default() -> Self {
        Self::new(AlertButtonProps::default())
    }
}

impl Component for AlertButton {
    fn view(&self, arena: &mut VDomArena) -> NodeId {
        let message = self.message.clone();
        let clicked = self.clicked.clone();

        el("button")
            .test_id("alert-button")
            .class_if(self.clicked.get(), "clicked")
            .on_click(move |ctx| {
                tracing::debug!("alert button clicked, message: {:?}", message);
                ctx.host.alert(&message);
                clicked.set(true);
            })
            .text("Show Alert")
            .build(arena)
    }
}
