use crate::host::RecordingHost;
use klik_core::{Component, DispatchError, NodeId, VDomArena, VirtualNode, dispatch};
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no element with data-testid \"{test_id}\"")]
    NotFound { test_id: String },

    #[error("{count} elements share data-testid \"{test_id}\"")]
    Ambiguous { test_id: String, count: usize },
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Mounts a component and drives it the way a user would: look elements up by
/// their stable test id, click them, read the rendered output back.
///
/// Every click re-renders the whole tree into a fresh arena; component state
/// carried in the component struct survives, everything else is rebuilt.
pub struct Harness<C: Component> {
    component: C,
    arena: VDomArena,
    root: NodeId,
    index: FxHashMap<String, Vec<NodeId>>,
    host: RecordingHost,
}

impl<C: Component> Harness<C> {
    pub fn mount(component: C) -> Self {
        let mut arena = VDomArena::new();
        let root = component.view(&mut arena);
        let index = build_index(&arena, root);
        tracing::debug!("mounted component, {} nodes", arena.len());
        Self {
            component,
            arena,
            root,
            index,
            host: RecordingHost::new(),
        }
    }

    fn render(&mut self) {
        let mut arena = VDomArena::new();
        self.root = self.component.view(&mut arena);
        self.arena = arena;
        self.index = build_index(&self.arena, self.root);
    }

    pub fn get_by_test_id(&self, test_id: &str) -> Result<NodeId, QueryError> {
        match self.index.get(test_id).map(Vec::as_slice) {
            Some([id]) => Ok(*id),
            Some(ids) if ids.len() > 1 => Err(QueryError::Ambiguous {
                test_id: test_id.to_string(),
                count: ids.len(),
            }),
            _ => Err(QueryError::NotFound {
                test_id: test_id.to_string(),
            }),
        }
    }

    /// Concatenated text of the element and its descendants.
    pub fn text_content(&self, test_id: &str) -> Result<String, QueryError> {
        let id = self.get_by_test_id(test_id)?;
        Ok(self.arena.text_content(id))
    }

    pub fn has_class(&self, test_id: &str, class: &str) -> Result<bool, QueryError> {
        let id = self.get_by_test_id(test_id)?;
        match self.arena.get(id) {
            Some(VirtualNode::Element(el)) => Ok(el.has_class(class)),
            _ => Ok(false),
        }
    }

    /// Fires a click on the element, then re-renders.
    pub fn click(&mut self, test_id: &str) -> Result<(), HarnessError> {
        let id = self.get_by_test_id(test_id)?;
        dispatch(&self.arena, id, "click", &mut self.host)?;
        self.render();
        Ok(())
    }

    /// Every message the component has passed to the host notification
    /// primitive, in call order.
    pub fn alerts(&self) -> &[String] {
        self.host.messages()
    }

    /// Current markup, for snapshots and failure output.
    pub fn html(&self) -> String {
        klik_html::render_to_string(&self.arena, self.root)
    }

    pub fn component(&self) -> &C {
        &self.component
    }
}

fn build_index(arena: &VDomArena, root: NodeId) -> FxHashMap<String, Vec<NodeId>> {
    let mut index: FxHashMap<String, Vec<NodeId>> = FxHashMap::default();
    arena.walk(root, &mut |id, node| {
        if let VirtualNode::Element(el) = node {
            if let Some(test_id) = el.test_id() {
                index.entry(test_id.to_string()).or_default().push(id);
            }
        }
    });
    index
}
