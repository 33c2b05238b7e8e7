use crate::events::EventCtx;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    pub struct NodeId;
}

/// Attribute name that carries the stable identifier used by test harnesses
/// and automation to address an element.
pub const TEST_ID_ATTR: &str = "data-testid";

pub struct VDomArena {
    nodes: SlotMap<NodeId, VirtualNode>,
}

impl VDomArena {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, node: VirtualNode) -> NodeId {
        self.nodes.insert(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&VirtualNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut VirtualNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first walk from `root`, visiting every node reachable through
    /// element children.
    pub fn walk<F>(&self, root: NodeId, f: &mut F)
    where
        F: FnMut(NodeId, &VirtualNode),
    {
        if let Some(node) = self.nodes.get(root) {
            f(root, node);
            if let VirtualNode::Element(el) = node {
                for &child in &el.children {
                    self.walk(child, f);
                }
            }
        }
    }

    /// Concatenated text of `root` and all its descendants, in document order.
    pub fn text_content(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.walk(root, &mut |_, node| {
            if let VirtualNode::Text(txt) = node {
                out.push_str(&txt.text);
            }
        });
        out
    }
}

impl Default for VDomArena {
    fn default() -> Self {
        Self::new()
    }
}

pub enum VirtualNode {
    Element(Element),
    Text(Text),
}

pub struct Element {
    pub tag: &'static str,
    pub attrs: SmallVec<[Attribute; 4]>,
    pub listeners: SmallVec<[EventListener; 2]>,
    pub children: SmallVec<[NodeId; 4]>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn test_id(&self) -> Option<&str> {
        self.attr(TEST_ID_ATTR)
    }

    /// Whether the whitespace-separated `class` attribute contains `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

pub struct Text {
    pub text: String,
}

pub type Callback = Rc<RefCell<dyn FnMut(&mut EventCtx<'_>)>>;

pub struct EventListener {
    pub event: &'static str,
    pub callback: Callback,
}
