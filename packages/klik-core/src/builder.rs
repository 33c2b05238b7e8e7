use crate::events::EventCtx;
use crate::vdom::{
    Attribute, Element, EventListener, NodeId, TEST_ID_ATTR, Text, VDomArena, VirtualNode,
};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Starts building an element with the given tag.
pub fn el(tag: &'static str) -> ElementBuilder {
    ElementBuilder {
        tag,
        attrs: SmallVec::new(),
        listeners: SmallVec::new(),
        children: Vec::new(),
    }
}

enum Child {
    Element(ElementBuilder),
    Text(String),
}

/// Fluent construction of an element subtree, inserted into an arena by
/// [`ElementBuilder::build`].
pub struct ElementBuilder {
    tag: &'static str,
    attrs: SmallVec<[Attribute; 4]>,
    listeners: SmallVec<[EventListener; 2]>,
    children: Vec<Child>,
}

impl ElementBuilder {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute {
            name,
            value: value.into(),
        });
        self
    }

    /// Stable identifier for test and automation addressability.
    pub fn test_id(self, id: impl Into<String>) -> Self {
        self.attr(TEST_ID_ATTR, id)
    }

    pub fn class(self, name: impl Into<String>) -> Self {
        self.attr("class", name)
    }

    /// Adds the class attribute only when `cond` holds.
    pub fn class_if(self, cond: bool, name: impl Into<String>) -> Self {
        if cond { self.class(name) } else { self }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn on(mut self, event: &'static str, callback: impl FnMut(&mut EventCtx<'_>) + 'static) -> Self {
        self.listeners.push(EventListener {
            event,
            callback: Rc::new(RefCell::new(callback)),
        });
        self
    }

    pub fn on_click(self, callback: impl FnMut(&mut EventCtx<'_>) + 'static) -> Self {
        self.on("click", callback)
    }

    /// Inserts this element and all of its children into the arena, returning
    /// the element's node id. Children are inserted in declaration order.
    pub fn build(self, arena: &mut VDomArena) -> NodeId {
        let mut children = SmallVec::new();
        for child in self.children {
            let id = match child {
                Child::Element(builder) => builder.build(arena),
                Child::Text(text) => arena.insert(VirtualNode::Text(Text { text })),
            };
            children.push(id);
        }
        arena.insert(VirtualNode::Element(Element {
            tag: self.tag,
            attrs: self.attrs,
            listeners: self.listeners,
            children,
        }))
    }
}
