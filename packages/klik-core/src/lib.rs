pub mod builder;
pub mod component;
pub mod error;
pub mod events;
pub mod host;
pub mod vdom;

pub use builder::{ElementBuilder, el};
pub use component::Component;
pub use error::DispatchError;
pub use events::{EventCtx, dispatch};
pub use host::{Host, TracingHost};
pub use vdom::{
    Attribute, Element, EventListener, NodeId, TEST_ID_ATTR, Text, VDomArena, VirtualNode,
};
