use crate::error::DispatchError;
use crate::host::Host;
use crate::vdom::{NodeId, VDomArena, VirtualNode};

/// Context handed to a running event callback.
///
/// Dispatch is synchronous and single-threaded: the callback runs to
/// completion before `dispatch` returns, and nothing else observes the host
/// while it runs.
pub struct EventCtx<'a> {
    pub host: &'a mut dyn Host,
}

/// Runs the listener registered on `node` for the named event.
///
/// The callback is cloned out of the arena before it runs, so it may freely
/// mutate captured state without aliasing the tree.
pub fn dispatch(
    arena: &VDomArena,
    node: NodeId,
    event: &str,
    host: &mut dyn Host,
) -> Result<(), DispatchError> {
    let Some(vnode) = arena.get(node) else {
        tracing::warn!("event '{}' targeted a missing node {:?}", event, node);
        return Err(DispatchError::NodeMissing { event: event.to_string() });
    };

    let VirtualNode::Element(el) = vnode else {
        return Err(DispatchError::NotAnElement { event: event.to_string() });
    };

    let callback = el
        .listeners
        .iter()
        .find(|l| l.event == event)
        .map(|l| l.callback.clone());

    let Some(callback) = callback else {
        tracing::warn!("no '{}' listener on <{}> node {:?}", event, el.tag, node);
        return Err(DispatchError::NoListener {
            event: event.to_string(),
            tag: el.tag,
        });
    };

    tracing::debug!("dispatching '{}' to <{}> node {:?}", event, el.tag, node);
    let mut ctx = EventCtx { host };
    (callback.borrow_mut())(&mut ctx);
    Ok(())
}
