use crate::vdom::{NodeId, VDomArena};

/// A renderable unit.
///
/// `view` rebuilds the component's subtree from its current state. State that
/// must survive re-renders lives in the component struct (behind `Rc<Cell<_>>`
/// or similar) so that event callbacks captured by one render are observed by
/// the next.
pub trait Component {
    fn view(&self, arena: &mut VDomArena) -> NodeId;
}
