use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("event '{event}' targeted a node that is not in the tree")]
    NodeMissing { event: String },

    #[error("event '{event}' targeted a text node")]
    NotAnElement { event: String },

    #[error("no '{event}' listener registered on <{tag}>")]
    NoListener { event: String, tag: &'static str },
}
