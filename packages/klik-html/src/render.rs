use klik_core::{NodeId, VDomArena, VirtualNode};
use std::collections::VecDeque;

/// Chunked walk over a tree. Emits one string per open tag, text run and
/// close tag, strictly in document order: open tag, children, close tag.
pub struct ChunkIter<'a> {
    arena: &'a VDomArena,
    stack: VecDeque<RenderOp>,
}

enum RenderOp {
    Visit(NodeId),
    Close(&'static str),
}

impl<'a> ChunkIter<'a> {
    pub fn new(arena: &'a VDomArena, root: NodeId) -> Self {
        let mut stack = VecDeque::new();
        stack.push_front(RenderOp::Visit(root));
        Self { arena, stack }
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.stack.pop_front()? {
                RenderOp::Close(tag) => return Some(format!("</{}>", tag)),
                RenderOp::Visit(id) => {
                    let Some(node) = self.arena.get(id) else {
                        tracing::warn!("render reached a node missing from the arena: {:?}", id);
                        continue;
                    };
                    match node {
                        VirtualNode::Element(el) => {
                            let mut chunk = String::new();
                            chunk.push('<');
                            chunk.push_str(el.tag);
                            for attr in &el.attrs {
                                chunk.push(' ');
                                chunk.push_str(attr.name);
                                chunk.push_str("=\"");
                                chunk.push_str(&escape_html(&attr.value));
                                chunk.push('"');
                            }
                            chunk.push('>');

                            // Close tag goes behind the children.
                            self.stack.push_front(RenderOp::Close(el.tag));
                            for &child in el.children.iter().rev() {
                                self.stack.push_front(RenderOp::Visit(child));
                            }
                            return Some(chunk);
                        }
                        VirtualNode::Text(txt) => return Some(escape_html(&txt.text)),
                    }
                }
            }
        }
    }
}

/// Renders the subtree under `root` to a single HTML string.
pub fn render_to_string(arena: &VDomArena, root: NodeId) -> String {
    ChunkIter::new(arena, root).collect()
}

fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
    output
}
