use klik_core::{VDomArena, el};
use klik_html::{ChunkIter, render_to_string};

#[test]
fn test_render_single_element() {
    let mut arena = VDomArena::new();
    let root = el("div").build(&mut arena);

    assert_eq!(render_to_string(&arena, root), "<div></div>");
}

#[test]
fn test_render_attributes_in_insertion_order() {
    let mut arena = VDomArena::new();
    let root = el("button")
        .class("btn")
        .test_id("alert-button")
        .build(&mut arena);

    assert_eq!(
        render_to_string(&arena, root),
        "<button class=\"btn\" data-testid=\"alert-button\"></button>"
    );
}

#[test]
fn test_render_nested() {
    let mut arena = VDomArena::new();
    let root = el("div")
        .child(el("span").test_id("counter-value").text("0"))
        .child(el("button").text("+"))
        .build(&mut arena);

    assert_eq!(
        render_to_string(&arena, root),
        "<div><span data-testid=\"counter-value\">0</span><button>+</button></div>"
    );
}

#[test]
fn test_render_escapes_text_and_attrs() {
    let mut arena = VDomArena::new();
    let root = el("span")
        .attr("title", "a \"quoted\" <value>")
        .text("1 < 2 && 3 > 2")
        .build(&mut arena);

    assert_eq!(
        render_to_string(&arena, root),
        "<span title=\"a &quot;quoted&quot; &lt;value&gt;\">1 &lt; 2 &amp;&amp; 3 &gt; 2</span>"
    );
}

#[test]
fn test_chunk_iter_order() {
    let mut arena = VDomArena::new();
    let root = el("div").child(el("b").text("x")).build(&mut arena);

    let chunks: Vec<String> = ChunkIter::new(&arena, root).collect();
    assert_eq!(chunks, vec!["<div>", "<b>", "x", "</b>", "</div>"]);
}
