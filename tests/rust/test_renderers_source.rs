use super::*;
use crate::model::{Document, Subgraph};
use crate::syntax::attrs::NONE;

fn render(arena: &Arena, id: GraphId) -> String {
    SourceRenderer.render(arena, id).unwrap()
}

#[test]
fn test_empty_graph() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph());
    assert_eq!(render(&arena, g), "graph {\n}");
}

#[test]
fn test_header_name_quoted() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::digraph().with_name("my graph"));
    assert_eq!(render(&arena, g), "digraph \"my graph\" {\n}");
}

#[test]
fn test_root_comment_before_header() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph().with_comment("The Round Table"));
    assert_eq!(render(&arena, g), "// The Round Table\ngraph {\n}");
}

#[test]
fn test_empty_comment_renders_bare_marker() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph().with_comment(""));
    assert_eq!(render(&arena, g), "//\ngraph {\n}");
}

#[test]
fn test_default_blocks_after_header() {
    let mut arena = Arena::new();
    let g = arena.insert(
        Document::graph()
            .with_edge_attr(&[("color", "red")])
            .with_graph_attr(&[("rankdir", "LR")])
            .with_node_attr(&[("shape", "box")]),
    );
    arena.get_mut(g).unwrap().node("A", None, NONE);
    assert_eq!(
        render(&arena, g),
        "graph {\n\tgraph [rankdir=LR]\n\tnode [shape=box]\n\tedge [color=red]\n\tA\n}"
    );
}

#[test]
fn test_anonymous_subgraph_header() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph());
    arena.subgraph(g, Subgraph::new().body(["A"])).unwrap();
    assert_eq!(render(&arena, g), "graph {\n\t{\n\t\tA\n\t}\n}");
}

#[test]
fn test_nested_indentation() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::digraph());
    arena
        .subgraph_with(g, Subgraph::new().name("cluster_a"), |arena, a| {
            arena.get_mut(a)?.node("x", None, NONE);
            arena.subgraph_with(a, Subgraph::new().name("cluster_b"), |arena, b| {
                arena.get_mut(b)?.edge(["x", "y"], None, NONE)
            })?;
            Ok(())
        })
        .unwrap();
    assert_eq!(
        render(&arena, g),
        "digraph {\n\tsubgraph cluster_a {\n\t\tx\n\t\tsubgraph cluster_b {\n\t\t\tx -> y\n\t\t}\n\t}\n}"
    );
}

#[test]
fn test_reflexive_renders_statements_present_at_embed_time() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph());
    arena.get_mut(g).unwrap().node("A", None, NONE);
    arena.subgraph(g, Subgraph::new().graph(g)).unwrap();
    arena.get_mut(g).unwrap().node("B", None, NONE);
    assert_eq!(render(&arena, g), "graph {\n\tA\n\t{\n\t\tA\n\t}\n\tB\n}");
}

#[test]
fn test_mutual_embedding_terminates() {
    let mut arena = Arena::new();
    let a = arena.insert(Document::graph().with_name("a"));
    let b = arena.insert(Document::graph().with_name("b"));
    arena.subgraph(a, Subgraph::new().graph(b)).unwrap();
    arena.subgraph(b, Subgraph::new().graph(a)).unwrap();
    assert_eq!(
        render(&arena, b),
        "graph b {\n\tsubgraph a {\n\t\tsubgraph b {\n\t\t}\n\t}\n}"
    );
}

#[test]
fn test_child_mutation_after_embedding_not_rendered() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph());
    let sub = arena.insert(Document::graph());
    arena.get_mut(sub).unwrap().node("A", None, NONE);
    arena.subgraph(g, Subgraph::new().graph(sub)).unwrap();
    arena.get_mut(sub).unwrap().node("B", None, NONE);
    assert_eq!(render(&arena, g), "graph {\n\t{\n\t\tA\n\t}\n}");
    assert_eq!(render(&arena, sub), "graph {\n\tA\n\tB\n}");
}

#[test]
fn test_no_trailing_whitespace_or_newline() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph().with_body([""]));
    let out = render(&arena, g);
    assert!(!out.ends_with('\n'));
    assert!(out.lines().all(|l| !l.ends_with(' ') && !l.ends_with('\t')));
}

#[test]
fn test_render_idempotent() {
    let mut arena = Arena::new();
    let g = arena.insert(Document::graph());
    arena
        .get_mut(g)
        .unwrap()
        .edge(["A", "B", "C"], Some("chain"), NONE)
        .unwrap();
    assert_eq!(render(&arena, g), render(&arena, g));
}
