//! Example: Building a document without parsing
//!
//! This example demonstrates how to assemble a document programmatically
//! with the draft API and walk the finished tree.

use vellum::{
    document::{DocumentDraft, NodeId},
    element::{Circle, Element, Viewport},
    geometry::Rect,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building document from elements...\n");

    let viewport = Viewport::new(Rect::new(0.0, 0.0, 300.0, 150.0));
    let mut draft = DocumentDraft::new(viewport);

    for (i, r) in [10.0, 20.0, 30.0].into_iter().enumerate() {
        let cx = 50.0 + 100.0 * i as f64;
        draft.append(NodeId::ROOT, Element::from(Circle::new(cx, 75.0, r)))?;
    }
    draft.close(NodeId::ROOT)?;

    let document = draft.finish();

    for node in document.descendants() {
        println!("{}{}", "  ".repeat(node.depth()), node.element());
    }

    if let Some(ratio) = document.viewport().aspect_ratio() {
        println!("\naspect ratio: {ratio}");
    }

    Ok(())
}
