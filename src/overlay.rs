use crate::constants::{CLASS_OVERLAY, CLASS_SLOT, OVERLAY_PADDING};
use crate::dom::{create_div, js_err, set_styles};
use parallax_core::constants::OVERLAY_Z_INDEX;
use web_sys as web;

/// Create the overlay layer and the slot inside it that receives the caller's
/// content. The layer itself lets pointer events through; only the slot is
/// interactive.
pub fn create(document: &web::Document) -> anyhow::Result<(web::HtmlElement, web::HtmlElement)> {
    let overlay = create_div(document, CLASS_OVERLAY)?;
    set_styles(
        &overlay,
        &[
            ("position", "absolute"),
            ("inset", "0"),
            ("z-index", OVERLAY_Z_INDEX.to_string().as_str()),
            ("display", "grid"),
            ("place-items", "center"),
            ("padding", OVERLAY_PADDING),
            ("pointer-events", "none"),
        ],
    )?;
    let slot = create_div(document, CLASS_SLOT)?;
    set_styles(
        &slot,
        &[("text-align", "center"), ("pointer-events", "auto")],
    )?;
    overlay.append_child(&slot).map_err(js_err)?;
    Ok((overlay, slot))
}

/// Move every child node of `from` to the end of `to`, preserving order.
pub fn adopt_children(from: &web::HtmlElement, to: &web::HtmlElement) -> anyhow::Result<()> {
    while let Some(child) = from.first_child() {
        to.append_child(&child).map_err(js_err)?;
    }
    Ok(())
}

/// Snapshot of `el`'s current child nodes.
pub fn child_nodes(el: &web::HtmlElement) -> Vec<web::Node> {
    let list = el.child_nodes();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Append `nodes` to `to` in order. Nodes already under `to` move to the end,
/// so this also restores their original order.
pub fn adopt_nodes(nodes: &[web::Node], to: &web::HtmlElement) -> anyhow::Result<()> {
    for node in nodes {
        to.append_child(node).map_err(js_err)?;
    }
    Ok(())
}

#[inline]
pub fn is_empty(slot: &web::HtmlElement) -> bool {
    !slot.has_child_nodes()
}
