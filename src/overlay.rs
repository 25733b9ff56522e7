use crate::constants::*;
use crate::core::{Label, LabelBinding, LabelRegistry};
use crate::dom;
use web_sys as web;

/// Push phase-label opacities to their elements.
pub fn apply_phase_labels(document: &web::Document, labels: &LabelRegistry) {
    for label in labels.iter() {
        if !matches!(label.binding, LabelBinding::Phase(_)) {
            continue;
        }
        if let Some(el) = document.get_element_by_id(label.id) {
            dom::set_style(&el, "opacity", &format!("{:.4}", label.opacity));
        }
    }
}

fn connector_element(document: &web::Document, label: &Label) -> Option<web::Element> {
    let selector = format!(
        "{}[{}=\"{}\"]",
        CONNECTOR_SELECTOR, CONNECTOR_TARGET_ATTR, label.id
    );
    document.query_selector(&selector).ok().flatten()
}

/// Move connector labels to their projected positions and toggle the
/// visible class on the ones listed in `flipped`.
pub fn apply_anchor_labels(document: &web::Document, labels: &LabelRegistry, flipped: &[usize]) {
    for (i, label) in labels.iter().enumerate() {
        let Some(el) = connector_element(document, label) else {
            continue;
        };
        if let Some(px) = label.screen {
            dom::set_style(
                &el,
                "transform",
                &format!("translate({:.1}px, {:.1}px)", px.x, px.y),
            );
        }
        if flipped.contains(&i) {
            let cl = el.class_list();
            if label.visible {
                _ = cl.add_1(CONNECTOR_VISIBLE_CLASS);
            } else {
                _ = cl.remove_1(CONNECTOR_VISIBLE_CLASS);
            }
        }
    }
}

/// Mark the card for `component` active and clear every other card.
pub fn highlight_card(document: &web::Document, component: Option<&str>) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let is_selected = component.is_some()
            && card.get_attribute(CARD_COMPONENT_ATTR).as_deref() == component;
        let cl = card.class_list();
        if is_selected {
            _ = cl.add_1(CARD_ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(CARD_ACTIVE_CLASS);
        }
    }
}

#[inline]
pub fn toggle_info_panel(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INFO_PANEL_ID) {
        _ = el.class_list().toggle(INFO_PANEL_HIDDEN_CLASS);
    }
}
