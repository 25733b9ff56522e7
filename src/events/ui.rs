use crate::constants::*;
use crate::core::Selection;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SelectionQueue = Rc<RefCell<Vec<Selection>>>;

/// Clicking a component card queues a fly-to. Cards without a
/// `data-component` attribute, or naming a component `knows` rejects, are
/// left unwired.
pub fn wire_cards(
    document: &web::Document,
    selections: &SelectionQueue,
    knows: impl Fn(&str) -> bool,
) {
    let mut wired = 0usize;
    for card in dom::query_all(document, CARD_SELECTOR) {
        let Some(component) = card.get_attribute(CARD_COMPONENT_ATTR) else {
            continue;
        };
        if !knows(&component) {
            log::warn!("[ui] card names unknown component `{}`", component);
            continue;
        }
        let queue = selections.clone();
        dom::listen_click(&card, move || {
            queue
                .borrow_mut()
                .push(Selection::Component(component.clone()));
        });
        wired += 1;
    }
    log::info!("[ui] wired {} component cards", wired);
}

/// Append a "Reset View" button to the body.
pub fn wire_reset_button(document: &web::Document, selections: &SelectionQueue) {
    let (Some(body), Ok(button)) = (document.body(), document.create_element("button")) else {
        log::warn!("[ui] could not create reset button");
        return;
    };
    button.set_inner_html(RESET_BUTTON_HTML);
    button.set_class_name(RESET_BUTTON_CLASS);
    let queue = selections.clone();
    dom::listen_click(&button, move || {
        queue.borrow_mut().push(Selection::Reset);
    });
    _ = body.append_child(&button);
}

/// Info panel toggle, fullscreen toggle, loading screen.
pub fn wire_page_controls(document: &web::Document) {
    let doc_info = document.clone();
    dom::add_click_listener(document, INFO_TOGGLE_ID, move || {
        overlay::toggle_info_panel(&doc_info);
    });

    let doc_fs = document.clone();
    dom::add_click_listener(document, FULLSCREEN_TOGGLE_ID, move || {
        dom::toggle_fullscreen(&doc_fs);
    });

    dom::dismiss_loading_screen(LOADING_SCREEN_ID);
}
