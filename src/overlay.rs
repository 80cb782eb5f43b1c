use crate::dom;
use crate::core::LinkState;
use web_sys as web;

// Landing/dashboard layers and the small status labels on the dashboard.

pub fn hide_loader(document: &web::Document) {
    dom::set_display(document, "loader", "none");
}

/// Swap the landing layer for the dashboard.
pub fn enter_dashboard(document: &web::Document) {
    dom::set_display(document, "landing-layer", "none");
    dom::set_display(document, "dashboard-layer", "block");
    if let Some(el) = document.get_element_by_id("dashboard-layer") {
        _ = el.class_list().add_1("active-layer");
    }
}

pub fn show_mood(document: &web::Document, name: &str) {
    dom::set_text(document, "mood-label", name);
}

/// Reflect a sensor link state on its button.
pub fn show_link_state(document: &web::Document, button_id: &str, label: &str, state: LinkState) {
    let text = match state {
        LinkState::Idle => format!("LINK {}", label),
        LinkState::Pending => format!("{} ...", label),
        LinkState::Active => format!("{} LINKED", label),
        LinkState::Denied => format!("{} OFFLINE", label),
    };
    dom::set_text(document, button_id, &text);
    if let Some(el) = document.get_element_by_id(button_id) {
        let cl = el.class_list();
        match state {
            LinkState::Active => {
                _ = cl.add_1("linked");
            }
            LinkState::Denied => {
                _ = cl.add_1("denied");
            }
            _ => {}
        }
    }
}
