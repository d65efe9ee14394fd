use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height kept clear above a section when scrolling to it, for the sticky header.
pub const SECTION_OFFSET: f64 = 100.0;

/// Document position that puts an element `rect_top` px below the viewport top
/// just under the header.
pub fn section_target(rect_top: f64, scroll_y: f64) -> f64 {
    (rect_top + scroll_y - SECTION_OFFSET).max(0.0)
}

/// Picks the section being read: the last one whose top has passed the header.
/// `tops` are viewport-relative, in page order.
pub fn active_section<'a>(tops: &[(&'a str, f64)]) -> Option<&'a str> {
    tops.iter()
        .take_while(|(_, top)| *top <= SECTION_OFFSET + 1.0)
        .last()
        .or_else(|| tops.first())
        .map(|(id, _)| *id)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport-relative top of the element with `id`, if it is on the page.
pub fn section_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top())
}

pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(top) = section_top(id) else {
        log::warn!("No section with id {} to scroll to", id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(section_target(top, scroll_y()));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
