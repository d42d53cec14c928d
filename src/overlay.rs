use crate::constants::{AUTH_SCREEN_ID, HIDDEN_CLASS};
use web_sys as web;

#[inline]
pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.replace(' ', "").contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// The scene is in view while the auth screen is up. A page without an auth
/// screen keeps the background running.
#[inline]
pub fn scene_visible(document: &web::Document) -> bool {
    !is_hidden(document, AUTH_SCREEN_ID)
}
