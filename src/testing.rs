//! Helpers for rendering components to HTML in unit tests.

use dioxus::prelude::*;

/// Render `app` to HTML after the first build and one follow-up pass, so that error boundaries which caught something
/// during the build show their fallback.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let _ = dom.render_immediate_to_vec();
    dioxus_ssr::render(&dom)
}

/// Render only the first build of `app`. Spawned tasks, like data loaders, are never polled.
pub fn render_first_pass(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {html}"))
}
