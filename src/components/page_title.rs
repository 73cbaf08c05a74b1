//! Document title that follows the active page.

#[cfg(test)]
#[path = "page_title_test.rs"]
mod page_title_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::page::PageId;

/// Sets `<title>` from the active page.
///
/// Reads the `RwSignal<PageId>` provided by `App`.
#[component]
pub fn PageTitle(site_name: String) -> impl IntoView {
    let active = expect_context::<RwSignal<PageId>>();
    view! { <Title text=move || page_title_text(active.get(), &site_name)/> }
}

/// `"{title} | {site}"`, or just the site name on the home page.
pub fn page_title_text(page: PageId, site_name: &str) -> String {
    if page == PageId::Home {
        return site_name.to_owned();
    }
    format!("{} | {site_name}", page.title())
}
