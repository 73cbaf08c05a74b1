//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::components::page_title::PageTitle;
use crate::config::NavConfig;
use crate::state::page::PageId;

/// Root application component.
///
/// Provides the active page as an `RwSignal<PageId>` context. Under `csr` it
/// also attaches the navigator to the static page markup and detaches it when
/// the owner is cleaned up.
#[component]
pub fn App(config: NavConfig) -> impl IntoView {
    provide_meta_context();

    let active = RwSignal::new(PageId::default());
    provide_context(active);

    #[cfg(feature = "csr")]
    attach_navigator(config.clone(), active);

    view! { <PageTitle site_name=config.site_name/> }
}

#[cfg(feature = "csr")]
fn attach_navigator(config: NavConfig, active: RwSignal<PageId>) {
    let mounted = match crate::browser::mount(config) {
        Ok(mounted) => mounted,
        Err(e) => {
            leptos::logging::error!("navigator mount failed: {e}");
            return;
        }
    };
    mounted.on_page_activated(move |activation| active.set(activation.current));

    let handle = StoredValue::new_local(Some(mounted));
    on_cleanup(move || {
        if let Some(mounted) = handle.try_update_value(Option::take).flatten() {
            mounted.teardown();
        }
    });
}
