// Glue between the agency core and Leptos signals

use agency::{SiteConfig, StateCell};
use leptos::prelude::*;

/// Attribute on `<html>` that overrides the backend origin at deploy time.
const BACKEND_URL_ATTR: &str = "data-backend-url";

/// Resolve the backend origin once, before mounting.
pub fn site_config() -> SiteConfig {
    let explicit = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(BACKEND_URL_ATTR));

    SiteConfig::resolve(explicit.as_deref(), option_env!("AGENCY_BACKEND_URL")).unwrap_or_else(
        |err| {
            tracing::warn!(error = %err, "invalid backend url, using the default");
            SiteConfig::default()
        },
    )
}

/// A signal the core lifecycle code can write through.
pub struct SignalCell<T: 'static>(pub RwSignal<T>);

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T> StateCell<T> for SignalCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn snapshot(&self) -> T {
        self.0.get_untracked()
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
