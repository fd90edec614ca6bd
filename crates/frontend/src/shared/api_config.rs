//! API endpoint configuration.
//!
//! The base URL of the memory service is persisted in localStorage and
//! provided to the app as a context. Panels read the base from the
//! context at submit time and pass it into the dispatcher explicitly;
//! nothing re-reads storage after mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::window;

use crate::shared::components::ui::Input;

const API_BASE_STORAGE_KEY: &str = "mnemoApiBase";
const DEFAULT_API_BASE: &str = "http://localhost:8000";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Stored value if present and non-empty, hardcoded local default otherwise.
fn normalize_base(stored: Option<String>) -> String {
    match stored {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE.to_string(),
    }
}

fn load_base_from_storage() -> String {
    normalize_base(storage().and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten()))
}

fn save_base_to_storage(value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(API_BASE_STORAGE_KEY, value);
    }
}

/// API configuration context.
#[derive(Clone, Copy)]
pub struct ApiConfig {
    /// Current base URL signal.
    pub base: RwSignal<String>,
}

impl ApiConfig {
    /// Load the persisted base URL (or the default) into a fresh context.
    pub fn new() -> Self {
        Self {
            base: RwSignal::new(load_base_from_storage()),
        }
    }

    /// Base URL as of now; submit handlers capture this per request.
    pub fn base_url(&self) -> String {
        self.base.get_untracked()
    }

    /// Set the base URL and persist it. The value is stored verbatim.
    pub fn set_base(&self, value: String) {
        save_base_to_storage(&value);
        log::info!("api base set to {}", value);
        self.base.set(value);
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the API configuration context.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().expect("ApiConfig not found. Provide it at the app root.")
}

/// Header panel for viewing and saving the API base URL.
#[component]
pub fn ApiConfigPanel() -> impl IntoView {
    let config = use_api_config();

    let (draft, set_draft) = signal(config.base.get_untracked());
    let (saved, set_saved) = signal(false);

    let on_save = move |_| {
        let value = draft.get().trim().to_string();
        if value.is_empty() {
            return;
        }
        config.set_base(value);
        set_saved.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_saved.set(false);
        });
    };

    view! {
        <div class="api-config">
            <Input
                label="API base"
                value=draft
                on_input=Callback::new(move |v| set_draft.set(v))
                placeholder=DEFAULT_API_BASE
            />
            <Button appearance=ButtonAppearance::Secondary on_click=on_save>
                {move || if saved.get() { "Saved" } else { "Save" }}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_falls_back_to_local_default() {
        assert_eq!(normalize_base(None), "http://localhost:8000");
    }

    #[test]
    fn empty_value_falls_back_to_local_default() {
        assert_eq!(normalize_base(Some(String::new())), "http://localhost:8000");
    }

    #[test]
    fn stored_value_wins_verbatim() {
        assert_eq!(
            normalize_base(Some("https://mnemo.example:9000".to_string())),
            "https://mnemo.example:9000"
        );
    }
}
