use super::api;
use contracts::api::{GraphRequest, DEFAULT_STORE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_config::use_api_config;
use crate::shared::components::ui::Input;
use crate::shared::components::OutputPanel;
use crate::shared::format::{error_text, format_json};

/// Assemble the graph payload; a blank store falls back to the default.
fn build_request(store: &str) -> GraphRequest {
    let store = store.trim();
    GraphRequest {
        store: if store.is_empty() {
            DEFAULT_STORE.to_string()
        } else {
            store.to_string()
        },
    }
}

#[component]
pub fn GraphPanel() -> impl IntoView {
    let config = use_api_config();

    let (store, set_store) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    // Only the newest submit may write the output.
    let (req_seq, set_req_seq) = signal(0u64);

    let on_submit = move |_| {
        let request = build_request(&store.get());

        let base = config.base_url();
        let seq = req_seq.get_untracked() + 1;
        set_req_seq.set(seq);
        set_is_loading.set(true);
        set_output.set("Loading graph...".to_string());

        spawn_local(async move {
            let result = api::graph(&base, &request).await;
            if req_seq.get_untracked() != seq {
                // Superseded by a newer submit.
                return;
            }
            match result {
                Ok(data) => set_output.set(format_json(&data)),
                Err(e) => set_output.set(error_text(&e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"Belief graph"</h2>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Load graph" }}
                    </Button>
                </Flex>

                <Input
                    label="Store"
                    value=store
                    on_input=Callback::new(move |v| set_store.set(v))
                    placeholder=DEFAULT_STORE
                />

                <OutputPanel text=output download_name="graph_response.json" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_store_falls_back_to_the_default() {
        assert_eq!(build_request("").store, DEFAULT_STORE);
        assert_eq!(build_request("   ").store, DEFAULT_STORE);
    }

    #[test]
    fn explicit_store_is_kept() {
        assert_eq!(build_request("data/work.json").store, "data/work.json");
    }
}
