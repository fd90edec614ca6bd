use super::api;
use contracts::api::{TimelineRequest, DEFAULT_STORE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_config::use_api_config;
use crate::shared::components::ui::Input;
use crate::shared::components::OutputPanel;
use crate::shared::format::{error_text, timeline_text};

/// Assemble the timeline payload; a blank topic means no filter.
fn build_request(store: &str, topic: &str) -> TimelineRequest {
    let store = store.trim();
    let topic = topic.trim();
    TimelineRequest {
        store: if store.is_empty() {
            DEFAULT_STORE.to_string()
        } else {
            store.to_string()
        },
        topic: if topic.is_empty() {
            None
        } else {
            Some(topic.to_string())
        },
    }
}

#[component]
pub fn TimelinePanel() -> impl IntoView {
    let config = use_api_config();

    let (store, set_store) = signal(String::new());
    let (topic, set_topic) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    // Only the newest submit may write the output.
    let (req_seq, set_req_seq) = signal(0u64);

    let on_submit = move |_| {
        let request = build_request(&store.get(), &topic.get());

        let base = config.base_url();
        let seq = req_seq.get_untracked() + 1;
        set_req_seq.set(seq);
        set_is_loading.set(true);
        set_output.set("Loading timeline...".to_string());

        spawn_local(async move {
            let result = api::timeline(&base, &request).await;
            if req_seq.get_untracked() != seq {
                // Superseded by a newer submit.
                return;
            }
            match result {
                Ok(data) => set_output.set(timeline_text(&data)),
                Err(e) => set_output.set(error_text(&e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"Timeline"</h2>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Load timeline" }}
                    </Button>
                </Flex>

                <Input
                    label="Store"
                    value=store
                    on_input=Callback::new(move |v| set_store.set(v))
                    placeholder=DEFAULT_STORE
                />
                <Input
                    label="Topic (optional)"
                    value=topic
                    on_input=Callback::new(move |v| set_topic.set(v))
                    placeholder="travel"
                />

                <OutputPanel text=output download_name="timeline_response.json" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_topic_means_no_filter() {
        let request = build_request("", "  ");
        assert_eq!(request.store, DEFAULT_STORE);
        assert_eq!(request.topic, None);

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("topic").is_none());
    }

    #[test]
    fn topic_filter_is_trimmed_and_kept() {
        let request = build_request("data/work.json", " travel ");
        assert_eq!(request.store, "data/work.json");
        assert_eq!(request.topic.as_deref(), Some("travel"));
    }
}
