use super::api;
use contracts::api::{SessionRequest, DEFAULT_STORE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_config::use_api_config;
use crate::shared::components::ui::Input;
use crate::shared::components::OutputPanel;
use crate::shared::format::{answer_text, error_text};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Assemble the session payload from trimmed field values.
fn build_request(
    topic: &str,
    store: &str,
    start: &str,
    end: &str,
) -> Result<SessionRequest, &'static str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err("Topic is required.");
    }
    let store = store.trim();
    Ok(SessionRequest {
        topic: topic.to_string(),
        store: if store.is_empty() {
            DEFAULT_STORE.to_string()
        } else {
            store.to_string()
        },
        start: optional(start),
        end: optional(end),
    })
}

#[component]
pub fn SessionPanel() -> impl IntoView {
    let config = use_api_config();

    let (topic, set_topic) = signal(String::new());
    let (store, set_store) = signal(String::new());
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    // Only the newest submit may write the output.
    let (req_seq, set_req_seq) = signal(0u64);

    let on_submit = move |_| {
        let request = match build_request(&topic.get(), &store.get(), &start.get(), &end.get()) {
            Ok(request) => request,
            Err(msg) => {
                set_output.set(msg.to_string());
                return;
            }
        };

        let base = config.base_url();
        let seq = req_seq.get_untracked() + 1;
        set_req_seq.set(seq);
        set_is_loading.set(true);
        set_output.set("Running session...".to_string());

        spawn_local(async move {
            let result = api::session(&base, &request).await;
            if req_seq.get_untracked() != seq {
                // Superseded by a newer submit.
                return;
            }
            match result {
                Ok(data) => set_output.set(answer_text(&data)),
                Err(e) => set_output.set(error_text(&e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"Thinking session"</h2>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Running..." } else { "Run session" }}
                    </Button>
                </Flex>

                <Input
                    label="Topic"
                    value=topic
                    on_input=Callback::new(move |v| set_topic.set(v))
                    placeholder="career"
                />
                <Input
                    label="Store"
                    value=store
                    on_input=Callback::new(move |v| set_store.set(v))
                    placeholder=DEFAULT_STORE
                />
                <div class="form__row">
                    <Input
                        label="Start (optional)"
                        value=start
                        on_input=Callback::new(move |v| set_start.set(v))
                        placeholder="2026-01-01T00:00:00"
                    />
                    <Input
                        label="End (optional)"
                        value=end
                        on_input=Callback::new(move |v| set_end.set(v))
                        placeholder="2026-12-31T23:59:59"
                    />
                </div>

                <OutputPanel text=output download_name="session_response.json" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_topic_is_rejected_before_any_network_call() {
        assert_eq!(build_request("", "", "", "").unwrap_err(), "Topic is required.");
    }

    #[test]
    fn topic_only_request_omits_the_range_entirely() {
        let request = build_request("career", "", "", "").unwrap();
        assert_eq!(request.start, None);
        assert_eq!(request.end, None);

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("start").is_none());
        assert!(value.get("end").is_none());
        assert_eq!(value["store"], DEFAULT_STORE);
    }

    #[test]
    fn range_bounds_survive_trimming() {
        let request = build_request("health", "data/journal.json", " 2026-01-01T00:00:00 ", "").unwrap();
        assert_eq!(request.start.as_deref(), Some("2026-01-01T00:00:00"));
        assert_eq!(request.end, None);
    }
}
