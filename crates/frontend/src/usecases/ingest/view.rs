use super::api;
use contracts::api::{IngestRequest, DEFAULT_STORE};
use contracts::enums::{IngestProfile, MemorySource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_config::use_api_config;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::OutputPanel;
use crate::shared::format::{error_text, format_json};

/// Assemble the ingest payload from trimmed field values.
fn build_request(
    text: &str,
    source: MemorySource,
    profile: IngestProfile,
    timestamp: &str,
    store: &str,
) -> Result<IngestRequest, &'static str> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Text is required.");
    }
    let timestamp = timestamp.trim();
    let store = store.trim();
    Ok(IngestRequest {
        text: text.to_string(),
        source,
        store: if store.is_empty() {
            DEFAULT_STORE.to_string()
        } else {
            store.to_string()
        },
        profile,
        timestamp: if timestamp.is_empty() {
            None
        } else {
            Some(timestamp.to_string())
        },
    })
}

#[component]
pub fn IngestPanel() -> impl IntoView {
    let config = use_api_config();

    let (text, set_text) = signal(String::new());
    let (source, set_source) = signal(MemorySource::default());
    let (profile, set_profile) = signal(IngestProfile::default());
    let (timestamp, set_timestamp) = signal(String::new());
    let (store, set_store) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    // Only the newest submit may write the output.
    let (req_seq, set_req_seq) = signal(0u64);

    let on_now = move |_| {
        set_timestamp.set(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string());
    };

    let on_submit = move |_| {
        let request = match build_request(
            &text.get(),
            source.get(),
            profile.get(),
            &timestamp.get(),
            &store.get(),
        ) {
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
        set_output.set("Ingesting...".to_string());

        spawn_local(async move {
            let result = api::ingest(&base, &request).await;
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

    let source_value = Signal::derive(move || source.get().as_str().to_string());
    let profile_value = Signal::derive(move || profile.get().as_str().to_string());

    let source_options = MemorySource::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect::<Vec<_>>();
    let profile_options = IngestProfile::all()
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="card">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"Ingest"</h2>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Ingesting..." } else { "Ingest" }}
                    </Button>
                </Flex>

                <Textarea
                    label="Text"
                    value=text
                    on_input=Callback::new(move |v| set_text.set(v))
                    placeholder="What should Mnemosyne remember?"
                    rows=4
                />
                <Select
                    label="Source"
                    value=source_value
                    on_change=Callback::new(move |v: String| set_source.set(MemorySource::from_str(&v)))
                    options=source_options
                />
                <Select
                    label="Profile"
                    value=profile_value
                    on_change=Callback::new(move |v: String| set_profile.set(IngestProfile::from_str(&v)))
                    options=profile_options
                />
                <div class="form__row">
                    <Input
                        label="Timestamp (optional)"
                        value=timestamp
                        on_input=Callback::new(move |v| set_timestamp.set(v))
                        placeholder="2026-08-07T09:30:00"
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=on_now>
                        "Now"
                    </Button>
                </div>
                <Input
                    label="Store"
                    value=store
                    on_input=Callback::new(move |v| set_store.set(v))
                    placeholder=DEFAULT_STORE
                />

                <OutputPanel text=output download_name="ingest_response.json" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected_before_any_network_call() {
        let result = build_request("", MemorySource::Note, IngestProfile::Default, "", "");
        assert_eq!(result.unwrap_err(), "Text is required.");

        let result = build_request("   ", MemorySource::Note, IngestProfile::Default, "", "");
        assert_eq!(result.unwrap_err(), "Text is required.");
    }

    #[test]
    fn blank_store_falls_back_to_the_default() {
        let request = build_request(
            "Met Ada",
            MemorySource::Note,
            IngestProfile::Default,
            "",
            "  ",
        )
        .unwrap();
        assert_eq!(request.store, DEFAULT_STORE);
        assert_eq!(request.timestamp, None);
    }

    #[test]
    fn fields_are_trimmed_and_optionals_kept() {
        let request = build_request(
            "  Met Ada  ",
            MemorySource::Voice,
            IngestProfile::Research,
            " 2026-08-07T09:30:00 ",
            "data/work.json",
        )
        .unwrap();
        assert_eq!(request.text, "Met Ada");
        assert_eq!(request.source, MemorySource::Voice);
        assert_eq!(request.profile, IngestProfile::Research);
        assert_eq!(request.timestamp.as_deref(), Some("2026-08-07T09:30:00"));
        assert_eq!(request.store, "data/work.json");
    }
}
