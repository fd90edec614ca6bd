use super::api;
use contracts::api::{AnswerRequest, DEFAULT_STORE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_config::use_api_config;
use crate::shared::components::ui::Input;
use crate::shared::components::OutputPanel;
use crate::shared::format::{answer_text, error_text};

/// Assemble the answer payload from trimmed field values.
fn build_request(question: &str, store: &str) -> Result<AnswerRequest, &'static str> {
    let question = question.trim();
    if question.is_empty() {
        return Err("Question is required.");
    }
    let store = store.trim();
    Ok(AnswerRequest {
        question: question.to_string(),
        store: if store.is_empty() {
            DEFAULT_STORE.to_string()
        } else {
            store.to_string()
        },
    })
}

#[component]
pub fn QuestionPanel() -> impl IntoView {
    let config = use_api_config();

    let (question, set_question) = signal(String::new());
    let (store, set_store) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    // Only the newest submit may write the output.
    let (req_seq, set_req_seq) = signal(0u64);

    let on_submit = move |_| {
        let request = match build_request(&question.get(), &store.get()) {
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
        set_output.set("Asking...".to_string());

        spawn_local(async move {
            let result = api::answer(&base, &request).await;
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
                    <h2 class="section-title">"Ask a question"</h2>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Asking..." } else { "Ask" }}
                    </Button>
                </Flex>

                <Input
                    label="Question"
                    value=question
                    on_input=Callback::new(move |v| set_question.set(v))
                    placeholder="What did I do today?"
                />
                <Input
                    label="Store"
                    value=store
                    on_input=Callback::new(move |v| set_store.set(v))
                    placeholder=DEFAULT_STORE
                />

                <OutputPanel text=output download_name="answer_response.json" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_question_is_rejected_before_any_network_call() {
        assert_eq!(build_request("", "").unwrap_err(), "Question is required.");
        assert_eq!(build_request(" \n", "x").unwrap_err(), "Question is required.");
    }

    #[test]
    fn default_store_payload_matches_the_contract() {
        let request = build_request("What did I do today?", "").unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"question":"What did I do today?","store":"data/memories.json"}"#
        );
    }

    #[test]
    fn explicit_store_is_kept() {
        let request = build_request("Where was I?", " data/trips.json ").unwrap();
        assert_eq!(request.store, "data/trips.json");
    }
}
