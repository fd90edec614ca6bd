use crate::shared::api_config::{ApiConfig, ApiConfigPanel};
use crate::usecases::graph::GraphPanel;
use crate::usecases::ingest::IngestPanel;
use crate::usecases::question::QuestionPanel;
use crate::usecases::session::SessionPanel;
use crate::usecases::timeline::TimelinePanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One ApiConfig for the whole app; panels hand its base to the
    // dispatcher explicitly instead of reading storage per call.
    provide_context(ApiConfig::new());

    view! {
        <main class="page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Mnemosyne Console"</h1>
                    <p class="page__subtitle">"Personal memory service, one form per operation"</p>
                </div>
                <ApiConfigPanel />
            </header>
            <div class="panel-grid">
                <IngestPanel />
                <QuestionPanel />
                <SessionPanel />
                <GraphPanel />
                <TimelinePanel />
            </div>
        </main>
    }
}
