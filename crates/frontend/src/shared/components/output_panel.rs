use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Response area shared by the form panels: monospace text with
/// copy-to-clipboard and download actions.
#[component]
pub fn OutputPanel(
    /// Reactive output text
    #[prop(into)]
    text: Signal<String>,
    /// File name used by the download action
    #[prop(optional, into)]
    download_name: MaybeProp<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        let content = text.get_untracked();
        if content.is_empty() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        spawn_local(async move {
            let promise = clipboard.write_text(&content);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
        set_copied.set(true);

        // Reset after 2 seconds
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| {
        let content = text.get_untracked();
        if content.is_empty() {
            return;
        }
        let name = download_name
            .get()
            .unwrap_or_else(|| "response.json".to_string());
        download_text(&content, &name);
    };

    view! {
        <div class="output-panel">
            <div class="output-panel__actions">
                <button class="output-panel__action" on:click=handle_copy>
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
                <button class="output-panel__action" on:click=handle_download>
                    "Download"
                </button>
            </div>
            <pre class="output-panel__text code-box">{move || text.get()}</pre>
        </div>
    }
}

/// Offer `content` as a file download through a temporary object URL.
fn download_text(content: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type("application/json");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
    else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(a) = document.create_element("a") {
        if let Ok(link) = a.dyn_into::<web_sys::HtmlAnchorElement>() {
            link.set_href(&url);
            link.set_download(file_name);
            link.click();
            web_sys::Url::revoke_object_url(&url).ok();
        }
    }
}
