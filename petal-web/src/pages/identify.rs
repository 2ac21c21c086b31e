use crate::api::{self, ApiClient, ApiError};
use crate::Route;
use dioxus::prelude::*;
use petal_ui::stores::{IdentificationOutcome, IdentifyState, IdentifyStateStoreExt};
use petal_ui::{ErrorDisplay, ImageUploadView, PageContainer};

// -- Preview blob helpers --

fn create_preview_url(data: &[u8], mime_type: &str) -> Result<String, String> {
    let uint8_array = js_sys::Uint8Array::from(data);
    let array = js_sys::Array::new();
    array.push(&uint8_array);

    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &opts)
        .map_err(|e| format!("Failed to create blob: {e:?}"))?;

    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create blob URL: {e:?}"))
}

fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 503, .. } => {
            "The identification service is starting up. Try again in a moment.".to_string()
        }
        ApiError::Status { status: 413, .. } => {
            "That photo is too large. Try a smaller image.".to_string()
        }
        _ => "Could not identify the flower. Please try again.".to_string(),
    }
}

#[component]
pub fn Identify() -> Element {
    let api: ApiClient = use_context();
    let outcome: Signal<Option<IdentificationOutcome>> = use_context();
    let state = use_store(IdentifyState::default);

    let on_file = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        if *state.loading().peek() {
            return;
        }
        let api = api.clone();
        let mut outcome = outcome;
        spawn(async move {
            state.loading().set(true);
            state.error().set(None);

            let filename = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::error!("failed to read uploaded file: {e:?}");
                    state.loading().set(false);
                    state
                        .error()
                        .set(Some("Could not read the selected file.".to_string()));
                    return;
                }
            };

            let preview = create_preview_url(&bytes, api::mime_for_filename(&filename)).ok();

            match api.identify(bytes, &filename).await {
                Ok(flower) => {
                    // Release the previous preview before replacing the outcome
                    if let Some(prev) = outcome.peek().as_ref() {
                        if let Some(url) = &prev.uploaded_image_url {
                            revoke_preview_url(url);
                        }
                    }
                    outcome.set(Some(IdentificationOutcome {
                        flower,
                        uploaded_image_url: preview,
                    }));
                    state.loading().set(false);
                    navigator().push(Route::FlowerResult {});
                }
                Err(e) => {
                    tracing::error!("identification failed: {e}");
                    if let Some(url) = preview {
                        revoke_preview_url(&url);
                    }
                    state.loading().set(false);
                    state.error().set(Some(error_message(&e)));
                }
            }
        });
    };

    rsx! {
        PageContainer {
            div { class: "max-w-xl mx-auto",
                div { class: "text-center mb-8",
                    h1 { class: "font-serif text-3xl md:text-4xl font-bold text-foreground mb-3",
                        "Identify a Flower"
                    }
                    p { class: "text-muted-foreground",
                        "Upload a clear photo of a single bloom for the best match."
                    }
                }

                ImageUploadView { loading: state.loading()(), on_file }

                if let Some(message) = state.error()() {
                    div { class: "mt-6", ErrorDisplay { message } }
                }

                div { class: "mt-10 bg-card rounded-2xl shadow-soft p-6",
                    h3 { class: "font-serif text-lg font-semibold text-foreground mb-3",
                        "Tips for a good photo"
                    }
                    ul { class: "space-y-2 text-sm text-muted-foreground list-disc list-inside",
                        li { "Fill the frame with one flower head." }
                        li { "Use daylight and avoid harsh shadows." }
                        li { "Keep leaves or stems visible when you can." }
                    }
                }
            }
        }
    }
}
