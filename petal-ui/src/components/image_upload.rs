//! Image upload widget - pure view with callbacks
//!
//! Renders a dropzone-styled file input. File reading happens in the
//! parent (it needs the async file engine), this component only forwards
//! the change event.

use crate::components::icons::{LoaderIcon, UploadIcon};
use dioxus::prelude::*;

#[component]
pub fn ImageUploadView(loading: bool, on_file: EventHandler<FormEvent>) -> Element {
    rsx! {
        label {
            class: if loading {
                "block border-2 border-dashed border-border rounded-2xl p-12 text-center cursor-wait bg-muted/50"
            } else {
                "block border-2 border-dashed border-border rounded-2xl p-12 text-center cursor-pointer hover:border-primary/60 hover:bg-primary/5 transition-colors"
            },
            input {
                r#type: "file",
                accept: "image/*",
                class: "hidden",
                disabled: loading,
                onchange: move |evt| on_file.call(evt),
            }
            if loading {
                LoaderIcon { class: "w-12 h-12 text-primary mx-auto mb-4 animate-spin" }
                p { class: "text-foreground font-medium mb-1", "Identifying your flower..." }
                p { class: "text-sm text-muted-foreground",
                    "This can take a moment while the species database wakes up."
                }
            } else {
                UploadIcon { class: "w-12 h-12 text-primary mx-auto mb-4" }
                p { class: "text-foreground font-medium mb-1", "Upload a flower photo" }
                p { class: "text-sm text-muted-foreground",
                    "Click to choose an image. JPEG or PNG works best."
                }
            }
        }
    }
}
