use leptos::{html, prelude::*};

use crate::content::PROFILE;

/// A finished image with no pixels failed to load.
fn load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Profile photo, falling back to initials if the image can't load.
#[component]
pub fn Avatar() -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let (failed, set_failed) = signal(false);

    // the load may have failed before hydration attached on:error
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if load_failed(img.complete(), img.natural_width()) {
                set_failed.set(true);
            }
        }
    });

    view! {
        <div class="relative flex w-32 h-32 mx-auto mb-4 overflow-hidden rounded-full border-4 border-primary transition-transform duration-200 hover:scale-110 active:scale-90">
            <Show
                when=move || !failed.get()
                fallback=|| {
                    view! {
                        <span class="flex h-full w-full items-center justify-center rounded-full bg-secondary text-3xl font-bold">
                            {PROFILE.initials}
                        </span>
                    }
                }
            >
                <img
                    node_ref=img_ref
                    class="aspect-square h-full w-full"
                    src=PROFILE.avatar_url
                    alt=PROFILE.name
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </div>
    }
}
