use crate::config::BannerConfig;
use leptos::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional)] config: BannerConfig,
) -> impl IntoView {
    let message_text = Signal::derive(move || message.get());
    let BannerConfig {
        wrapper_id,
        close_button_id,
        close_icon_id,
        ..
    } = config;

    view! {
        <Show when=move || !message_text.get().trim().is_empty() fallback=|| ()>
            <div id=wrapper_id.clone() class="error-wrapper" role="alert">
                <div class="error-modal">
                    <span id=close_icon_id.clone() class="error-close">{"×"}</span>
                    <p class="error-message">{move || message_text.get()}</p>
                    <button id=close_button_id.clone() type="button" class="error-close-btn">
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
