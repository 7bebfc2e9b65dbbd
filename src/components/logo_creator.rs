use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::backend::{FetchBackend, LogoBackend};
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::config::ClientConfig;
use crate::controller::{LogoController, ViewState};
use crate::download::{now_ms, save_in_browser};
use crate::error::LogoError;
use crate::server_fn::get_client_config;
use crate::types::GeneratedLogo;

// owned snapshot of the panel below the form
enum Panel {
    Empty,
    Loading,
    Result(GeneratedLogo),
}

/// Asks the server where the backend lives once, then reuses the answer.
async fn backend_for(
    cached: StoredValue<Option<ClientConfig>>,
) -> Result<FetchBackend, LogoError> {
    if let Some(config) = cached.get_value() {
        return Ok(FetchBackend::new(&config));
    }

    let config = get_client_config()
        .await
        .map_err(|e| LogoError::transport(e.to_string()))?;
    cached.set_value(Some(config.clone()));
    Ok(FetchBackend::new(&config))
}

#[component]
pub fn LogoCreator() -> impl IntoView {
    let controller = RwSignal::new(LogoController::new());
    let client_config = StoredValue::new(None::<ClientConfig>);

    let is_submitting = Signal::derive(move || controller.with(|c| c.is_submitting()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(pending) = controller.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = match backend_for(client_config).await {
                Ok(backend) => backend.generate(&pending.request).await,
                Err(error) => Err(error),
            };
            controller.update(|c| {
                c.finish(pending.ticket, outcome);
            });
        });
    };

    let on_download = move |_: web_sys::MouseEvent| {
        let Some(download) = controller.with_untracked(|c| c.download(now_ms())) else {
            return;
        };
        if let Err(e) = save_in_browser(&download) {
            log::error!("Failed to save {}: {e:?}", download.filename);
        }
    };

    let error_message = move || {
        controller.with(|c| match c.view_state() {
            ViewState::Form { error: Some(error) } => Some(error.to_string()),
            _ => None,
        })
    };

    let panel = move || {
        controller.with(|c| match c.view_state() {
            ViewState::Form { .. } => Panel::Empty,
            ViewState::Loading => Panel::Loading,
            ViewState::Result { logo } => Panel::Result(logo.clone()),
        })
    };

    view! {
        <div class="max-w-3xl mx-auto bg-white/10 backdrop-blur-sm rounded-xl p-8 shadow-xl">
            <form on:submit=on_submit class="mb-8">
                <div class="mb-6">
                    <label for="prompt" class="block text-lg font-medium mb-2">
                        "Describe your logo"
                    </label>
                    <textarea
                        id="prompt"
                        rows="4"
                        placeholder="Describe your logo in detail (e.g., 'A modern tech company logo with blue and green elements')"
                        class="w-full px-4 py-3 rounded-lg bg-white/20 backdrop-blur-sm border border-blue-300/30 text-white placeholder-blue-200/60 focus:outline-none focus:ring-2 focus:ring-blue-400"
                        prop:value=move || controller.with(|c| c.prompt().to_string())
                        on:input=move |ev| {
                            controller.update(|c| c.update_prompt(event_target_value(&ev)));
                        }
                    ></textarea>
                    {move || {
                        error_message()
                            .map(|message| view! { <p class="mt-2 text-red-300">{message}</p> })
                    }}
                </div>
                <Button
                    button_type="submit"
                    size=ButtonSize::Large
                    full_width=true
                    disabled=is_submitting
                >
                    {move || if is_submitting.get() { "Generating..." } else { "Generate Logo" }}
                </Button>
            </form>

            {move || match panel() {
                Panel::Empty => ().into_any(),
                Panel::Loading => {
                    view! {
                        <div class="text-center my-12">
                            <div class="inline-block animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-300"></div>
                            <p class="mt-4 text-blue-200">"Creating your custom logo..."</p>
                        </div>
                    }
                        .into_any()
                }
                Panel::Result(logo) => {
                    let src = logo.data_url();
                    view! {
                        <div class="mt-8 flex flex-col items-center">
                            <h2 class="text-2xl font-semibold mb-6">"Your Generated Logo"</h2>
                            <div class="w-full max-w-md bg-white/20 backdrop-blur-sm p-4 rounded-lg shadow-lg mb-6">
                                <img src=src alt="Generated logo" class="w-full h-auto rounded" />
                                {logo
                                    .filename()
                                    .map(str::to_string)
                                    .map(|name| {
                                        view! { <p class="mt-2 text-sm text-blue-200 text-center">{name}</p> }
                                    })}
                            </div>
                            <Button
                                variant=ButtonVariant::Success
                                size=ButtonSize::Large
                                on_click=Callback::new(on_download)
                            >
                                "Download Logo"
                            </Button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
