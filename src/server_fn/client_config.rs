use leptos::prelude::*;

use crate::config::ClientConfig;

/// Backend location as the running server sees it, so the bundle does not
/// need to be rebuilt when `.env` changes.
#[server(GetClientConfig, "/api")]
pub async fn get_client_config() -> Result<ClientConfig, ServerFnError> {
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("app state not provided"))?;
    Ok(state.client_config)
}
