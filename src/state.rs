use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::extract::FromRef;
        use leptos::prelude::LeptosOptions;

        use crate::config::ClientConfig;

        #[derive(FromRef, Clone)]
        pub struct AppState {
            pub leptos_options: LeptosOptions,
            pub client_config: ClientConfig,
        }

        impl AppState {
            pub fn new(leptos_options: LeptosOptions) -> Self {
                Self {
                    leptos_options,
                    client_config: ClientConfig::from_env_or_build(),
                }
            }
        }
    }
}
