use api_client::{ApiClient, ApiConfig};
use dioxus::prelude::*;

mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Hook to access the API client provided at the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(ApiConfig::default()));
    use_context_provider(SessionState::restore);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
