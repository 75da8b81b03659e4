use api::ProjectType;
use dioxus::prelude::*;

use ui::{AuthProvider, Footer};
use views::{
    Admin, Contact, Dashboard, Home, Login, Messages, Register, RequestForm, Success, Support,
};

mod navbar;
mod views;

use navbar::Navbar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
    #[route("/request")]
    RequestForm {},
    #[route("/contact")]
    Contact {},
    #[route("/messages")]
    Messages {},
    #[route("/support")]
    Support {},
    #[route("/success")]
    Success {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use std::time::Duration;

    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::services::ServeDir;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new((*pool).clone());
    session_store
        .migrate()
        .await
        .expect("Failed to set up session table");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

    // Build the Dioxus app with the uploaded-banner static route first,
    // then the application itself, with sessions on everything.
    let router = axum::Router::new()
        .nest_service("/uploads", ServeDir::new(&upload_dir))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    // Restore the persisted client state before the first paint, then keep
    // the document element in sync with it.
    let theme: ui::ThemeSignal = use_context_provider(|| Signal::new(ui::load_theme_from_storage()));
    let language: ui::LanguageSignal =
        use_context_provider(|| Signal::new(ui::load_language_from_storage()));

    // Service preselected on the home grid, consumed by the request form.
    use_context_provider(|| Signal::new(Option::<ProjectType>::None));

    use_effect(move || {
        ui::apply_theme(theme());
        ui::apply_language(language());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Common chrome around every view. Holds off rendering until the initial
/// session check has settled, like the rest of the app expects.
#[component]
fn Shell() -> Element {
    let auth = ui::use_auth();

    rsx! {
        div { class: "app-shell",
            if auth().loading {
                div { class: "app-loading", span { class: "btn-spinner" } }
            } else {
                Navbar {}
                main { class: "app-main", Outlet::<Route> {} }
                Footer {}
            }
        }
    }
}
