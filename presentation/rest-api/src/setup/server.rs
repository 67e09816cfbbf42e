use std::time::Duration;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Serves the API until Ctrl-C, then shuts down the saved-recipe
    /// container so its last state reaches storage.
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let saved_recipes = container.saved_recipes.clone();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.recipe_api,
                container.saved_recipe_api,
                container.search_api,
                container.meal_plan_api,
                container.preferences_api,
            ),
            "Meal Planner API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);

        let served = PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("Shutdown requested");
                },
                Some(SHUTDOWN_GRACE),
            )
            .await;

        saved_recipes.shutdown().await;
        served?;
        Ok(())
    }
}
