//! Taxi Fleet Registry API - Main Entry Point

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taxi_fleet_registry::application::use_cases::auth::LoginDriverUseCase;
use taxi_fleet_registry::application::use_cases::cars::{
    CreateCarUseCase, GetCarByIdUseCase, ListCarsUseCase, ToggleCarAssignmentUseCase,
    UpdateCarUseCase,
};
use taxi_fleet_registry::application::use_cases::dashboard::GetDashboardSummaryUseCase;
use taxi_fleet_registry::application::use_cases::drivers::{
    CreateDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase, UpdateDriverLicenseUseCase,
};
use taxi_fleet_registry::application::use_cases::manufacturers::{
    CreateManufacturerUseCase, ListManufacturersUseCase, UpdateManufacturerUseCase,
};
use taxi_fleet_registry::infrastructure::driven_adapters::car_repository::PostgresCarRepository;
use taxi_fleet_registry::infrastructure::driven_adapters::config::AppConfig;
use taxi_fleet_registry::infrastructure::driven_adapters::database::create_pool;
use taxi_fleet_registry::infrastructure::driven_adapters::driver_repository::PostgresDriverRepository;
use taxi_fleet_registry::infrastructure::driven_adapters::manufacturer_repository::PostgresManufacturerRepository;
use taxi_fleet_registry::infrastructure::driven_adapters::session_store::SessionManager;
use taxi_fleet_registry::infrastructure::driving_adapters::api_rest::handlers::{
    auth, cars, dashboard, drivers, manufacturers,
};
use taxi_fleet_registry::infrastructure::driving_adapters::api_rest::middleware::request_id::request_id_middleware;
use taxi_fleet_registry::infrastructure::driving_adapters::api_rest::middleware::session::add_session_extension;
use taxi_fleet_registry::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxi_fleet_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let manufacturer_repository = Arc::new(PostgresManufacturerRepository::new(pool.clone()));
    let driver_repository = Arc::new(PostgresDriverRepository::new(pool.clone()));
    let car_repository = Arc::new(PostgresCarRepository::new(pool));

    // Create use cases
    let login_driver_use_case = Arc::new(LoginDriverUseCase::new(driver_repository.clone()));
    let get_dashboard_summary_use_case = Arc::new(GetDashboardSummaryUseCase::new(
        driver_repository.clone(),
        car_repository.clone(),
        manufacturer_repository.clone(),
    ));
    let list_manufacturers_use_case =
        Arc::new(ListManufacturersUseCase::new(manufacturer_repository.clone()));
    let create_manufacturer_use_case =
        Arc::new(CreateManufacturerUseCase::new(manufacturer_repository.clone()));
    let update_manufacturer_use_case =
        Arc::new(UpdateManufacturerUseCase::new(manufacturer_repository.clone()));
    let list_cars_use_case = Arc::new(ListCarsUseCase::new(car_repository.clone()));
    let get_car_by_id_use_case = Arc::new(GetCarByIdUseCase::new(
        car_repository.clone(),
        manufacturer_repository.clone(),
        driver_repository.clone(),
    ));
    let create_car_use_case = Arc::new(CreateCarUseCase::new(
        car_repository.clone(),
        manufacturer_repository.clone(),
        driver_repository.clone(),
    ));
    let update_car_use_case = Arc::new(UpdateCarUseCase::new(
        car_repository.clone(),
        manufacturer_repository.clone(),
        driver_repository.clone(),
    ));
    let toggle_car_assignment_use_case = Arc::new(ToggleCarAssignmentUseCase::new(
        car_repository.clone(),
        driver_repository.clone(),
    ));
    let list_drivers_use_case = Arc::new(ListDriversUseCase::new(driver_repository.clone()));
    let get_driver_by_id_use_case = Arc::new(GetDriverByIdUseCase::new(driver_repository.clone()));
    let create_driver_use_case = Arc::new(CreateDriverUseCase::new(driver_repository.clone()));
    let update_driver_license_use_case =
        Arc::new(UpdateDriverLicenseUseCase::new(driver_repository));

    // Create the session store
    let sessions = Arc::new(SessionManager::new(&config.session));

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        sessions,
        login_driver_use_case,
        get_dashboard_summary_use_case,
        list_manufacturers_use_case,
        create_manufacturer_use_case,
        update_manufacturer_use_case,
        list_cars_use_case,
        get_car_by_id_use_case,
        create_car_use_case,
        update_car_use_case,
        toggle_car_assignment_use_case,
        list_drivers_use_case,
        get_driver_by_id_use_case,
        create_driver_use_case,
        update_driver_license_use_case,
    };

    // Build router
    let app = Router::new()
        .merge(dashboard::router())
        .nest("/accounts", auth::router())
        .nest("/manufacturers", manufacturers::router())
        .nest("/cars", cars::router())
        .nest("/drivers", drivers::router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            add_session_extension,
        ))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
