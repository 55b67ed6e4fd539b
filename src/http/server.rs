use std::sync::Arc;

use axum::{routing, Router, Server};
use hyper::Result;
use tokio::task;

use crate::clock::Feed;
use crate::config::Config;
use crate::domain::list_countries;
use crate::repository::country::HttpSource;
use crate::repository::session::InMemoryRepository;
use crate::repository::worldtime::HttpTimeSource;

use super::routes;
use super::AppState;

pub async fn serve(config: Config) -> Result<()> {
    let repo = Arc::new(InMemoryRepository::new());
    let countries = Arc::new(HttpSource::new(config.countries_api_url.clone()));
    let worldtime = Arc::new(HttpTimeSource::new(config.world_time_api_url.clone()));

    let feed = Arc::new(Feed::new());
    let clock = feed.subscribe();

    log::info!("Fetching the country directory to fill up the world clock feed");
    let directory = list_countries::execute(countries.clone()).await;
    feed.load(directory.data, config.clock_limit).await;

    // Initialize the feed thread.
    let feed_task = feed.clone();
    task::spawn(async move {
        log::info!("World clock feed is running");
        feed_task.start().await;
    });

    let state = Arc::new(AppState {
        repo,
        countries,
        worldtime,
        clock,
    });

    let app = Router::new()
        .route("/api/countries", routing::get(routes::list_countries))
        .route(
            "/api/countries/search",
            routing::get(routes::search_countries),
        )
        .route("/api/timezones", routing::get(routes::list_timezones))
        .route("/api/time", routing::get(routes::current_time))
        .route("/api/clocks", routing::get(routes::world_clocks))
        .route(
            "/api/appointment",
            routing::get(routes::find_appointment).patch(routes::update_draft),
        )
        .route(
            "/api/appointment/participants",
            routing::post(routes::add_participant),
        )
        .route(
            "/api/appointment/participants/:id",
            routing::delete(routes::remove_participant),
        )
        .route(
            "/api/appointment/submit",
            routing::post(routes::submit_appointment),
        );

    log::info!("Listening on port {}", config.port);

    Server::bind(&format!("0.0.0.0:{}", config.port).parse().unwrap())
        .serve(app.with_state(state).into_make_service())
        .await
}
