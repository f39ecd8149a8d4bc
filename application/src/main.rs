use std::{
    future::IntoFuture as _,
    io,
    sync::{Arc, OnceLock},
    time,
};

use application::{api, config, graphql, Args, Config};
use axum::{
    extract::MatchedPath,
    routing::{on, MethodFilter},
    Extension, Router,
};
use axum_client_ip::InsecureClientIp;
use futures::{future, TryFutureExt as _};
use service::{infra::Memory, Service};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

/// Levels written to stderr rather than stdout.
const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

/// Configured maximum [`log::Level`], set once the [`Config`] is loaded.
static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    init_logging();

    _ = start().await;
}

/// Installs the global [`tracing`] subscriber.
///
/// Until the [`Config`] is loaded, events up to [`log::Level::INFO`] pass.
fn init_logging() {
    let enabled = |meta: &log::Metadata<'_>, stderr: bool| {
        meta.is_span()
            || (STDERR_LEVELS.contains(meta.level()) == stderr
                && LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                    >= *meta.level())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(move |meta| enabled(meta, false))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(move |meta| enabled(meta, true))),
        )
        .init();
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        server,
        service,
        content,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let memory = Memory::load(&content.path).await.map_err(|e| {
        log::error!("failed to load content from `{}`: {e}", content.path);
    })?;
    log::info!("loaded content from `{}`", content.path);

    let (service, background) = Service::new(service.into(), memory);

    let app = router(service, cors(&server.cors)?);

    let listener = TcpListener::bind((server.host.clone(), server.port))
        .await
        .map_err(|e| {
            log::error!(
                "failed to listen on `{}:{}`: {e}",
                server.host,
                server.port,
            );
        })?;

    log::info!("listening on `{}:{}`", server.host, server.port);

    future::try_join(
        axum::serve(listener, app)
            .into_future()
            .map_err(|e| log::error!("webserver failed: {e}")),
        background.into_future().map_err(|e| {
            log::error!("background task failed: {e}");
        }),
    )
    .await
    .map(drop)
}

/// Builds the [`CorsLayer`] allowing the configured origins.
fn cors(config: &config::Cors) -> Result<CorsLayer, ()> {
    config.origins.iter().try_fold(
        CorsLayer::new()
            .allow_methods([
                http::Method::GET,
                http::Method::OPTIONS,
                http::Method::POST,
            ])
            .allow_headers([http::header::CONTENT_TYPE]),
        |cors, origin| {
            origin
                .parse::<http::header::HeaderValue>()
                .map(|o| cors.allow_origin(o))
                .map_err(|e| {
                    log::error!("`{origin}` is not correct CORS origin: {e}");
                })
        },
    )
}

/// Builds the [`Router`] serving the GraphQL API over the provided
/// [`Service`].
fn router(service: application::Service, cors: CorsLayer) -> Router {
    let schema = api::Schema::new(
        api::Query,
        juniper::EmptyMutation::new(),
        juniper::EmptySubscription::new(),
    );

    Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .layer(Extension(Arc::new(schema)))
        .layer(Extension(service))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|r: &http::Request<_>| {
                    log::info_span!(
                        "HTTP request",
                        http.client_ip = InsecureClientIp::from(
                            r.headers(),
                            r.extensions()
                        )
                            .map(|ip| ip.0.to_string())
                            .ok(),
                        http.method = r.method().as_str(),
                        http.route = r
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str),
                        http.target = r
                            .uri()
                            .path_and_query()
                            .map(http::uri::PathAndQuery::as_str),
                        http.user_agent = r
                            .headers()
                            .get(http::header::USER_AGENT)
                            .and_then(|h| h.to_str().ok()),
                        http.status_code = log::field::Empty,
                    )
                })
                .on_response(
                    |r: &http::Response<_>,
                     dur: time::Duration,
                     span: &log::Span| {
                        _ = span.record(
                            "http.status_code",
                            log::field::display(r.status().as_u16()),
                        );

                        let duration = format!("{}ms", dur.as_millis());
                        if r.status().is_server_error()
                            || r.status().is_client_error()
                        {
                            log::error!(%duration);
                        } else {
                            log::info!(%duration);
                        }
                    },
                ),
        )
}
