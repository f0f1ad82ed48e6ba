use std::{
    io::{self, Write},
    process,
    sync::Arc,
};

use gusweb::{
    application::{chrome::ChromeService, error::AppError, page::PageService, site},
    config,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tokio::sync::Notify;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let pages = PageService::new(ChromeService::new(settings.site.clone()))?;

    match command {
        config::Command::Serve(_) => run_serve(&settings, pages).await,
        config::Command::Render(args) => run_render(pages, args),
        config::Command::Build(_) => run_build(&settings, pages),
    }
}

fn run_render(pages: PageService, args: config::RenderArgs) -> Result<(), AppError> {
    let document = pages.render_required(&args.slug)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, document.as_bytes())
                .map_err(|err| AppError::from(InfraError::Io(err)))?;
            info!(
                target = "gusweb::render",
                slug = %args.slug,
                path = %path.display(),
                "Page written"
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|err| AppError::from(InfraError::Io(err)))?;
        }
    }

    Ok(())
}

fn run_build(settings: &config::Settings, pages: PageService) -> Result<(), AppError> {
    let out_dir = settings.build.out_dir.as_path();
    info!(
        target = "gusweb::build",
        out_dir = %out_dir.display(),
        "Starting build"
    );

    let report = site::build_site(&pages, out_dir)?;
    info!(
        target = "gusweb::build",
        pages = report.written.len(),
        "Build completed"
    );
    Ok(())
}

async fn run_serve(settings: &config::Settings, pages: PageService) -> Result<(), AppError> {
    let router = http::build_router(HttpState {
        pages: Arc::new(pages),
    });

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(
        target = "gusweb::serve",
        addr = %settings.server.addr,
        "Listening"
    );

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, router.into_make_service()).with_graceful_shutdown({
        let shutdown = shutdown.clone();
        async move { shutdown.notified().await }
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut handle => return finish_server(joined),
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                info!(target = "gusweb::serve", "Shutdown requested");
                shutdown.notify_one();
            }
            Err(err) => {
                warn!(target = "gusweb::serve", error = %err, "failed to listen for ctrl-c");
                return finish_server(handle.await);
            }
        },
    }

    match tokio::time::timeout(settings.server.graceful_shutdown, &mut handle).await {
        Ok(joined) => finish_server(joined),
        Err(_) => {
            warn!(
                target = "gusweb::serve",
                timeout_secs = settings.server.graceful_shutdown.as_secs(),
                "Graceful shutdown timed out; aborting open connections"
            );
            handle.abort();
            Ok(())
        }
    }
}

fn finish_server(
    joined: Result<Result<(), io::Error>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match joined {
        Ok(result) => result.map_err(|err| AppError::unexpected(format!("server error: {err}"))),
        Err(err) => Err(AppError::unexpected(format!("server task failed: {err}"))),
    }
}
