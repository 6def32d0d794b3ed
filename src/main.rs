#[macro_use]
extern crate derive_more;

use ggez::{
    conf::{WindowMode, WindowSetup},
    event::run,
    ContextBuilder,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    app::App,
    config::Config,
    error::{AppError, AppErrorConversion, AppResult},
};

mod app;
mod basic;
mod config;
mod error;
mod rendering;
mod stream;

fn main() -> AppResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::DEFAULT;
    config
        .validate()
        .map_err(AppError::from)
        .with_trace_step("validating configuration")?;

    let (width, height) = config.window_size();
    let wm = WindowMode {
        width,
        height,
        resizable: false,
        ..WindowMode::default()
    };

    let ws = WindowSetup {
        title: "Rx Snake".to_string(),
        vsync: true,
        ..WindowSetup::default()
    };

    let (ctx, event_loop) = ContextBuilder::new("rx_snake", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(AppError::from)
        .with_trace_step("creating window")?;

    let app = App::new(config);
    info!("entering event loop");
    run(ctx, event_loop, app)
}
