use std::sync::Arc;

use clap::Parser;

use classboard::app_context::AppContext;
use classboard::args::ClassboardArgs;
use classboard::config_loader;
use classboard::web_server;

fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = ClassboardArgs::parse();
    let mut config = config_loader::load_config(&args.config);
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let ctx = Arc::new(AppContext::new(config));
    web_server::run_actix_server(ctx)
}
