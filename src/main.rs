//! LOUIE Autonomy CLI Entry Point

use clap::{CommandFactory, Parser};
use louiectl::cli::{self, Cli, Mode};
use louiectl::client::AdminClient;
use louiectl::config::Config;
use louiectl::registry::EndpointRegistry;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging();

    // モード未指定はヘルプ表示のみ
    let Some(mode) = cli.mode() else {
        let _ = Cli::command().print_help();
        return;
    };

    let config = Config::new(&cli.base_url, &cli.token);
    let registry = EndpointRegistry::new();
    let client = match AdminClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match mode {
        Mode::Check => match cli::check::execute(&client, &registry).await {
            // 劣化検出時のみ終了コード1を返す
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
        Mode::Status => cli::status::execute(&client, &registry).await,
        Mode::Monitor => cli::monitor::execute(&client, &registry, cli.interval).await,
        Mode::Chaos(secs) => cli::chaos::execute(&client, &registry, secs).await,
        Mode::Load(count) => cli::load::execute(&client, &registry, count).await.map(|_| ()),
        Mode::Kill(module) => cli::killswitch::execute(&client, &module, false).await,
        Mode::Enable(module) => cli::killswitch::execute(&client, &module, true).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();
}
