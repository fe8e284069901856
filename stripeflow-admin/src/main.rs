// src/main.rs
use std::sync::Arc;

use stripeflow_admin::api::notify::{ConsoleNotifier, RouteState};
use stripeflow_admin::api::Route;
use stripeflow_admin::cli::{self, Command, ViewOptions, USAGE};
use stripeflow_admin::config::{AppConfig, AuthScheme};
use stripeflow_admin::logging::init_tracing;
use stripeflow_admin::pages::PageContext;
use stripeflow_admin::runtime::AutoRefresh;
use stripeflow_admin::session::{Credential, FileCredentialStore, Session};
use stripeflow_admin::ApiClient;

// 画面クリア（ANSI）
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            eprintln!("\n{}", USAGE);
            std::process::exit(2);
        }
    };

    // 設定を読み込む
    let config = AppConfig::from_env()?;
    tracing::debug!(environment = %config.environment, api = %config.api.base_url, "Configuration loaded");

    let store = Arc::new(FileCredentialStore::new(config.credential_file.clone()));
    let session = Session::restore(store)?;

    match command {
        Command::Help => println!("{}", USAGE),
        Command::Login { token, api_key } => {
            let scheme = if api_key {
                AuthScheme::ApiKey
            } else {
                config.auth_scheme
            };
            session.login(Credential::new(scheme, token))?;
            println!("Credential saved to {}", config.credential_file.display());
        }
        Command::Logout => {
            session.logout()?;
            println!("Logged out");
        }
        Command::View(options) => {
            let navigator = Arc::new(RouteState::new(options.route));
            let client = Arc::new(ApiClient::new(
                &config,
                session,
                Arc::new(ConsoleNotifier),
                navigator.clone(),
            )?);
            let context = PageContext::new(client, &config);

            if options.watch {
                watch(context, options, &config).await?;
            } else {
                println!("{}", cli::render_view(&context, &options).await);
            }

            if navigator.current() == Route::Login {
                eprintln!("Session expired. Run `stripeflow-admin login <token>` to sign in again.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Ctrl+C まで一定間隔で再描画する
async fn watch(
    context: PageContext,
    options: ViewOptions,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let refresh = AutoRefresh::spawn("cli", config.refresh.interval, move || {
        let context = context.clone();
        let options = options.clone();
        async move {
            // 自動更新では常に最新を取得する
            context.cache.clear().await;
            let output = cli::render_view(&context, &options).await;
            println!("{}{}", CLEAR_SCREEN, output);
        }
    });

    tokio::signal::ctrl_c().await?;
    refresh.teardown().await;
    Ok(())
}
