use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};
mod config;
mod error;
mod events;
mod services;
mod utils;

use config::Config;
use events::HostItem;
use services::{create_window_backend, host, Switcher};

#[derive(Parser, Debug)]
#[command(name = "wmswitch")]
#[command(about = "Список открытых окон через wmctrl с фильтрацией и активацией")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "wmswitch.toml")]
    config: String,

    /// Режим сухого запуска (фиктивные окна, без wmctrl/ps)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (по умолчанию из конфигурации)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Показать видимые окна, отфильтрованные по подстроке
    List {
        /// Подстрока для имени процесса или заголовка (регистр учитывается)
        query: Option<String>,

        /// Выводить по одному JSON-объекту на строку
        #[arg(long)]
        json: bool,
    },
    /// Активировать окно по идентификатору из списка
    Activate {
        /// Идентификатор окна, например 0x0200000b
        id: String,
    },
    /// Обслуживать запросы лаунчера: JSON-строки на stdin, ответы на stdout
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Arc::new(Config::load(&args.config)?);

    // Инициализация системы логирования
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, &config.logging.format)?;

    info!("Запуск wmswitch v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    let backend = create_window_backend(config.clone(), args.dry_run);
    let switcher = Switcher::new(backend).with_lookup_budget(config.tools.timeout());

    match args.command {
        Command::List { query, json } => {
            let items = switcher.handle_query(query.as_deref()).await;
            for (index, item) in items.iter().enumerate() {
                if json {
                    println!("{}", serde_json::to_string(&HostItem::new(index, item))?);
                } else {
                    println!("{}\t{}\t{}", item.window.id, item.name, item.description);
                }
            }
        }
        Command::Activate { id } => {
            switcher.activate(&id).await?;
        }
        Command::Serve => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            host::serve(&switcher, stdin, tokio::io::stdout()).await?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят результатами и протоколом хоста
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}
