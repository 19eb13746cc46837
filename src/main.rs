use anyhow::Context;
use clap::Parser;
use movie_lookup::{api, cli, config, controller, error, render, storage};
use movie_lookup_common::{DetailView, Toggled};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Show { imdb_id, toggle_favorite } => {
            let imdb_id = imdb_id.trim().to_string();
            if imdb_id.is_empty() {
                return Err(error::MovieLookupError::InvalidImdbId(imdb_id).into());
            }

            let client = api::OmdbClient::from_config(&config)?;
            let mut favorites = storage::open_favorites(&config.favorites_dir()?, config.corruption_policy)?;
            let controller = controller::DetailController::new(client);

            println!("{}", render::render(&DetailView::Loading));
            controller.load(&imdb_id).await;
            let state = controller.state().await;
            println!("{}", render::render(&DetailView::from_state(&state, &favorites)));

            if toggle_favorite {
                match state.movie() {
                    Some(movie) => {
                        match favorites.toggle(movie).context("お気に入りの保存に失敗しました")? {
                            Toggled::Added => println!("\n✔ お気に入りに追加しました"),
                            Toggled::Removed => println!("\n✔ お気に入りから削除しました"),
                        }
                        println!("{}", render::render(&DetailView::from_state(&state, &favorites)));
                    }
                    None => println!("\n映画が読み込まれていないため、お気に入りを変更できません"),
                }
            }
        }

        Commands::Favorites { remove, clear } => {
            let dir = config.favorites_dir()?;
            let mut favorites = storage::open_favorites(&dir, config.corruption_policy)?;

            if clear {
                favorites.clear()?;
                println!("✔ お気に入りをすべて削除しました");
            } else if let Some(id) = remove {
                if favorites.remove(&id)? {
                    println!("✔ お気に入りから削除しました: {}", id);
                } else {
                    println!("お気に入りに登録されていません: {}", id);
                }
            }

            println!("お気に入り ({}件):", favorites.len());
            println!("{}", render::render_favorites(favorites.items()));
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIエンドポイント: {}", config.api_base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  お気に入り保存先: {}", config.favorites_dir()?.display());
                println!("  破損データの扱い: {:?}", config.corruption_policy);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
