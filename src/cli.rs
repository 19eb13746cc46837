use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movie-lookup")]
#[command(about = "映画詳細の表示とお気に入り管理 (OMDb)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 映画の詳細を表示
    Show {
        /// IMDb ID (例: tt0111161)
        #[arg(required = true)]
        imdb_id: String,

        /// 表示後にお気に入りを切り替える
        #[arg(short = 'f', long)]
        toggle_favorite: bool,
    },

    /// お気に入り一覧を表示・編集
    Favorites {
        /// 指定したIMDb IDをお気に入りから削除
        #[arg(long)]
        remove: Option<String>,

        /// お気に入りをすべて削除
        #[arg(long)]
        clear: bool,
    },

    /// 設定
    Config {
        /// OMDb APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["movie-lookup", "show", "tt0111161", "--toggle-favorite"]).unwrap();
        match cli.command {
            Commands::Show { imdb_id, toggle_favorite } => {
                assert_eq!(imdb_id, "tt0111161");
                assert!(toggle_favorite);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_favorites_remove() {
        let cli = Cli::try_parse_from(["movie-lookup", "-v", "favorites", "--remove", "tt1"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Favorites { remove: Some(ref id), clear: false } if id == "tt1"
        ));
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["movie-lookup", "show"]).is_err());
    }
}
