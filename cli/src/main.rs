use clap::{Parser, Subcommand};
use pokedex_cli::logging::init_logging;
use pokedex_cli::state::AppState;
use pokedex_cli::{commands, quiz, readline};
use pokedex_types::{Language, Theme};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = init_logging();
    let state = Arc::new(RwLock::new(AppState::new()));

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, Arc::clone(&state)).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "pokedex")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the roster, optionally filtered
    List {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short, long)]
        favorites: bool,
    },
    Show {
        id: u32,
    },
    Fav {
        id: u32,
    },
    Caught {
        id: u32,
    },
    Type {
        name: String,
    },
    /// Start or resume the silhouette quiz
    Quiz {
        #[arg(long)]
        quit: bool,
    },
    Answer {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        choice: u8,
    },
    Next,
    AutoNext {
        #[arg(value_parser = parse_switch, action = clap::ArgAction::Set)]
        enabled: bool,
    },
    Theme {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    Lang {
        #[arg(value_parser = parse_language)]
        lang: Language,
    },
    Stats,
    ResetStats,
    Config,
    Exit,
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("expected on or off, got {other}")),
    }
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::parse(value).ok_or_else(|| format!("expected light, dark or auto, got {value}"))
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::parse(value).ok_or_else(|| format!("expected en or pl, got {value}"))
}

async fn respond(line: &str, state: Arc<RwLock<AppState>>) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "pokedex".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::List {
            query,
            kind,
            favorites,
        }) => commands::list(Arc::clone(&state), query, kind, favorites).await?,
        Some(Commands::Show { id }) => commands::show(Arc::clone(&state), id).await?,
        Some(Commands::Fav { id }) => commands::toggle_favorite(Arc::clone(&state), id).await?,
        Some(Commands::Caught { id }) => commands::toggle_caught(Arc::clone(&state), id).await?,
        Some(Commands::Type { name }) => commands::show_type(Arc::clone(&state), &name).await?,
        Some(Commands::Quiz { quit: true }) => quiz::quit(Arc::clone(&state)).await?,
        Some(Commands::Quiz { quit: false }) => quiz::start(Arc::clone(&state)).await?,
        Some(Commands::Answer { choice }) => quiz::answer(Arc::clone(&state), choice).await?,
        Some(Commands::Next) => quiz::next(Arc::clone(&state)).await?,
        Some(Commands::AutoNext { enabled }) => {
            quiz::set_auto_next(Arc::clone(&state), enabled).await?
        }
        Some(Commands::Theme { theme }) => commands::set_theme(Arc::clone(&state), theme).await?,
        Some(Commands::Lang { lang }) => commands::set_language(Arc::clone(&state), lang).await?,
        Some(Commands::Stats) => commands::show_stats(Arc::clone(&state)).await?,
        Some(Commands::ResetStats) => commands::reset_stats(Arc::clone(&state)).await?,
        Some(Commands::Config) => commands::show_settings(Arc::clone(&state)).await?,
        Some(Commands::Exit) => {
            commands::exit(state).await;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Cli, String> {
        let mut args = shlex::split(line).ok_or("bad quoting")?;
        args.insert(0, "pokedex".to_string());
        Cli::try_parse_from(args).map_err(|e| e.to_string())
    }

    #[test]
    fn parses_list_filters() {
        let cli = parse(r#"list --query "mr mime" -t fire --favorites"#).unwrap();
        match cli.command {
            Some(Commands::List {
                query,
                kind,
                favorites,
            }) => {
                assert_eq!(query.as_deref(), Some("mr mime"));
                assert_eq!(kind.as_deref(), Some("fire"));
                assert!(favorites);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn answer_is_one_to_four() {
        assert!(parse("answer 1").is_ok());
        assert!(parse("answer 4").is_ok());
        assert!(parse("answer 0").is_err());
        assert!(parse("answer 5").is_err());
    }

    #[test]
    fn kebab_case_commands() {
        assert!(matches!(
            parse("auto-next off").unwrap().command,
            Some(Commands::AutoNext { enabled: false })
        ));
        assert!(matches!(
            parse("reset-stats").unwrap().command,
            Some(Commands::ResetStats)
        ));
        assert!(parse("auto-next maybe").is_err());
    }

    #[test]
    fn parses_theme_and_language() {
        assert!(matches!(
            parse("theme dark").unwrap().command,
            Some(Commands::Theme { theme: Theme::Dark })
        ));
        assert!(matches!(
            parse("lang pl").unwrap().command,
            Some(Commands::Lang { lang: Language::Pl })
        ));
        assert!(parse("theme neon").is_err());
    }
}
