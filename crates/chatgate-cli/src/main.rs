//! chatgate CLI: pre-chat placeholder view for chat applications

use chatgate_engine::{
    load_app_info, load_parameters, map_fields, AppInfo, AppParameters, Config, FormValues,
};
use chatgate_tui::PlaceholderProps;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Collect pre-chat inputs for a chat application
#[derive(Parser)]
#[command(name = "chatgate")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    view: ViewArgs,

    /// Append logs to this file (the terminal is owned by the TUI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Args)]
struct ViewArgs {
    /// Application parameters JSON (holds `user_input_form`)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Application info JSON
    #[arg(long)]
    info: Option<PathBuf>,

    /// Treat the entry form as already filled
    #[arg(long)]
    filled: bool,

    /// Config file (defaults to .chatgate/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the placeholder view (default when no command specified)
    Tui(ViewArgs),

    /// Print the form items derived from a parameters file
    Fields {
        /// Application parameters JSON
        #[arg(long)]
        params: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init,
}

const CHATGATE_DIR: &str = ".chatgate";

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: failed to open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    match cli.command {
        None => cmd_tui(&cli.view),
        Some(Commands::Tui(args)) => cmd_tui(&args),
        Some(Commands::Fields { params, json }) => cmd_fields(&params, json),
        Some(Commands::Init) => cmd_init(),
    }
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

fn default_config_path() -> PathBuf {
    Path::new(CHATGATE_DIR).join("config.json")
}

fn cmd_tui(args: &ViewArgs) {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = match Config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}: {e}", config_path.display());
            std::process::exit(1);
        }
    };

    let params = match &args.params {
        Some(path) => Some(load_parameters(path).unwrap_or_else(|e| exit_with(&e))),
        None => None,
    };
    let info: Option<AppInfo> = args
        .info
        .as_ref()
        .map(|path| load_app_info(path).unwrap_or_else(|e| exit_with(&e)));

    debug!(
        fields = params.as_ref().map_or(0, |p| p.user_input_form.len()),
        has_info = info.is_some(),
        "Loaded application documents"
    );

    let props = match params {
        Some(params) => PlaceholderProps {
            form_filled: args.filled,
            ..PlaceholderProps::from_parameters(params, info)
        },
        None => PlaceholderProps {
            form_filled: args.filled,
            user_input_form: None,
            app_info: info,
        },
    };

    let submitted: Arc<Mutex<Vec<FormValues>>> = Arc::default();
    let sink = Arc::clone(&submitted);
    let on_start = Box::new(move |values: FormValues| {
        if let Ok(mut submitted) = sink.lock() {
            submitted.push(values);
        }
    });

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(chatgate_tui::run_tui(props, config, on_start)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Print once the terminal is restored
    let submitted = submitted.lock().map(|s| s.clone()).unwrap_or_default();
    for values in submitted {
        println!(
            "{}",
            serde_json::to_string(&values).expect("failed to serialize")
        );
    }
}

fn cmd_fields(params_path: &Path, json: bool) {
    let params: AppParameters = load_parameters(params_path).unwrap_or_else(|e| exit_with(&e));
    let fields = map_fields(&params.user_input_form);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&fields).expect("failed to serialize")
        );
        return;
    }

    if fields.is_empty() {
        println!("No input fields declared");
        return;
    }

    for (entry, field) in params.user_input_form.iter().zip(&fields) {
        match (&field.name, &field.label) {
            (Some(name), Some(label)) => {
                let required = if field.required { " (required)" } else { "" };
                println!("  {name} - {label}{required}");
            }
            _ => println!("  [{}] unsupported control type", entry.kind()),
        }
    }
}

fn cmd_init() {
    let config_path = default_config_path();
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    if let Err(e) = Config::default().save(&config_path) {
        eprintln!("Failed to write config: {e}");
        std::process::exit(1);
    }
    println!("Created {}", config_path.display());
}

fn exit_with(e: &dyn std::error::Error) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_view_args_without_subcommand() {
        let cli = Cli::try_parse_from(["chatgate", "--params", "p.json", "--filled"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.view.params, Some(PathBuf::from("p.json")));
        assert!(cli.view.filled);
    }

    #[test]
    fn test_tui_subcommand_takes_its_own_args() {
        let cli = Cli::try_parse_from(["chatgate", "tui", "--info", "i.json"]).unwrap();
        match cli.command {
            Some(Commands::Tui(args)) => assert_eq!(args.info, Some(PathBuf::from("i.json"))),
            _ => panic!("expected tui command"),
        }
    }

    #[test]
    fn test_top_level_view_args_conflict_with_subcommand() {
        assert!(Cli::try_parse_from(["chatgate", "--params", "p.json", "tui"]).is_err());
        assert!(Cli::try_parse_from(["chatgate", "--info", "i.json", "fields", "--params", "p.json"]).is_err());
    }

    #[test]
    fn test_log_file_is_global() {
        let cli = Cli::try_parse_from(["chatgate", "init", "--log-file", "chatgate.log"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));
        assert_eq!(cli.log_file, Some(PathBuf::from("chatgate.log")));

        let cli = Cli::try_parse_from(["chatgate", "--log-file", "chatgate.log", "--filled"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_file, Some(PathBuf::from("chatgate.log")));
    }
}
