//! pagemenu CLI
//!
//! Show, browse, and pick from paginated terminal menus.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pagemenu::config::{load_menu, MenuConfig, MenuItem};
use pagemenu::display::{display, Banner};
use pagemenu::list::SelectableList;
use pagemenu::logging::{setup_logging, DEFAULT_LOG_LEVEL};
use pagemenu::metrics::{FixedTerminal, LiveTerminal, TerminalMetrics};
use pagemenu::theme::styler_for;
use pagemenu::tui::run::run;

#[derive(Parser)]
#[command(name = "pagemenu")]
#[command(about = "Paginated selection menus for the terminal")]
#[command(version)]
struct Cli {
    /// Log level written to the log file (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of a menu and exit
    Show {
        /// Menu file (JSON). Default: built-in demo menu
        file: Option<PathBuf>,

        /// Page to show, starting at 1 (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page, including the two header rows
        #[arg(long)]
        page_size: Option<usize>,

        /// Terminal width to lay out for (default: detected)
        #[arg(long)]
        width: Option<u16>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Browse a menu interactively and print the chosen entry
    Browse {
        /// Menu file (JSON). Default: built-in demo menu
        file: Option<PathBuf>,

        /// Rows per page, including the two header rows
        #[arg(long)]
        page_size: Option<usize>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Print a centered title banner
    Banner {
        /// Banner title
        text: String,

        /// Terminal width to center on (default: detected)
        #[arg(long)]
        width: Option<u16>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.log_level) {
        eprintln!("Note: logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Show { file, page, page_size, width, plain } => {
            cmd_show(file, page, page_size, width, plain)
        }
        Commands::Browse { file, page_size, plain } => cmd_browse(file, page_size, plain),
        Commands::Banner { text, width, plain } => cmd_banner(text, width, plain),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// MENU RESOLUTION
// ============================================================================

/// Load the menu file, or fall back to the demo menu.
fn resolve_menu(
    file: Option<PathBuf>,
    page_size: Option<usize>,
) -> Result<SelectableList<MenuItem>, String> {
    let mut config = match file {
        Some(path) => load_menu(&path).map_err(|e| e.to_string())?,
        None => MenuConfig::demo(),
    };

    if let Some(page_size) = page_size {
        config.page_size = page_size;
    }

    config.into_list().map_err(|e| e.to_string())
}

/// An explicit width wins over the live terminal's.
///
/// Rendering only lays out by width; the page size decides how many rows print.
fn resolve_metrics(width: Option<u16>) -> FixedTerminal {
    let live = LiveTerminal.size();
    FixedTerminal::new(width.unwrap_or(live.width), live.height)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_show(
    file: Option<PathBuf>,
    page: usize,
    page_size: Option<usize>,
    width: Option<u16>,
    plain: bool,
) -> Result<(), String> {
    let mut list = resolve_menu(file, page_size)?;

    for _ in 1..page.min(list.max_page() + 1) {
        list.next_page();
    }

    let metrics = resolve_metrics(width);
    let styler = styler_for(plain);

    display(&mut list, &mut io::stdout(), &metrics, styler.as_ref()).map_err(|e| e.to_string())
}

fn cmd_browse(file: Option<PathBuf>, page_size: Option<usize>, plain: bool) -> Result<(), String> {
    let mut list = resolve_menu(file, page_size)?;
    let styler = styler_for(plain);

    match run(&mut list, styler.as_ref()).map_err(|e| e.to_string())? {
        Some(name) => println!("{}", name),
        None => log::info!("browse ended without a selection"),
    }

    Ok(())
}

fn cmd_banner(text: String, width: Option<u16>, plain: bool) -> Result<(), String> {
    let metrics = resolve_metrics(width);
    let styler = styler_for(plain);

    display(&mut Banner::new(text), &mut io::stdout(), &metrics, styler.as_ref())
        .map_err(|e| e.to_string())
}


// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_has_no_height_flag() {
        assert!(Cli::try_parse_from(["pagemenu", "show", "--height", "5"]).is_err());
    }

    #[test]
    fn show_parses_width_and_page() {
        let cli = Cli::try_parse_from(["pagemenu", "show", "--width", "40", "--page", "2"]).unwrap();
        match cli.command {
            Commands::Show { width, page, file, .. } => {
                assert_eq!(width, Some(40));
                assert_eq!(page, 2);
                assert!(file.is_none());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn explicit_width_overrides_live_width() {
        assert_eq!(resolve_metrics(Some(33)).width(), 33);
    }
}
