use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use ratatui::layout::Rect;
use tracing::Level;

use chat_wm::config::{HostConfig, WmConfig};
use chat_wm::constants::DOUBLE_CLICK_MS;
use chat_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use chat_wm::error::Result;
use chat_wm::runner::{Dashboard, run};
use chat_wm::tracing_sub;

const AFTER_HELP: &str = indoc! {"
    Keys:
      n          accept the next waiting chat
      e, Del     end the selected session
      o          organize windows into a grid
      h          hide every window
      d          toggle dock mode
      Tab, j/k   cycle the selected session
      Enter      restore the selected window
      m          toggle mouse capture
      q, Ctrl+Q  quit

    Drag a window by its header, resize it from the bottom-right grip and
    double-click the header to maximize.
"};

#[derive(Parser, Debug)]
#[command(
    name = "chat-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Support dashboard with floating chat windows",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Chats already accepted when the dashboard opens.
    #[arg(short = 's', long = "sessions", value_name = "COUNT", default_value_t = 3)]
    sessions: usize,

    /// Pixel width of one terminal cell.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = 8)]
    cell_width: u32,

    /// Pixel height of one terminal cell.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = 16)]
    cell_height: u32,

    /// Longest gap between two clicks that still counts as a double click.
    #[arg(long = "double-click-ms", value_name = "MS", default_value_t = DOUBLE_CLICK_MS)]
    double_click_ms: u64,

    /// Append logs to this file. Without it logs are discarded.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    fn host_config(&self) -> HostConfig {
        HostConfig {
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            double_click: Duration::from_millis(self.double_click_ms),
            ..HostConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_level, cli.log_file.as_deref())?;

    let (columns, rows) = crossterm::terminal::size()?;
    let mut dashboard = Dashboard::new(
        WmConfig::default(),
        cli.host_config(),
        cli.sessions,
        Rect::new(0, 0, columns, rows),
    )?;
    let mut input = ConsoleInputDriver::new();
    let mut output = ConsoleOutputDriver::new()?;
    let result = run(
        &mut dashboard,
        &mut input,
        &mut output,
        Duration::from_millis(16),
    );
    if let Err(err) = &result {
        tracing::error!(error = %err, "dashboard exited with an error");
    }
    result
}
