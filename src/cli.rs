use crate::config::{ViewerConfig, DEFAULT_INTERVAL_MS, DEFAULT_SNAPSHOT_DIR};
use crate::error::{Result, ViewerError};
use crate::launcher::Launcher;
use crate::logging;
use crate::snapshot::{discover_selectors, open_group};
use crate::ui::{tty, App, Menu};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "heapviz",
    about = "Animated terminal viewer for heap allocator snapshots",
    version
)]
pub struct Cli {
    /// Snapshot group to play, e.g. `Test07_`. Without one a selection menu opens.
    pub selector: Option<String>,

    /// Directory holding the snapshot files.
    #[arg(short, long, env = "HEAPVIZ_DIR", default_value = DEFAULT_SNAPSHOT_DIR)]
    pub dir: PathBuf,

    /// Milliseconds between frames.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Print the snapshot groups found in the directory and exit.
    #[arg(long)]
    pub list: bool,

    /// Append diagnostic logs to this file.
    #[arg(long, env = "HEAPVIZ_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> ViewerConfig {
        ViewerConfig::new(self.dir.clone(), Duration::from_millis(self.interval_ms))
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();

    if cli.list {
        for selector in discover_selectors(&config.snapshot_dir)? {
            println!("{selector}");
        }
        return Ok(());
    }

    match cli.selector {
        Some(selector) => run_viewer(&config, &selector),
        None => run_menu(config),
    }
}

fn run_viewer(config: &ViewerConfig, selector: &str) -> Result<()> {
    let sequence = match open_group(config, selector) {
        Ok(sequence) => sequence,
        Err(err @ ViewerError::NoSnapshots { .. }) => {
            eprintln!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let mut terminal = tty::init()?;
    let mut app = App::new(sequence, config.interval);
    let res = app.run(&mut terminal);

    tty::restore(&mut terminal)?;
    res?;
    Ok(())
}

fn run_menu(config: ViewerConfig) -> Result<()> {
    let selectors = discover_selectors(&config.snapshot_dir)?;
    if selectors.is_empty() {
        eprintln!(
            "No snapshot groups found in {}/",
            config.snapshot_dir.display()
        );
        return Ok(());
    }

    let snapshot_dir = config.snapshot_dir.clone();
    let launcher = Launcher::from_current_exe(config)?;

    let mut terminal = tty::init()?;
    let mut menu = Menu::new(selectors, snapshot_dir);
    let res = menu.run(&mut terminal, &launcher);

    tty::restore(&mut terminal)?;
    res?;
    Ok(())
}
