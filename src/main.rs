use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use fiftysound::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    kana::KanaTable,
    runtime::{AppEvent, CrosstermEventSource, Runner},
    ui::format_table,
    vocab::{fetch_archive, VocabularyLibrary},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::{self, File},
    io::{self, stdin},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const INPUT_POLL: Duration = Duration::from_millis(250);
const LOG_ENV: &str = "FIFTYSOUND_LOG";

/// kana and vocabulary flash cards for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Drill hiragana, katakana and Japanese vocabulary in the terminal. Questions are drawn in shuffled rounds so every selected item comes up once per round and never twice in a row."
)]
pub struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// config file to use instead of the default location
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// leave hiragana out of kana practice
    #[clap(long, global = true)]
    no_hiragana: bool,

    /// leave katakana out of kana practice
    #[clap(long, global = true)]
    no_katakana: bool,

    /// minimum number of items a session needs
    #[clap(long, global = true)]
    min_targets: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// practice hiragana and katakana (default)
    Kana,
    /// practice vocabulary from a word-list archive
    Vocab {
        /// read a local ZIP archive instead of downloading
        #[clap(long, conflicts_with = "offline")]
        archive: Option<PathBuf>,

        /// use the small library bundled with the binary
        #[clap(long)]
        offline: bool,
    },
    /// print the kana table and exit
    Table,
    /// print the effective configuration
    Config {
        /// write a default config file
        #[clap(long)]
        init: bool,
    },
}

impl Cli {
    fn store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Command-line flags win over the config file.
    fn apply_overrides(&self, config: &mut Config) {
        if self.no_hiragana {
            config.include_hiragana = false;
        }
        if self.no_katakana {
            config.include_katakana = false;
        }
        if let Some(min) = self.min_targets {
            config.min_kana_targets = min;
            config.min_word_targets = min;
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging();

    let store = cli.store();
    let mut config = store.load();
    cli.apply_overrides(&mut config);

    let command = cli.command.clone().unwrap_or(Command::Kana);
    info!(?command, "starting");

    match command {
        Command::Table => {
            println!("{}", format_table(&KanaTable::standard()));
        }
        Command::Config { init: true } => {
            store.save(&Config::default())?;
            println!("wrote {}", store.path().display());
        }
        Command::Config { init: false } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Kana => {
            require_tty();
            let app = App::kana(KanaTable::standard(), &config)?;
            run(app)?;
        }
        Command::Vocab { archive, offline } => {
            require_tty();
            let library = load_library(&config, archive, offline)?;
            run(App::vocabulary(library, &config))?;
        }
    }

    Ok(())
}

fn require_tty() {
    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }
}

// The terminal is in raw mode while the app runs, so logs go to a file.
fn init_logging() {
    let path = AppDirs::log_path();
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("logging disabled: cannot create {}: {err}", parent.display());
            return;
        }
    }
    let file = match File::options().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("logging disabled: cannot open {}: {err}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init();
}

fn load_library(
    config: &Config,
    archive: Option<PathBuf>,
    offline: bool,
) -> fiftysound::Result<VocabularyLibrary> {
    if offline {
        return VocabularyLibrary::bundled();
    }
    if let Some(path) = archive {
        let bytes = fs::read(&path)?;
        return VocabularyLibrary::from_zip_bytes(&bytes, &config.library_dir);
    }

    eprintln!("downloading vocabulary from {}", config.vocabulary_url);
    let downloaded = fetch_archive(&config.vocabulary_url, &config.retry_policy())
        .and_then(|bytes| VocabularyLibrary::from_zip_bytes(&bytes, &config.library_dir));
    match downloaded {
        Ok(library) => Ok(library),
        Err(err) => {
            warn!(error = %err, "using the bundled library instead");
            eprintln!("download failed ({err}), using the bundled sample library");
            VocabularyLibrary::bundled()
        }
    }
}

fn run(mut app: App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(stats) = app.last_stats() {
        println!(
            "last session: {}/{} correct, {:.0}% acc",
            stats.correct,
            stats.total,
            stats.accuracy()
        );
    }
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), INPUT_POLL);

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    while !app.should_quit() {
        match runner.step() {
            AppEvent::Key(key) => {
                app.handle_key(key);
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppEvent::Idle => {}
            AppEvent::Closed => {
                warn!("terminal input closed, leaving");
                break;
            }
        }
    }

    Ok(())
}
