use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use levelcalc::app::App;
use levelcalc::build_info;
use levelcalc::core::constants::{AUTO_BATTLE_INTERVAL_MS, INPUT_POLL_MS};
use levelcalc::core::settings::{SettingKey, Settings};
use levelcalc::input::handle_key;
use levelcalc::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

/// Idle game leveling calculator.
#[derive(Debug, Parser)]
#[command(name = "levelcalc", disable_version_flag = true)]
struct Cli {
    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,

    /// Seed for the level-up rolls (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between auto-battle wins
    #[arg(long, default_value_t = AUTO_BATTLE_INTERVAL_MS)]
    interval_ms: u64,

    /// Level at which an item's chance floor saturates
    #[arg(long)]
    max_level: Option<f64>,

    /// Minimum success chance (stored only)
    #[arg(long, allow_negative_numbers = true)]
    min_chance: Option<f64>,

    /// Level spacing between modifier unlocks
    #[arg(long)]
    modifier_step: Option<f64>,

    /// Seconds attributed to one battle
    #[arg(long)]
    battle_time: Option<f64>,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        let overrides = [
            (SettingKey::EffectiveMaxLevel, self.max_level),
            (SettingKey::MinChance, self.min_chance),
            (SettingKey::ModifierStepLevel, self.modifier_step),
            (SettingKey::Time, self.battle_time),
        ];
        for (key, value) in overrides {
            if value.is_some() {
                settings.set(key, value);
            }
        }
        settings
    }
}

fn init_logging() {
    // Log to a file so output does not tear the terminal UI
    let target: Box<dyn io::Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("levelcalc.log")
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    init_logging();
    log::info!("Starting {}", build_info::version_line());

    let mut app = App::new(
        cli.settings(),
        Duration::from_millis(cli.interval_ms),
        cli.seed,
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Calculator exited with error: {}", e);
    }
    log::info!(
        "Shut down after {} battles",
        app.store.battles_count()
    );

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    handle_key(app, key_event, Instant::now());
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}
