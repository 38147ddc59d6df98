use clap::{Parser, Subcommand};
use studyflow_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyflow", version, about = "Studyflow study dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Focus timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Render the whole dashboard
    Dashboard(commands::dashboard::DashboardArgs),
    /// Study sessions
    Sessions {
        #[command(subcommand)]
        action: commands::sessions::SessionsAction,
    },
    /// Month calendar
    Calendar(commands::dashboard::CalendarArgs),
    /// Weekly progress by subject
    Progress,
    /// Study recommendations
    Recommendations,
    /// Notifications
    Notifications(commands::dashboard::NotificationsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("STUDYFLOW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,studyflow_core={0},studyflow={0}", config.logging.level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action, &config),
        Commands::Dashboard(args) => commands::dashboard::run_dashboard(args, &config),
        Commands::Sessions { action } => commands::sessions::run(action, &config),
        Commands::Calendar(args) => commands::dashboard::run_calendar(args, &config),
        Commands::Progress => commands::dashboard::run_progress(&config),
        Commands::Recommendations => commands::dashboard::run_recommendations(&config),
        Commands::Notifications(args) => commands::dashboard::run_notifications(args, &config),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
