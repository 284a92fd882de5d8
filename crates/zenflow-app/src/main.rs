use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use eyre::Result;
use jiff::tz::TimeZone;
use tracing_subscriber::EnvFilter;
use zenflow_api::{RecordClient, ReqwestBackend, UserClient};
use zenflow_app::config::AppConfig;
use zenflow_app::controllers::{
    DashboardController, HistoryController, HomeController, LoginController,
};
use zenflow_app::error::AppError;
use zenflow_app::navigation::Route;
use zenflow_app::render;
use zenflow_app::scope::ScopeHandle;
use zenflow_app::session::SessionContext;
use zenflow_app::terminal;
use zenflow_core::models::tip::all_tips;
use zenflow_storage::{FileStore, SessionStore};

#[derive(Parser)]
#[command(name = "zenflow", version, about = "Track daily stress levels")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the start screen for the stored session.
    Status,
    /// Log in with a regular account.
    Login {
        email: String,
        #[arg(long, env = "ZENFLOW_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Log in with a manager account.
    ManagerLogin {
        email: String,
        #[arg(long, env = "ZENFLOW_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Logout,
    /// Register today's stress level.
    Record {
        #[arg(short, long)]
        level: Option<u8>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List your records.
    History,
    /// Change the level or notes of one of your records.
    Edit {
        id: i64,
        #[arg(short, long)]
        level: Option<u8>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Manager dashboard over all records.
    Stats,
    Tips,
}

impl Command {
    fn route(&self) -> Route {
        match self {
            Self::Login { .. } | Self::Logout => Route::Login,
            Self::ManagerLogin { .. } => Route::ManagerLogin,
            Self::Status | Self::Record { .. } => Route::Home,
            Self::History | Self::Edit { .. } | Self::Delete { .. } => Route::History,
            Self::Tips => Route::Tips,
            Self::Stats => Route::ManagerDashboard,
        }
    }
}

struct App {
    session: SessionContext,
    records: RecordClient,
    users: UserClient,
    tz: TimeZone,
}

impl App {
    fn build(config: &AppConfig) -> Result<Self, AppError> {
        let store = FileStore::open(&config.data_dir)?;
        let session = SessionContext::init(SessionStore::new(Arc::new(store)));
        let backend = ReqwestBackend::shared(config.api.clone())?;
        Ok(Self {
            session,
            records: RecordClient::new(Arc::clone(&backend), config.api.supports_update),
            users: UserClient::new(backend),
            tz: TimeZone::system(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let mut app = App::build(&config)?;

    if let Err(e) = run(&mut app, cli.command.unwrap_or(Command::Status)).await {
        eprintln!("{}", render::dialog(&e));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(app: &mut App, command: Command) -> Result<(), AppError> {
    let requested = command.route();
    let shown = requested.guard(app.session.auth_state());
    if shown != requested {
        tracing::info!(?requested, ?shown, "route redirected");
        return show(app, shown).await;
    }

    match command {
        Command::Status => show(app, app.session.start_route()).await,
        Command::Login { email, password } => {
            let password = read_password(password)?;
            let login = LoginController::new(app.users.clone());
            close_on_interrupt(login.scope());
            let route = login.login(&mut app.session, &email, &password).await?;
            show(app, route).await
        }
        Command::ManagerLogin { email, password } => {
            let password = read_password(password)?;
            let login = LoginController::new(app.users.clone());
            close_on_interrupt(login.scope());
            let route = login
                .manager_login(&mut app.session, &email, &password)
                .await?;
            show(app, route).await
        }
        Command::Logout => {
            let route = app.session.logout();
            println!("Logged out.");
            show(app, route).await
        }
        Command::Record { level, notes } => {
            let mut home = HomeController::open(&app.session, app.records.clone())?;
            close_on_interrupt(home.scope());
            let Some(level) = level else {
                show(app, Route::Home).await?;
                return Err(AppError::validation("Please select a stress level."));
            };
            home.select_level(level)?;
            if let Some(notes) = notes {
                home.set_notes(notes);
            }
            let record = home.submit().await?;
            println!("Saved.\n{}", render::record_item(&record, &app.tz));
            Ok(())
        }
        Command::History => show(app, Route::History).await,
        Command::Edit { id, level, notes } => {
            let mut history = HistoryController::open(&app.session, app.records.clone())?;
            close_on_interrupt(history.scope());
            history.load().await?;
            history.begin_edit(id)?;
            if let Some(level) = level {
                history.set_draft_level(level)?;
            }
            if let Some(notes) = notes {
                history.set_draft_notes(notes)?;
            }
            if let Some(draft) = history.draft() {
                println!("{}", render::draft(draft));
            }
            history.save_edit().await?;
            print!("{}", render::history(history.items(), &app.tz));
            Ok(())
        }
        Command::Delete { id, yes } => {
            let mut history = HistoryController::open(&app.session, app.records.clone())?;
            close_on_interrupt(history.scope());
            if !yes
                && !terminal::confirm(
                    io::stdin().lock(),
                    io::stderr(),
                    &format!("Delete record #{id}?"),
                )?
            {
                println!("Cancelled.");
                return Ok(());
            }
            history.delete(id).await?;
            print!("{}", render::history(history.items(), &app.tz));
            Ok(())
        }
        Command::Stats => show(app, Route::ManagerDashboard).await,
        Command::Tips => show(app, Route::Tips).await,
    }
}

/// Render the landing view of `route`.
async fn show(app: &App, route: Route) -> Result<(), AppError> {
    match route {
        Route::Login => {
            println!("Not logged in. Run `zenflow login <email>`.");
            Ok(())
        }
        Route::ManagerLogin => {
            println!("Manager access required. Run `zenflow manager-login <email>`.");
            Ok(())
        }
        Route::Home => {
            let user = app.session.require_user()?;
            println!("{}\n", render::greeting(user));
            print!("{}", render::level_picker(None));
            println!("\nRun `zenflow record --level <1-5> [--notes <text>]`.");
            Ok(())
        }
        Route::History => {
            let mut history = HistoryController::open(&app.session, app.records.clone())?;
            close_on_interrupt(history.scope());
            let items = history.load().await?;
            print!("{}", render::history(items, &app.tz));
            Ok(())
        }
        Route::Tips => {
            print!("{}", render::tips(all_tips()));
            Ok(())
        }
        Route::ManagerDashboard => {
            let mut dashboard = DashboardController::open(&app.session, app.records.clone())?;
            close_on_interrupt(dashboard.scope());
            let stats = dashboard.load().await?;
            print!("{}", render::dashboard(&stats));
            Ok(())
        }
    }
}

fn close_on_interrupt(handle: ScopeHandle) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.close();
        }
    });
}

fn read_password(password: Option<String>) -> Result<String, AppError> {
    match password {
        Some(password) => Ok(password),
        None => terminal::read_secret("Password: "),
    }
}
