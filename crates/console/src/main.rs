//! DIPR admin console navigation CLI.
//!
//! Usage:
//!   dipr-console login --role content --token abc123
//!   dipr-console show --path /manage-articles --format html
//!   dipr-console click /manage-banners
//!   dipr-console logout

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dipr_console::{
    ClickOutcome, Config, ConfirmDialog, ConfirmOptions, ConsoleResult, Decision, FileRoleStore,
    LogoutOutcome, MemoryRouter, MenuView, Role, RoleNavMenu, Router, SidebarTheme,
    TerminalDialog, menu, sign_in,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Role-conditional admin console sidebar", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store a session (token and role) as sign-in would.
    Login {
        /// Role to sign in as (admin, moderator, content, user).
        #[arg(long)]
        role: Role,

        /// Session token.
        #[arg(long)]
        token: String,
    },

    /// Render the sidebar for the stored role.
    Show {
        /// Current path (default: CONSOLE_START_PATH).
        #[arg(long)]
        path: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Click a menu entry and render the sidebar at the new path.
    Click {
        /// Entry key, e.g. /manage-users.
        key: String,

        /// Current path before the click (default: CONSOLE_START_PATH).
        #[arg(long)]
        path: Option<String>,
    },

    /// Log out after confirmation.
    Logout {
        /// Current path (default: CONSOLE_START_PATH).
        #[arg(long)]
        path: Option<String>,

        /// Confirm without prompting.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Html,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    let store = FileRoleStore::new(&config.store_path);
    let router_at =
        |path: Option<String>| MemoryRouter::new(path.unwrap_or_else(|| config.start_path.clone()));

    match args.command {
        Command::Login { role, token } => {
            let mut store = store;
            sign_in(&mut store, role, &token).context("failed to store session")?;
            info!(%role, store = %config.store_path.display(), "signed in");
        }
        Command::Show { path, format } => {
            let menu = RoleNavMenu::new(store, router_at(path));
            let view = menu.render().context("failed to render sidebar")?;
            print_view(&config, &view, format)?;
        }
        Command::Click { key, path } => {
            if menu::find(&key).is_none() {
                bail!("unknown menu entry '{key}'");
            }
            let mut menu = RoleNavMenu::new(store, router_at(path));
            if menu.on_menu_click(&key).context("navigation failed")? == ClickOutcome::Ignored {
                println!("'{key}' is the logout entry; use `dipr-console logout`");
                return Ok(());
            }
            let view = menu.render().context("failed to render sidebar")?;
            print_view(&config, &view, Format::Text)?;
        }
        Command::Logout { path, yes } => {
            let mut menu =
                RoleNavMenu::new(store, router_at(path)).with_login_path(config.login_path.clone());

            let outcome = if yes {
                let pending = menu
                    .on_logout_click(&mut NoPrompt)
                    .context("failed to open logout confirmation")?;
                menu.resolve_logout(pending, Decision::Confirm)
            } else {
                let mut dialog = TerminalDialog::new(io::stdin().lock(), io::stdout());
                let pending = menu
                    .on_logout_click(&mut dialog)
                    .context("failed to open logout confirmation")?;
                let decision = dialog.read_decision().context("failed to read answer")?;
                menu.resolve_logout(pending, decision)
            }
            .context("logout failed")?;

            match outcome {
                LogoutOutcome::SignedOut => {
                    println!("Logged out; now at {}", menu.router().current_path());
                }
                LogoutOutcome::Cancelled => println!("Logout cancelled"),
            }
        }
    }

    Ok(())
}

/// Dialog used with `--yes`: the prompt is skipped entirely.
struct NoPrompt;

impl ConfirmDialog for NoPrompt {
    fn open(&mut self, _options: &ConfirmOptions) -> ConsoleResult<()> {
        Ok(())
    }
}

fn print_view(config: &Config, view: &MenuView, format: Format) -> Result<()> {
    let mut out = io::stdout().lock();

    match format {
        Format::Text => {
            for item in &view.entries {
                let marker = if item.selected { ">" } else { " " };
                match item.entry.icon {
                    Some(icon) => writeln!(
                        out,
                        "{marker} {:<20} {:<24} [{}]",
                        item.entry.label,
                        item.entry.key,
                        icon.as_str()
                    )?,
                    None => writeln!(out, "{marker} {}", item.entry.label)?,
                }
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, view).context("failed to encode menu")?;
            writeln!(out)?;
        }
        Format::Html => {
            let theme = match &config.template_dir {
                Some(dir) => SidebarTheme::from_dir(dir),
                None => SidebarTheme::new(),
            }
            .context("failed to initialize templates")?;
            let html = theme
                .render(view, &config.branding())
                .context("failed to render sidebar template")?;
            writeln!(out, "{html}")?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
