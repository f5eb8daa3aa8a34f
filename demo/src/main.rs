//! ziovate adherence client — Demo CLI
//!
//! Runs one or all of the three role flows (patient, doctor, admin) against
//! the stub API client: log in, render the role's dashboard as text, perform
//! a sample action where the role has one, log out.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- patient
//!   cargo run -p demo -- doctor
//!   cargo run -p demo -- admin
//!   cargo run -p demo -- --config client.toml doctor

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ziovate_api::{CallPolicy, ClientConfig, StubApiClient};
use ziovate_app::{
    AdminDashboardView, Dashboard, DoctorDashboardView, DrugTracker, DrugTrackerView,
    SessionContext,
};
use ziovate_contracts::{ApiResult, MedicineAction, Session, TrackerPeriod, UserRole};

// ── CLI definition ────────────────────────────────────────────────────────────

/// ziovate — medication-adherence client demo.
///
/// Each subcommand logs in as one role and walks its dashboard end to end
/// through the stub API client. No network, no persistence.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "ziovate adherence client demo",
    long_about = "Runs the ziovate role flows (patient drug tracker, doctor compliance\n\
                  overview, admin control panel) against the stub API client."
)]
struct Cli {
    /// Optional client configuration TOML (timeouts, retry policy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three role flows in sequence.
    RunAll,
    /// Patient flow: drug tracker with taken/missed actions.
    Patient,
    /// Doctor flow: compliance overview and patient roster.
    Doctor,
    /// Admin flow: control panel and backend placeholders.
    Admin,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ClientConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Demo error: {}", e);
                std::process::exit(1);
            }
        },
        None => ClientConfig::default(),
    };
    let policy = config.call_policy();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(&policy).await,
        Command::Patient => run_patient().await,
        Command::Doctor => run_doctor(&policy).await,
        Command::Admin => run_admin().await,
    };

    match result {
        Ok(()) => {
            println!("All selected flows completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Flow dispatch ─────────────────────────────────────────────────────────────

async fn run_all(policy: &CallPolicy) -> ApiResult<()> {
    run_patient().await?;
    run_doctor(policy).await?;
    run_admin().await?;
    Ok(())
}

async fn run_patient() -> ApiResult<()> {
    let client = Arc::new(StubApiClient::new());
    let mut ctx = SessionContext::new(client.clone());

    let session = ctx
        .login("Riya", "riya@example.com", "pw-riya", UserRole::Patient)
        .await?;
    print_greeting(session);
    debug_dashboard(session.role);

    let view = DrugTrackerView::from_seed();
    println!("View My Drug Tracker");
    println!("  {}", view.header);
    for row in view.day.iter().chain(view.night.iter()) {
        let marks = if DrugTrackerView::controls(row).is_empty() {
            "     "
        } else {
            "✅/❌"
        };
        println!(
            "  {:>5}  {:<20} {} · {}  {}",
            row.time, row.medicine, row.units, row.instruction, marks
        );
    }

    let mut tracker = DrugTracker::new(client);
    tracker.mark("m1", MedicineAction::Taken).await?;
    println!("  marked m1 (Metformin) as taken");

    let marked = tracker
        .mark_all(TrackerPeriod::Night, MedicineAction::Taken)
        .await?;
    println!("  Taken All (night): {} row(s) marked", marked);

    ctx.logout();
    println!("  logged out\n");
    Ok(())
}

async fn run_doctor(policy: &CallPolicy) -> ApiResult<()> {
    let client = Arc::new(StubApiClient::new());
    let mut ctx = SessionContext::new(client);

    let session = ctx
        .login("Aarav", "a@x.com", "pw1", UserRole::Doctor)
        .await?;
    print_greeting(session);
    debug_dashboard(session.role);

    let view = policy
        .execute("load_doctor_dashboard", || {
            DoctorDashboardView::load(ctx.client())
        })
        .await?;

    println!("Compliance Overview");
    for metric in &view.metrics {
        println!("  {:>4}  {}", metric.value, metric.label);
    }
    println!("Doctor's Patients");
    for patient in &view.roster {
        println!(
            "  {:<12} {}",
            patient.name,
            DoctorDashboardView::roster_line(patient)
        );
    }
    println!("Report Filters (to connect with the backend)");
    for filter in &view.report_filters {
        println!("  • {}", filter);
    }

    ctx.logout();
    println!("  logged out\n");
    Ok(())
}

async fn run_admin() -> ApiResult<()> {
    let client = Arc::new(StubApiClient::new());
    let mut ctx = SessionContext::new(client);

    let session = ctx
        .login("Admin", "admin@ziovate.example", "pw-admin", UserRole::Admin)
        .await?;
    print_greeting(session);
    debug_dashboard(session.role);

    let view = AdminDashboardView::new();
    println!("Admin Control Panel");
    for item in &view.panel_items {
        println!("  • {}", item);
    }
    println!("Backend placeholders");
    for group in &view.backend_groups {
        println!("  • {}", group);
    }

    ctx.logout();
    println!("  logged out\n");
    Ok(())
}

fn print_greeting(session: &Session) {
    println!("Hello, {}", session.name);
    println!("Role: {}", session.role.to_string().to_uppercase());
}

fn debug_dashboard(role: UserRole) {
    tracing::debug!(role = %role, dashboard = ?Dashboard::for_role(role), "dispatching dashboard");
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("ziovate — Medication Adherence Client");
    println!("Role Flow Demo");
    println!("=====================================");
    println!();
    println!("Every backend call goes through the ApiClient seam:");
    println!("  [1] stub client today: canned success, no I/O");
    println!("  [2] call policy: per-attempt deadline + bounded retry with backoff");
    println!("  [3] networked client later: same trait, same call sites");
    println!();
}
