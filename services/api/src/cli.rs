use crate::demo::{run_demo, run_weekly_report, DemoArgs, WeeklyReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skillstack::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SkillStack",
    about = "Track learning activity and serve recommendations, summaries, and weekly reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate learning reports from the command line
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
    /// Run a CLI demo over a bundled sample learning history
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Print the weekly learning summary report
    Weekly(WeeklyReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Learning-history CSV export used to seed the snapshot store
    #[arg(long)]
    pub(crate) seed_csv: Option<std::path::PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report {
            command: ReportCommand::Weekly(args),
        } => run_weekly_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
