use crate::commands::{run_quote, run_schedule, QuoteArgs, ScheduleArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rent_quote::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rent Quote",
    about = "Quote monthly rent and contract installments from the command line or over HTTP",
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
    /// Print the monthly rent and contract terms for a property
    Quote(QuoteArgs),
    /// Write the 12-installment payment schedule as CSV
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Schedule(args) => run_schedule(args),
    }
}
