//! subro-demo: drive the subrogation workflow simulator from a terminal

use clap::{Parser, Subcommand, ValueEnum};
use subro_demo::commands;
use subro_demo::{logging, ConfigArgs};
use subrogation_workflow_core::{ClaimFilter, ReviewDecision, ViewMode};

/// Subrogation workflow demo
#[derive(Parser)]
#[command(name = "subro-demo", version, about = "Subrogation workflow simulator demo")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Debug-level logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable workflows
    Workflows {
        #[arg(long)]
        json: bool,
    },

    /// Play a workflow in real time (Ctrl-C pauses and exits)
    Run {
        /// Workflow id or claim number
        #[arg(long)]
        workflow: Option<String>,
        /// Stop after this many ticks
        #[arg(long)]
        max_ticks: Option<usize>,
        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a workflow instantly on a simulated clock
    Simulate {
        /// Workflow id or claim number
        #[arg(long)]
        workflow: Option<String>,
        #[arg(long, default_value_t = 200)]
        max_ticks: usize,
        /// Include the event log
        #[arg(long)]
        events: bool,
        #[arg(long)]
        json: bool,
    },

    /// Claims dashboard
    Claims {
        /// all, cleared, low_confidence or flagged_opportunity
        #[arg(long, default_value = "all")]
        filter: ClaimFilter,
        #[arg(long)]
        json: bool,
    },

    /// Human-review queue
    Queue {
        #[arg(long)]
        json: bool,
    },

    /// Financial impact breakdown
    Impact {
        #[arg(long)]
        json: bool,
    },

    /// Submit a review for a pending case
    Review {
        /// Case id (e.g. exc-002)
        case_id: String,
        /// correct, incorrect or needs_more_info
        #[arg(long)]
        decision: ReviewDecision,
        #[arg(long)]
        comments: String,
        #[arg(long, default_value = "Demo Reviewer")]
        reviewer: String,
        #[arg(long)]
        json: bool,
    },

    /// Show a claim's primary document
    Document {
        /// Claim number or id
        claim: String,
        #[arg(long, value_enum, default_value_t = ModeArg::Pdf)]
        mode: ModeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pdf,
    Text,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pdf => ViewMode::Pdf,
            ModeArg::Text => ViewMode::Text,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Workflows { json } => commands::workflows::list(&mut out, json),
        Commands::Run {
            workflow,
            max_ticks,
            json,
        } => {
            let config = cli.config.load()?;
            commands::run::run(&mut out, config, workflow.as_deref(), max_ticks, json).await
        }
        Commands::Simulate {
            workflow,
            max_ticks,
            events,
            json,
        } => {
            let config = cli.config.load()?;
            commands::simulate::run(&mut out, config, workflow.as_deref(), max_ticks, json, events)
        }
        Commands::Claims { filter, json } => commands::claims::list(&mut out, filter, json),
        Commands::Queue { json } => commands::queue::list(&mut out, json),
        Commands::Impact { json } => commands::impact::show(&mut out, json),
        Commands::Review {
            case_id,
            decision,
            comments,
            reviewer,
            json,
        } => commands::review::submit(
            &mut out,
            commands::review::ReviewArgs {
                case_id: &case_id,
                decision,
                comments: &comments,
                reviewer: &reviewer,
                date: chrono::Local::now().date_naive(),
            },
            json,
        ),
        Commands::Document { claim, mode } => {
            commands::document::show(&mut out, &claim, mode.into())
        }
    }
}
