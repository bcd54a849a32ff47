use crate::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod error;
mod mcp;
mod prelude;
mod run;
mod tools;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Text conversion, cleanup, analysis and formatting tools"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Seed for the random source used by the password, lorem and random line tools.
    #[clap(long, env = "TEXTKIT_SEED", global = true)]
    seed: Option<u64>,

    /// Whether to display additional information.
    #[clap(long, env = "TEXTKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Random source for one dispatch: seeded when `--seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Inspect the tool catalog
    Tools(crate::tools::App),

    /// Run a tool over some text
    Run(crate::run::RunOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Tools(sub_app) => crate::tools::run(sub_app, app.global).await,
        SubCommands::Run(options) => crate::run::run(options, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
