use onto_config::OntoConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub async fn dispatch(
    command: Commands,
    config: OntoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => super::config::run(&config, flags),
        Commands::Resolve(args) => super::resolve::run(&args, &AppContext::init(config)?, flags).await,
        Commands::Lookup(args) => super::lookup::run(&args, &AppContext::init(config)?, flags).await,
        Commands::Batch(args) => super::batch::run(&args, &AppContext::init(config)?, flags).await,
    }
}
