use anyhow::Context;
use heartless_bot::{Policy, ReplicaPolicy};
use heartless_replica::logging::init_logging;
use heartless_replica::options::Cli;
use heartless_replica::stagger::StaggerConfig;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let stagger = StaggerConfig::from_env();
    let (cli, ignored) = Cli::parse_lenient();
    init_logging(cli.log_json);

    for option in &ignored {
        debug!(option = option.as_str(), "ignoring unrecognized argument");
    }

    let request = cli.into_request().context("reading game state")?;
    stagger.apply(request.seat);

    let decision = ReplicaPolicy::new()
        .decide(&request.context())
        .context("choosing a card")?;
    println!("{decision}");
    Ok(())
}
