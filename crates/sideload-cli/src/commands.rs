use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let ctx = HandlerContext::new(cli.format, config);

    match cli.command {
        Commands::Inspect { input } => handlers::inspect::handle(&ctx, &input),

        Commands::List {
            input,
            fields,
            limit,
            width,
        } => handlers::list::handle(&ctx, &input, &fields, limit, width),

        Commands::Show { input, id, fields } => {
            handlers::show::handle(&ctx, &input, id.as_deref(), &fields)
        }

        Commands::Resolve {
            input,
            relationship,
            id,
        } => handlers::resolve::handle(&ctx, &input, &relationship, id.as_deref()),
    }
}
