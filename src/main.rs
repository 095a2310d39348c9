use clap::Parser;

use toolshed::cli::{Cli, Commands};
use toolshed::commands::{
    run_changelog, run_cll, run_cloc, run_config, run_serve, run_todo, run_tree, run_watch,
};
use toolshed::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Cll(args) => run_cll(args, &cli),
        Commands::Cloc(args) => run_cloc(args, &cli),
        Commands::Tree(args) => run_tree(args),
        Commands::Changelog(args) => run_changelog(args, &cli),
        Commands::Serve(args) => run_serve(args, &cli),
        Commands::Watch(args) => run_watch(args, &cli),
        Commands::Todo(args) => run_todo(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
