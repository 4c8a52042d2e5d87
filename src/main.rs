use clap::Parser;
use colonnine_api::cli::{args::Args, commands};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args).await {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Colonnine API - Milan Charging Station Query Service");
    println!("====================================================");
    println!();
    println!("Load the city of Milan's electric vehicle charging station dataset");
    println!("into memory and serve a small read-only HTTP API over it.");
    println!();
    println!("USAGE:");
    println!("    colonnine-api <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Load the dataset and serve the HTTP query API (main command)");
    println!("    inspect     Summarize the dataset without starting a server");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve the bundled dataset on the default address:");
    println!("    colonnine-api serve");
    println!();
    println!("    # Serve a specific dataset copy on another port:");
    println!("    colonnine-api serve --dataset /path/to/ricarica_colonnine.csv --port 3000");
    println!();
    println!("    # Summarize the dataset as JSON:");
    println!("    colonnine-api inspect --format json");
    println!();
    println!("    # Get help for specific commands:");
    println!("    colonnine-api serve --help");
    println!("    colonnine-api inspect --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    colonnine-api <COMMAND> --help");
}
