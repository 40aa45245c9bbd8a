use binscope::cli::{self, Args};
use binscope::logging;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if args.log_json {
        logging::init_tracing_json();
    } else {
        logging::init_tracing();
    }

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
