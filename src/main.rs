use clap::Parser;
use wordhuff::{run, Config};

fn main() {
    // Log level is read from RUST_LOG, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(err) = run(&config) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
    println!("Done. See {} for the results.", config.output.display());
}
