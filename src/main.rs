use std::env;

use loadout::cli;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let code = cli::run_with_args(&args).await;
    std::process::exit(code);
}
