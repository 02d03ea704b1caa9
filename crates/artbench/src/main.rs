use artbench::cli::{run_to_line, Args};
use clap::Parser;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Some(line) = run_to_line(&args) {
        println!("{line}");
    }
}
