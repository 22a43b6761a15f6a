// SwitchCfg - Cisco switch serial console tool
use anyhow::Context;
use clap::Parser;
use switchcfg::cli::{execute_command, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = execute_command(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    std::io::Write::flush(&mut std::io::stdout()).context("Failed to flush stdout")?;
    Ok(())
}
