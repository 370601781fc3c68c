use std::path::PathBuf;

use clap::Parser;

use vip8_core::constants::DEFAULT_INSTRUCTIONS_PER_CYCLE;

mod audio;
mod keymap;
mod run;

/// CHIP-8 virtual machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per 60 Hz quantum
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_CYCLE)]
    ipc: u32,

    /// Window pixels per framebuffer cell
    #[arg(long, default_value_t = 20)]
    scale: u32,

    /// Interpret Bnnn as a jump to Vx + nnn instead of V0 + nnn
    #[arg(long)]
    jump_vx: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args)
}
