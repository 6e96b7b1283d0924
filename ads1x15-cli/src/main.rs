use ads1x15_hal::ADS1x15;
use ads1x15_hal::connect::LinuxBus;
use anyhow::Context;
use clap::Parser;
use linux_embedded_hal::Delay;

use cli::Commands;

mod cli;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();

    match util::addr_pin(cli.address) {
        Some(pin) => log::debug!("address {:#04X} (ADDR to {pin})", cli.address),
        None => log::debug!("address {:#04X}", cli.address),
    }
    let mut device = ADS1x15::new(cli.address, cli.chip.into(), Delay);
    device
        .bind(&mut LinuxBus::new(&cli.bus))
        .with_context(|| format!("Failed to open {}", cli.bus.display()))?;
    device.set_gain(cli.gain.into());

    match cli.command {
        Commands::Read { channel } => println!("{}", device.read_single_ended(channel)?),
        Commands::Diff { pair } => println!("{}", device.read_differential(pair.into())?),
        Commands::Comparator { channel, threshold } => {
            device.start_comparator(channel, threshold)?;
            log::info!("comparator armed on channel {channel} above {threshold}");
        }
        Commands::Last => println!("{}", device.last_conversion_result()?),
        Commands::Config => println!("{:#?}", device.read_config()?),
    }
    Ok(())
}
