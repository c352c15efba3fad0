use cisco_config_parser::config::Config;
use cisco_config_parser::output::print_subnets;
use cisco_config_parser::{logging, Device, Serializer};
use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    logging::init(&config.log_config)?;
    log::info!("#Start main()");

    let input = File::open(&config.input)
        .map_err(|e| format!("Cannot open configuration file {}: {e}", config.input.display()))?;
    let mut device = Device::with_platform(input, config.platform);
    let count = device.interface_count()?;
    log::info!("{} interfaces in {}", count, config.input.display());

    let output_path = config.output_path();
    let output = File::create(&output_path)
        .map_err(|e| format!("Cannot create output file {}: {e}", output_path.display()))?;
    let mut serializer = Serializer::new(BufWriter::new(output), config.format);
    serializer.serialize(&mut device)?;
    log::info!("wrote {}", output_path.display());

    if config.subnets {
        print_subnets(device.subnets()?);
    }

    Ok(())
}
