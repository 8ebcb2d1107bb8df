#![cfg(feature = "serial")]

//! Configure a GM65/GM812 and print barcodes as they are scanned.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libgmscan --example scan --features serial -- /dev/ttyUSB0 gm65

use libgmscan::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let port = args.next().unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let model = args.next().unwrap_or_else(|| "gm65".to_string());
    let device_type = DeviceType::from_name(&model)
        .ok_or_else(|| anyhow::anyhow!("unknown model: {}", model))?;

    println!("Opening {} on {}...", device_type, port);
    let config = SerialConfig::default().with_read_timeout_ms(5_000);
    let mut dev = DeviceBuilder::new()
        .with_serial_port(&port, &config)?
        .with_device_type(device_type)
        .build_configured()?;

    dev.enable_all_formats()?;
    println!("Ready. Hold a code in front of the module (Ctrl-C to stop).");

    loop {
        match dev.scan() {
            Ok(ScanResult::Data(data)) => {
                println!("Scanned: {}", String::from_utf8_lossy(&data));
            }
            Ok(ScanResult::NoRead) => println!("No code read"),
            Err(e) if e.is_timeout() => println!("No answer from module"),
            Err(e) => return Err(e.into()),
        }
    }
}
