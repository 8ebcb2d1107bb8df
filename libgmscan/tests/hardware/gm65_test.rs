#![cfg(feature = "serial")]

use libgmscan::Result;
use serial_test::serial;

use crate::common;

// These tests require a GM65 on GMSCAN_PORT. They are marked `#[ignore]`
// so CI does not attempt to run them. Run manually with:
//
// GMSCAN_PORT=/dev/ttyUSB0 cargo test -p libgmscan --test hardware --features serial -- --ignored

#[test]
#[ignore]
#[serial]
fn open_and_configure_gm65() -> Result<()> {
    if let Some(dev) = common::open_and_configure_device()? {
        dev.close()?;
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn trigger_scan_answers_in_time() -> Result<()> {
    let Some(mut dev) = common::open_and_configure_device()? else {
        return Ok(());
    };
    // Without a code in front of the module this yields the read-fail message.
    let result = dev.scan()?;
    println!("scan result: {:?}", result);
    Ok(())
}
