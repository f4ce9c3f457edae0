//! The `reportcard init` command.

use std::path::Path;

use anyhow::Result;

use reportcard_core::config::{CONFIG_FILE, SAMPLE_CONFIG};

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Run: reportcard calculate --name Alice --math 80 --english 70 --chemistry 60 --science 90");
    println!("  2. Run: reportcard find Alice --pdf alice.pdf");
    println!("  3. Or start the interactive form: reportcard form");

    Ok(())
}
