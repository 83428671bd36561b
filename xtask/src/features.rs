use std::process::Command;

use anyhow::{Context, Result};

/// Each `tasktime-common` tier must build without the others.
const TIERS: &[Option<&str>] = &[None, Some("foundation"), Some("runtime")];

/// `cargo check -p tasktime-common` once per feature tier.
pub fn test_feature_matrix() -> Result<()> {
    println!("Checking {} tasktime-common feature tiers...", TIERS.len());

    for (index, tier) in TIERS.iter().enumerate() {
        let label = tier.unwrap_or("no features");
        println!("\n[{}/{}] {label}", index + 1, TIERS.len());

        let mut command = Command::new("cargo");
        command.args(["check", "-p", "tasktime-common"]);
        if let Some(feature) = tier {
            command.args(["--features", feature]);
        }

        let status =
            command.status().with_context(|| format!("Failed to run cargo check for {label}"))?;
        if !status.success() {
            anyhow::bail!("tasktime-common does not compile with {label}");
        }
    }

    println!("\nAll tiers compile");
    Ok(())
}
