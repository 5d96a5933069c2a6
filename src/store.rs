// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::{BillConfig, VouchingBill};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Vouchbill", "vouchbill"));

/// The persisted working state: one bill plus the letterhead settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillFile {
    pub config: BillConfig,
    pub bill: VouchingBill,
}

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("bill.json"))
}

pub fn load_or_init() -> Result<BillFile> {
    let path = store_path()?;
    if !path.exists() {
        return Ok(BillFile::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Read bill state at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Parse bill state at {}", path.display()))
}

pub fn save(state: &BillFile) -> Result<()> {
    let path = store_path()?;
    let raw = serde_json::to_string_pretty(state)?;
    fs::write(&path, raw).with_context(|| format!("Write bill state at {}", path.display()))?;
    Ok(())
}

/// Replace the stored state with a fresh form, keeping the letterhead settings.
pub fn reset(state: &BillFile) -> Result<BillFile> {
    let fresh = BillFile {
        config: state.config.clone(),
        bill: VouchingBill::default(),
    };
    save(&fresh)?;
    Ok(fresh)
}
