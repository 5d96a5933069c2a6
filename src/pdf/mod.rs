// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod layout;
mod writer;

pub use layout::{render_document, Align, Color, Document, Op, Page};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{BillConfig, BillTotals, VouchingBill};

/// The single failure signal for an export: either the whole artifact is
/// written or nothing is.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

static FILE_SAFE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern"));

/// Deterministic export name: fixed prefix, filesystem-safe holder name,
/// bill date. `Homayra Mostofa (CEO)` becomes `Homayra_Mostofa_CEO`.
pub fn export_file_name(bill: &VouchingBill, extension: &str) -> String {
    let safe = FILE_SAFE.replace_all(&bill.name, "_");
    let safe = safe.trim_matches('_');
    format!("Vouching_Bill_{}_{}.{}", safe, bill.date, extension)
}

/// Render the bill and write it as a PDF under `dir`, returning the path.
/// The bytes go to a temporary name first and are renamed into place on
/// success, so a failed export never leaves a partial file behind.
pub fn export_pdf(
    bill: &VouchingBill,
    totals: &BillTotals,
    config: &BillConfig,
    dir: &Path,
) -> Result<PathBuf, RenderError> {
    let document = render_document(bill, totals, config);
    let bytes = document.to_pdf_bytes();
    let path = dir.join(export_file_name(bill, "pdf"));
    let tmp = dir.join(export_file_name(bill, "pdf.tmp"));
    fs::write(&tmp, &bytes).map_err(|source| RenderError::Write {
        path: path.clone(),
        source,
    })?;
    fs::rename(&tmp, &path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        RenderError::Write {
            path: path.clone(),
            source,
        }
    })?;
    Ok(path)
}
