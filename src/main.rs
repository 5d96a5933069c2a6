// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use vouchbill::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut state = store::load_or_init()?;

    match matches.subcommand() {
        Some(("show", sub)) => commands::summary::handle(&state, sub)?,
        Some(("withdraw", sub)) => commands::withdrawals::handle(&mut state, sub)?,
        Some(("cost", sub)) => commands::costs::handle(&mut state, sub)?,
        Some(("set", sub)) => commands::fields::handle(&mut state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("options", sub)) => commands::options::handle(sub)?,
        Some(("reset", _)) => {
            store::reset(&state)?;
            println!("All form data has been cleared.");
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
