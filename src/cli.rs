// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .required(true)
        .value_parser(["bank", "credit-card", "bkash-nagad"])
        .help("Withdrawal category")
}

fn value_arg(help: &'static str) -> Arg {
    Arg::new("value").required(true).help(help)
}

pub fn build_cli() -> Command {
    Command::new("vouchbill")
        .version(crate_version!())
        .about("Vouching & non-vouching bill builder: totals, amount in words, printable PDF")
        .subcommand(
            Command::new("show")
                .about("Show the current bill with derived totals")
                .args(json_flags()),
        )
        .subcommand(
            Command::new("withdraw")
                .about("Manage withdrawal entries")
                .subcommand(
                    Command::new("add")
                        .about("Add a withdrawal entry")
                        .arg(kind_arg())
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .required(true)
                                .help("Source label, e.g. DBBL"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Amount; blank counts as zero"),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Edit a withdrawal entry in place")
                        .arg(kind_arg())
                        .arg(Arg::new("id").required(true).help("Entry id (see list)"))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("amount").long("amount")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a withdrawal entry")
                        .arg(kind_arg())
                        .arg(Arg::new("id").required(true).help("Entry id (see list)")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List withdrawal entries across all categories")
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("cost")
                .about("Manage cost entries")
                .subcommand(
                    Command::new("add")
                        .about("Add a cost entry")
                        .arg(
                            Arg::new("head")
                                .long("head")
                                .required(true)
                                .help("Cost head: a short-form meaning or free text"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true)
                                .help("What the money was spent on"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Amount; blank counts as zero"),
                        )
                        .arg(
                            Arg::new("remarks")
                                .long("remarks")
                                .help("One of the remark options or free text"),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Edit a cost entry in place")
                        .arg(Arg::new("id").required(true).help("Entry id (see list)"))
                        .arg(Arg::new("head").long("head"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("remarks").long("remarks")),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a cost entry")
                        .arg(Arg::new("id").required(true).help("Entry id (see list)")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List cost entries in bill order")
                        .args(json_flags()),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set bill fields and letterhead settings")
                .subcommand(Command::new("name").arg(value_arg("Holder name")))
                .subcommand(Command::new("date").arg(value_arg("Bill date, YYYY-MM-DD")))
                .subcommand(Command::new("due-from").arg(value_arg("Due-from note; empty clears")))
                .subcommand(
                    Command::new("payable-to").arg(value_arg("Payable-to note; empty clears")),
                )
                .subcommand(Command::new("charity").arg(value_arg("Charity note; empty clears")))
                .subcommand(
                    Command::new("cash-in-bkash-nagad")
                        .arg(value_arg("Cash held in Bkash/Nagad; blank counts as zero")),
                )
                .subcommand(Command::new("org-name").arg(value_arg("Letterhead organization name")))
                .subcommand(Command::new("org-subtitle").arg(value_arg("Letterhead subtitle")))
                .subcommand(
                    Command::new("currency-symbol").arg(value_arg("Currency symbol for display")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the bill as a printable PDF or as data")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("pdf")
                        .value_parser(["pdf", "csv", "json"]),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(".")
                        .help("Output directory"),
                ),
        )
        .subcommand(
            Command::new("options")
                .about("Show the short-form code table and fixed option lists")
                .args(json_flags()),
        )
        .subcommand(Command::new("reset").about("Reset the form to a fresh bill"))
}
