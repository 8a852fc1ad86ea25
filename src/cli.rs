// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendtrack")
        .about("Track income and expenses against the hosted expense-tracker service")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("signup")
                .about("Create an account and start a session")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and persist the session")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Clear the persisted session"))
        .subcommand(Command::new("whoami").about("Show the signed-in profile"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("INCOME or EXPENSE"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("See `spendtrack categories`"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD; defaults to today"),
                        )
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("type").long("type").help("INCOME or EXPENSE"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("from").long("from").help("Start date, YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").help("End date, YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N records"),
                        ),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Monthly totals and expense breakdown")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_parser(value_parser!(u32)),
                ),
        ))
        .subcommand(Command::new("categories").about("Show the valid categories for each type"))
}
