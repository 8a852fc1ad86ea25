// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::{classify_failure, require_login};
use crate::repo::TransactionRepo;
use crate::session::SessionManager;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle(
    session: &mut SessionManager,
    repo: &TransactionRepo,
    sub: &clap::ArgMatches,
) -> Result<()> {
    require_login(session)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let month = match (sub.get_one::<i32>("year"), sub.get_one::<u32>("month")) {
        (Some(y), Some(m)) => Some((*y, *m)),
        (None, None) => None,
        _ => anyhow::bail!("--year and --month must be given together"),
    };

    let summary = match repo.month_summary(month) {
        Ok(s) => s,
        Err(e) => return Err(classify_failure(session, e)),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        println!("Total income:  {}", fmt_amount(&summary.total_income));
        println!("Total expense: {}", fmt_amount(&summary.total_expense));
        println!("Net savings:   {}", fmt_amount(&summary.net_savings));
        if !summary.expense_breakdown.is_empty() {
            let rows: Vec<Vec<String>> = summary
                .expense_breakdown
                .iter()
                .map(|b| vec![b.category.clone(), fmt_amount(&b.total_amount)])
                .collect();
            println!("{}", pretty_table(&["Category", "Spent"], rows));
        }
    }
    Ok(())
}
