// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::commands::{classify_failure, require_login};
use crate::error::ApiError;
use crate::models::{
    ExpenseCategory, IncomeCategory, Kind, NewTransaction, TransactionType, lookup_category,
};
use crate::repo::{TransactionRepo, TxFilter};
use crate::session::SessionManager;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(
    session: &mut SessionManager,
    repo: &TransactionRepo,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, repo, sub),
        Some(("list", sub)) => list(session, repo, sub),
        Some(("delete", sub)) => delete(session, repo, sub),
        _ => Ok(()),
    }
}

fn add(session: &mut SessionManager, repo: &TransactionRepo, sub: &clap::ArgMatches) -> Result<()> {
    require_login(session)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let ttype: TransactionType = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::msg)?;
    let kind = Kind::from_parts(ttype, sub.get_one::<String>("category").unwrap())
        .map_err(anyhow::Error::msg)?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let notes = sub.get_one::<String>("notes").cloned();

    let new = NewTransaction {
        amount,
        kind,
        date,
        notes,
    };
    match repo.create(&new) {
        Ok(tx) => {
            println!(
                "Recorded {} of {} in {} on {} (id {})",
                tx.kind.transaction_type(),
                fmt_amount(&tx.amount),
                tx.kind.category_name(),
                tx.date,
                tx.id
            );
            Ok(())
        }
        Err(e) => Err(classify_failure(session, e)),
    }
}

fn list(
    session: &mut SessionManager,
    repo: &TransactionRepo,
    sub: &clap::ArgMatches,
) -> Result<()> {
    require_login(session)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_args(sub)?;

    let mut data = match repo.list(&filter) {
        Ok(data) => data,
        Err(e) => return Err(classify_failure(session, e)),
    };
    // Backend orders newest first, so truncation keeps the most recent.
    if let Some(n) = sub.get_one::<usize>("limit") {
        data.truncate(*n);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.transaction_type().to_string(),
                    t.kind.category_name().to_string(),
                    fmt_amount(&t.amount),
                    t.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Type", "Category", "Amount", "Notes"], rows)
        );
    }
    Ok(())
}

fn filter_from_args(sub: &clap::ArgMatches) -> Result<TxFilter> {
    let by_type = sub.get_one::<String>("type");
    let by_category = sub.get_one::<String>("category");
    let from = sub.get_one::<String>("from");
    let to = sub.get_one::<String>("to");

    let picked = [
        by_type.is_some(),
        by_category.is_some(),
        from.is_some() || to.is_some(),
    ]
    .iter()
    .filter(|b| **b)
    .count();
    if picked > 1 {
        anyhow::bail!("use only one of --type, --category, or --from/--to");
    }

    if let Some(t) = by_type {
        return Ok(TxFilter::ByType(t.parse().map_err(anyhow::Error::msg)?));
    }
    if let Some(c) = by_category {
        return Ok(TxFilter::ByCategory(
            lookup_category(c).map_err(anyhow::Error::msg)?,
        ));
    }
    match (from, to) {
        (Some(f), Some(t)) => Ok(TxFilter::ByDateRange {
            start: parse_date(f)?,
            end: parse_date(t)?,
        }),
        (None, None) => Ok(TxFilter::All),
        _ => anyhow::bail!("--from and --to must be given together"),
    }
}

fn delete(
    session: &mut SessionManager,
    repo: &TransactionRepo,
    sub: &clap::ArgMatches,
) -> Result<()> {
    require_login(session)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    // Nothing is reported as removed until the backend confirms it.
    match repo.delete(id) {
        Ok(()) => {
            println!("Deleted transaction {id}.");
            Ok(())
        }
        Err(ApiError::NotFound(_)) => {
            println!("Transaction {id} was already removed.");
            Ok(())
        }
        Err(e) => Err(classify_failure(session, e)),
    }
}

pub fn categories() {
    let mut rows = Vec::new();
    for c in ExpenseCategory::ALL {
        rows.push(vec!["EXPENSE".to_string(), c.as_str().to_string()]);
    }
    for c in IncomeCategory::ALL {
        rows.push(vec!["INCOME".to_string(), c.as_str().to_string()]);
    }
    println!("{}", pretty_table(&["Type", "Category"], rows));
}
