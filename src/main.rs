// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendtrack::{api, cli, commands, repo, session, store};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::CredentialStore::open_or_init()?;
    let api = api::ApiClient::new(api::base_url(), &store)?;
    let mut session = session::SessionManager::new(&store, &api);
    // The session must be resolved before any command renders
    // authenticated-vs-anonymous output.
    session.bootstrap();
    let repo = repo::TransactionRepo::new(&api);

    match matches.subcommand() {
        Some(("signup", sub)) => commands::auth::signup(&mut session, sub)?,
        Some(("login", sub)) => commands::auth::login(&mut session, sub)?,
        Some(("logout", _)) => commands::auth::logout(&mut session),
        Some(("whoami", _)) => commands::auth::whoami(&session),
        Some(("tx", sub)) => commands::tx::handle(&mut session, &repo, sub)?,
        Some(("summary", sub)) => commands::report::handle(&mut session, &repo, sub)?,
        Some(("categories", _)) => commands::tx::categories(),
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
