// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::error::ApiError;
use crate::session::{SessionManager, SessionState};

pub fn signup(session: &mut SessionManager, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    match session.signup(name, email, password) {
        Ok(profile) => {
            println!(
                "Welcome, {}! You are signed in as {}.",
                profile.name, profile.email
            );
            Ok(())
        }
        Err(e) => Err(auth_failure(e)),
    }
}

pub fn login(session: &mut SessionManager, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    match session.login(email, password) {
        Ok(profile) => {
            println!("Welcome back, {}!", profile.name);
            Ok(())
        }
        Err(e) => Err(auth_failure(e)),
    }
}

pub fn logout(session: &mut SessionManager) {
    session.logout();
    println!("Logged out.");
}

pub fn whoami(session: &SessionManager) {
    if session.state() != SessionState::Authenticated {
        println!("Not logged in.");
        return;
    }
    match session.profile() {
        Some(p) => println!("{} <{}> (user id {})", p.name, p.email, p.user_id),
        None => println!("Logged in, but no profile is stored."),
    }
}

// Bad credentials and an unreachable service must read differently: one asks
// the user to re-type, the other to come back later.
fn auth_failure(err: ApiError) -> anyhow::Error {
    match err {
        ApiError::Auth { .. } => anyhow::anyhow!("Invalid email or password."),
        ApiError::Unavailable(msg) => {
            anyhow::anyhow!("Service unavailable: {msg}. Try again shortly.")
        }
        other => anyhow::Error::new(other),
    }
}
