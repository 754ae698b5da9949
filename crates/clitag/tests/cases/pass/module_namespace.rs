// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Constructor placed in a namespace module with a custom name.

use clitag::{Command, FromArgs};

#[derive(Command, Debug)]
#[command(module = "cli", constructor = "parse")]
pub struct Fetch {
    #[cli("type:option short:r default:3")]
    pub retries: u8,
    pub url: String,
}

fn main() {
    let fetch = cli::parse(["-r=5", "https://example.com"]).unwrap();
    assert_eq!(fetch.retries, 5);

    let fetch = Fetch::from_args(["https://example.com"]).unwrap();
    assert_eq!(fetch.retries, 3);
}
