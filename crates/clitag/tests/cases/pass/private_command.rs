// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Private command with a raw identifier and no options.

#![deny(warnings)]

use clitag::Command;

#[derive(Command, Debug)]
struct Check {
    r#type: String,
}

fn main() {
    let check = new_check(["unit"]).unwrap();
    assert_eq!(check.r#type, "unit");
    assert_eq!(new_check(["--type=unit"]).unwrap().r#type, "--type=unit");
    assert!(new_check(["unit", "extra"]).is_err());
}
