// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command made of positional arguments only.

use clitag::Command;

#[derive(Command, Debug)]
pub struct CopyFile {
    pub src: String,
    pub dst: String,
}

fn main() {
    let copy = new_copy_file(["a.txt", "b.txt"]).unwrap();
    assert_eq!(copy.src, "a.txt");
    assert_eq!(copy.dst, "b.txt");
}
