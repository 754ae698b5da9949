// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Every supported field type as an option.

use clitag::Command;

#[derive(Command, Debug, Default)]
pub struct Scalars {
    #[cli("type:option")]
    pub text: String,
    #[cli("type:option")]
    pub native: isize,
    #[cli("type:option")]
    pub tiny: i8,
    #[cli("type:option")]
    pub small: i16,
    #[cli("type:option")]
    pub medium: i32,
    #[cli("type:option")]
    pub large: i64,
    #[cli("type:option")]
    pub unative: usize,
    #[cli("type:option")]
    pub utiny: u8,
    #[cli("type:option")]
    pub usmall: u16,
    #[cli("type:option")]
    pub umedium: u32,
    #[cli("type:option")]
    pub ularge: u64,
    #[cli("type:option")]
    pub single: f32,
    #[cli("type:option")]
    pub double: f64,
    #[cli("type:option")]
    pub flag: bool,
}

fn main() {
    let scalars = new_scalars(["--tiny=-8", "--double=2.5", "--flag=t"]).unwrap();
    assert_eq!(scalars.tiny, -8);
    assert_eq!(scalars.double, 2.5);
    assert!(scalars.flag);
}
