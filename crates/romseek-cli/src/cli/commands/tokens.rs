//! `romseek tokens <query>` – show normalized search tokens.

use romseek_core::normalize;

pub fn run_tokens(query: &str) {
    for token in normalize(query) {
        println!("{token:?}");
    }
}
