#![no_main]

use libfuzzer_sys::fuzz_target;
use pawk::{Config, compile};

fuzz_target!(|args: Vec<String>| {
    // Compilation may reject input but must never panic
    let _ = compile(&args, &Config::default());
});
