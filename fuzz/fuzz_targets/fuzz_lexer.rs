#![no_main]

use libfuzzer_sys::fuzz_target;
use pawk::Lexer;

fuzz_target!(|data: &str| {
    // Tokens must always concatenate back to the input
    let mut lexer = Lexer::new(data);
    if let Ok(tokens) = lexer.tokenize() {
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, data);
    }
});
