#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(command) = std::str::from_utf8(data) {
        // Tokenizing arbitrary input should never panic, and without quotes
        // the tokens must rejoin to the input.
        if let Ok(tokens) = watchman::tokenize(command) {
            if !command.contains(&['"', '\''][..]) {
                assert_eq!(tokens.join(" "), command);
            }
        }
    }
});
