#![no_main]

use libfuzzer_sys::fuzz_target;
use watchman::ChainMode;

fuzz_target!(|data: &[u8]| {
    if let Ok(command) = std::str::from_utf8(data) {
        for mode in [ChainMode::None, ChainMode::And, ChainMode::Then] {
            // Either every link builds or none does.
            if let Ok(specs) = watchman::build_commands(command, mode) {
                assert_eq!(specs.len(), watchman::split_chain(command, mode).len());
                assert!(specs.iter().all(|spec| !spec.program().is_empty()));
            }
        }
    }
});
