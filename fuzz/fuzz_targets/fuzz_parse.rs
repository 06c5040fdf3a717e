#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen::Program;

fuzz_target!(|text: &str| {
    // Parsing must never panic; accepted text must round-trip exactly.
    if let Ok(program) = text.parse::<Program>() {
        let reencoded = program.to_string().replace(' ', "");
        assert_eq!(reencoded, text);

        let reparsed: Program = reencoded.parse().expect("re-encoded text decodes");
        assert_eq!(reparsed, program);
    }
});
