#![no_main]
use libfuzzer_sys::fuzz_target;
use tsvchart::{Options, parse, parse_with_options};

fuzz_target!(|data: &[u8]| {
    if let Ok(code) = std::str::from_utf8(data) {
        let lenient = parse(code);
        if let Ok(strict) = parse_with_options(code, &Options::strict()) {
            if strict != lenient {
                panic!(
                    "Differential fuzzing: strict and lenient disagree!\nInput: {:?}\nLenient: {:?}\nStrict: {:?}",
                    code, lenient, strict
                );
            }
        }
    }
});
