#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz the legacy boolean compiler with arbitrary JSON
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(data) {
        let _ = csq::compile::compile_boolean(&value);
    }
});
