#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz the loose-input boundary and the structured compiler with
    // arbitrary JSON. Errors are fine; panics are not.
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(data) {
        if let Ok(expr) = csq::Expression::from_json(&value) {
            let _ = csq::compile::compile(&expr);
        }
    }
});
