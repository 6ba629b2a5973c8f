#![no_main]
use libfuzzer_sys::fuzz_target;

// Lexing and parsing arbitrary bytes as a JMESPath expression must never
// panic, only ever return a `CompileError`.
fuzz_target!(|data: &[u8]| {
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    let _ = jmespath_query::compile(src);
});
