#![no_main]

use libfuzzer_sys::fuzz_target;
use qcompass::{Session, SessionCommand};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut session = Session::new();
        for line in input.lines() {
            if let Ok(Some(command)) = SessionCommand::parse(line) {
                session.apply(command);
            }
        }
    }
});
