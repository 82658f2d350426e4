#![no_main]

use drawlines::{Coordinate, Line, LineLabels, LineType};
use glam::DVec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Coordinate::parse_with_default(text, 10.0);

    for line_type in LineType::ALL {
        let mut line = Line::new(0, 1, line_type, LineLabels::default(), DVec2::ZERO, DVec2::ONE);
        let before = line.clone();
        if line.parse_response(text).is_err() {
            assert_eq!(line, before, "fehlgeschlagenes Parsen darf die Linie nicht ändern");
        }
    }
});
