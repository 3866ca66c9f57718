#![no_main]

use gestura_structure::parse_pdb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(structure) = parse_pdb(text) {
            assert!(structure.center.is_finite() || structure.is_empty());
        }
    }
});
