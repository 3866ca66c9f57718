#![no_main]

use gestura_fuzz::{check_classifier_totality, FuzzFrame};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|frames: Vec<FuzzFrame>| {
    check_classifier_totality(&frames);
});
