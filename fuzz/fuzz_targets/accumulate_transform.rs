#![no_main]

use gestura_fuzz::{check_accumulator_bounds, FuzzTick};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ticks: Vec<FuzzTick>| {
    check_accumulator_bounds(&ticks);
});
