#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lumen::{execute, Instruction, Program};

/// Raw instruction values; the segment rules are deliberately not
/// enforced so the simulator's defenses get exercised too.
#[derive(Arbitrary, Debug)]
struct ExecuteInput {
    /// One 3-bit value per program slot (high bits are masked off).
    slots: [u8; 28],
}

fuzz_target!(|input: ExecuteInput| {
    let text: String = input
        .slots
        .iter()
        .map(|&bits| Instruction::from_bits(u32::from(bits)).symbol())
        .collect();
    let program: Program = text.parse().expect("symbol text decodes");

    // Execution must halt for every program, with fitness bounded by the
    // two goal lights and the tallest terrain on the map.
    let fitness = execute(&program);
    assert!(fitness.lights_lit() <= 2);
    assert!(fitness.max_height() <= 4);
    assert_eq!(
        fitness.score(),
        u32::from(fitness.lights_lit()) * 256 + u32::from(fitness.max_height())
    );

    // A second run observes no state from the first.
    assert_eq!(execute(&program), fitness);
});
