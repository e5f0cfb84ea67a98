/// Counts up on the LEDs: clears every register, points R3 at the I/O port, then loops on
/// store / add / jump-back.
#[rustfmt::skip]
pub const INCREMENT_LEDS: [u8; 14] = [
    0b0101_0000, // XOR R0, R0
    0b0101_0101, // XOR R1, R1
    0b0101_1010, // XOR R2, R2
    0b0101_1111, // XOR R3, R3
    0b1010_1111, // LI 0xF
    0b1011_1111, // LUI 0xF
    0b0110_1100, // ADD R3, R0
    0b0101_0000, // XOR R0, R0
    0b1001_1100, // SW R3, R0
    0b1010_0001, // LI 0x1
    0b0110_0100, // ADD R1, R0
    0b1001_1100, // SW R3, R0
    0b0110_0001, // ADD R0, R1
    0b1111_0001, // JIR 0x1
];

/// The same program in assembly form.
pub const INCREMENT_LEDS_SOURCE: &str = "\
; Clear every register.
        xor r0, r0
        xor r1, r1
        xor r2, r2
        xor r3, r3
; r3 = 0xFF, the I/O port.
        li 0xF
        lui 0xF
        add r3, r0
        xor r0, r0
        sw r3, r0
; r1 is the step.
        li 1
        add r1, r0
loop:   sw r3, r0
        add r0, r1
        jir loop
";
