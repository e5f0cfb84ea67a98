pub fn is_bit_set(value: u8, bit: u8) -> bool {
    (value & (1 << bit)) != 0
}

/// Sign-extends the low `bits` bits of `value`.
#[inline]
pub fn sign_extend(value: u8, bits: u32) -> i8 {
    debug_assert_le!(bits, 8);
    let shift = 8 - bits;
    ((value << shift) as i8) >> shift
}

/// Renders a byte the way the LED bank shows it, MSB first.
pub fn led_pattern(value: u8) -> String {
    (0..8).rev().map(|bit| if is_bit_set(value, bit) { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0b0111, 4), 7);
        assert_eq!(sign_extend(0b1000, 4), -8);
        assert_eq!(sign_extend(0b1111, 4), -1);
        assert_eq!(sign_extend(0xF3, 4), 3);
        assert_eq!(sign_extend(0x80, 8), -128);
    }

    #[test]
    fn test_led_pattern() {
        assert_eq!(led_pattern(0), "00000000");
        assert_eq!(led_pattern(0b1010_0011), "10100011");
    }
}
