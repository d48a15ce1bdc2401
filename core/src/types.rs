use core::fmt;
use core::str::FromStr;

use crate::error::DigitError;

/**
    Primary account number: 12-19 ASCII digits, check digit last.

    Stored as the digit string; the engines slice windows out of it
    (rightmost-12 excluding the check digit for ISO 9564 PAN fields,
    rightmost-16 for CVV data blocks and PVV/offset encryption inputs).
    No Luhn validation is applied: test PANs are routinely synthetic.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pan(String);

impl Pan {
    pub fn new(digits: &str) -> Result<Self, DigitError> {
        check_digits("PAN", digits, 12, 19, "12-19")?;
        Ok(Self(digits.to_owned()))
    }

    /** The digit string. */
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /** Rightmost `n` digits including the check digit, zero-padded on the left. */
    pub fn rightmost(&self, n: usize) -> String {
        pad_left(&self.0, n)
    }

    /**
        Rightmost `n` digits with the trailing check digit excluded,
        zero-padded on the left. `rightmost_excluding_check(12)` is the
        ISO 9564 PAN field.
    */
    pub fn rightmost_excluding_check(&self, n: usize) -> String {
        pad_left(&self.0[..self.0.len() - 1], n)
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pan {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/**
    Personal identification number: 4-12 ASCII digits.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pin(String);

impl Pin {
    pub fn new(digits: &str) -> Result<Self, DigitError> {
        check_digits("PIN", digits, 4, 12, "4-12")?;
        Ok(Self(digits.to_owned()))
    }

    /** The digit string. */
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /** Digit values 0-9, left to right. */
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pin {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/**
    Decimalization table: maps each of the 16 nibble values to a decimal
    digit. The IBM 3624 scheme runs every ciphertext nibble through the
    table; the Visa PVV scheme uses it only for the second extraction pass
    (nibble values 10-15).

    The conventional table is `0123456789012345`, which leaves 0-9 alone
    and maps A-F to 0-5.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalizationTable([u8; 16]);

impl DecimalizationTable {
    /** The conventional Visa table, `0123456789012345`. */
    pub const VISA: Self = Self([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5]);

    pub fn new(digits: &str) -> Result<Self, DigitError> {
        check_digits("decimalization table", digits, 16, 16, "16")?;
        let mut table = [0u8; 16];
        for (i, b) in digits.bytes().enumerate() {
            table[i] = b - b'0';
        }
        Ok(Self(table))
    }

    /** Map a nibble value (0-15) to its decimal digit (0-9). */
    pub fn digit(&self, nibble: u8) -> u8 {
        self.0[(nibble & 0x0F) as usize]
    }

    /** Map every nibble of `bytes` to a decimal digit string. */
    pub fn decimalize(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2);
        for b in bytes {
            out.push((b'0' + self.digit(b >> 4)) as char);
            out.push((b'0' + self.digit(b & 0x0F)) as char);
        }
        out
    }
}

impl fmt::Display for DecimalizationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for DecimalizationTable {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn check_digits(
    kind: &'static str,
    s: &str,
    min: usize,
    max: usize,
    expected: &'static str,
) -> Result<(), DigitError> {
    if s.len() < min || s.len() > max {
        return Err(DigitError::Length {
            kind,
            expected,
            found: s.len(),
        });
    }
    if let Some(ch) = s.chars().find(|c| !c.is_ascii_digit()) {
        return Err(DigitError::NonDigit { kind, ch });
    }
    Ok(())
}

fn pad_left(digits: &str, n: usize) -> String {
    if digits.len() >= n {
        digits[digits.len() - n..].to_owned()
    } else {
        format!("{digits:0>n$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_accepts_12_to_19_digits() {
        assert!(Pan::new("401234567890").is_ok());
        assert!(Pan::new("4123456789012345").is_ok());
        assert!(Pan::new("4123456789012345678").is_ok());
    }

    #[test]
    fn pan_rejects_bad_input() {
        assert!(matches!(
            Pan::new("40123456789").unwrap_err(),
            DigitError::Length { found: 11, .. }
        ));
        assert!(matches!(
            Pan::new("41234567890123456789").unwrap_err(),
            DigitError::Length { found: 20, .. }
        ));
        assert!(matches!(
            Pan::new("41234567890A2345").unwrap_err(),
            DigitError::NonDigit { ch: 'A', .. }
        ));
    }

    #[test]
    fn pan_windows() {
        // 13-digit PAN: drop the check digit 9, take the remaining 12.
        let pan = Pan::new("4012345678909").unwrap();
        assert_eq!(pan.rightmost_excluding_check(12), "401234567890");
        assert_eq!(pan.rightmost_excluding_check(11), "01234567890");
        assert_eq!(pan.rightmost(16), "0004012345678909");

        // 16-digit PAN: rightmost 12 of the first 15 digits.
        let pan = Pan::new("4123456789012345").unwrap();
        assert_eq!(pan.rightmost_excluding_check(12), "345678901234");

        // 12-digit PAN: only 11 digits left of the check digit, pad with 0.
        let pan = Pan::new("401234567890").unwrap();
        assert_eq!(pan.rightmost_excluding_check(12), "040123456789");
    }

    #[test]
    fn pin_accepts_4_to_12_digits() {
        assert!(Pin::new("1234").is_ok());
        assert!(Pin::new("123456789012").is_ok());
        assert!(Pin::new("123").is_err());
        assert!(Pin::new("1234567890123").is_err());
        assert!(Pin::new("12a4").is_err());
    }

    #[test]
    fn pin_digit_values() {
        let pin = Pin::new("9014").unwrap();
        assert_eq!(pin.digits().collect::<Vec<_>>(), vec![9, 0, 1, 4]);
    }

    #[test]
    fn visa_table_maps_high_nibbles_down() {
        let t = DecimalizationTable::VISA;
        assert_eq!(t.digit(0x0), 0);
        assert_eq!(t.digit(0x9), 9);
        assert_eq!(t.digit(0xA), 0);
        assert_eq!(t.digit(0xF), 5);
        assert_eq!(t, "0123456789012345".parse().unwrap());
    }

    #[test]
    fn table_decimalizes_nibblewise() {
        let t = DecimalizationTable::VISA;
        assert_eq!(t.decimalize(&[0x0F, 0xAB, 0x93]), "050193");

        let custom = DecimalizationTable::new("9876543210987654").unwrap();
        assert_eq!(custom.decimalize(&[0x0F, 0x9A]), "9409");
    }

    #[test]
    fn table_rejects_bad_input() {
        assert!(DecimalizationTable::new("012345678901234").is_err());
        assert!(DecimalizationTable::new("01234567890123456").is_err());
        assert!(DecimalizationTable::new("012345678901234F").is_err());
    }

    #[test]
    fn display_round_trips() {
        let pan = Pan::new("4012345678909").unwrap();
        assert_eq!(pan.to_string(), "4012345678909");
        assert_eq!(DecimalizationTable::VISA.to_string(), "0123456789012345");
    }
}
