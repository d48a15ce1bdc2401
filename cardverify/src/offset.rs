/*!
    IBM 3624 PIN offsets.

    The natural PIN falls out of the encrypted, decimalized PAN block;
    a selection rule picks which of its sixteen digits stand in as
    validation data. The offset is the digit-wise mod-10 difference
    between the customer PIN and that validation data.
*/

use paycrypt_core::{BlockCipher, DecimalizationTable, DigitError, Pan, Pin, TdesCipher, parse_hex};

use crate::chain::check_tdes_key;
use crate::error::{CardVerifyError, CardVerifyResult};

/**
    How validation digits are drawn from the sixteen natural digits.

    - `Window`: take `length` digits starting at `start`, right padded
      with the `pad` digit (or cut) to `pin_length`.
    - `Mask`: a pattern of literal digits and `N` placeholders, each
      `N` standing for the natural digit at that position.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinSelection {
    Window {
        start: usize,
        length: usize,
        pad: u8,
        pin_length: usize,
    },
    Mask(String),
}

impl PinSelection {
    fn check(&self) -> CardVerifyResult<()> {
        match self {
            Self::Window {
                start,
                length,
                pad,
                pin_length,
            } => {
                if !(4..=12).contains(pin_length) {
                    return Err(CardVerifyError::SelectionLength(*pin_length));
                }
                if *pad > 9 {
                    return Err(CardVerifyError::PadDigit(*pad));
                }
                if *length == 0 || start + length > 16 {
                    return Err(CardVerifyError::Window {
                        start: *start,
                        length: *length,
                    });
                }
                Ok(())
            }
            Self::Mask(mask) => {
                if !(4..=12).contains(&mask.len()) {
                    return Err(CardVerifyError::SelectionLength(mask.len()));
                }
                if let Some(ch) = mask
                    .chars()
                    .find(|ch| !ch.is_ascii_digit() && !matches!(ch, 'N' | 'n'))
                {
                    return Err(CardVerifyError::MaskChar(ch));
                }
                Ok(())
            }
        }
    }

    /** Apply the (already checked) selection to the natural digits. */
    fn select(&self, natural: &str) -> String {
        match self {
            Self::Window {
                start,
                length,
                pad,
                pin_length,
            } => {
                let mut out: String = natural[*start..start + length].to_string();
                out.truncate(*pin_length);
                while out.len() < *pin_length {
                    out.push(char::from(b'0' + pad));
                }
                out
            }
            Self::Mask(mask) => mask
                .chars()
                .zip(natural.chars())
                .map(|(m, n)| if matches!(m, 'N' | 'n') { n } else { m })
                .collect(),
        }
    }
}

/** The validation digits the selection draws for this card. */
pub fn natural_pin(
    pdk: &[u8],
    pan: &Pan,
    table: &DecimalizationTable,
    selection: &PinSelection,
) -> CardVerifyResult<String> {
    selection.check()?;
    check_tdes_key("PDK", pdk)?;

    let block = parse_hex(&pan.rightmost(16))?;
    let mut state = [0u8; 8];
    state.copy_from_slice(&block);
    TdesCipher::new(pdk)?.encrypt_block(&mut state);

    Ok(selection.select(&table.decimalize(&state)))
}

/** Offset that turns the card's natural digits into the customer PIN. */
pub fn pin_offset(
    pdk: &[u8],
    pan: &Pan,
    table: &DecimalizationTable,
    selection: &PinSelection,
    pin: &Pin,
) -> CardVerifyResult<String> {
    let selected = natural_pin(pdk, pan, table, selection)?;
    if pin.as_str().len() != selected.len() {
        return Err(CardVerifyError::PinLength {
            expected: selected.len(),
            found: pin.as_str().len(),
        });
    }
    let offset = pin
        .digits()
        .zip(selected.bytes().map(|b| b - b'0'))
        .map(|(p, n)| char::from(b'0' + (p + 10 - n) % 10))
        .collect();
    Ok(offset)
}

/** Rebuild the customer PIN from a stored offset. */
pub fn pin_from_offset(
    pdk: &[u8],
    pan: &Pan,
    table: &DecimalizationTable,
    selection: &PinSelection,
    offset: &str,
) -> CardVerifyResult<Pin> {
    let selected = natural_pin(pdk, pan, table, selection)?;
    if offset.len() != selected.len() {
        return Err(CardVerifyError::PinLength {
            expected: selected.len(),
            found: offset.len(),
        });
    }
    if let Some(ch) = offset.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(DigitError::NonDigit { kind: "offset", ch }.into());
    }

    let digits: String = offset
        .bytes()
        .map(|b| b - b'0')
        .zip(selected.bytes().map(|b| b - b'0'))
        .map(|(o, n)| char::from(b'0' + (o + n) % 10))
        .collect();
    Ok(Pin::new(&digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const PDK: [u8; 16] = hex!("0123456789ABCDEFFEDCBA9876543210");

    fn pan(s: &str) -> Pan {
        s.parse().unwrap()
    }

    fn pin(s: &str) -> Pin {
        s.parse().unwrap()
    }

    fn window4() -> PinSelection {
        PinSelection::Window {
            start: 0,
            length: 4,
            pad: 0,
            pin_length: 4,
        }
    }

    #[test]
    fn offset_round_trips_through_the_pin() {
        let card = pan("4532111122223333");
        for candidate in ["0000", "1234", "9999", "4096"] {
            let offset = pin_offset(
                &PDK,
                &card,
                &DecimalizationTable::VISA,
                &window4(),
                &pin(candidate),
            )
            .unwrap();
            let recovered =
                pin_from_offset(&PDK, &card, &DecimalizationTable::VISA, &window4(), &offset)
                    .unwrap();
            assert_eq!(recovered.as_str(), candidate);
        }
    }

    #[test]
    fn mask_selection_round_trips() {
        let card = pan("4532111122223333");
        let selection = PinSelection::Mask("NN7NN2".to_string());
        let offset = pin_offset(
            &PDK,
            &card,
            &DecimalizationTable::VISA,
            &selection,
            &pin("135790"),
        )
        .unwrap();
        let recovered =
            pin_from_offset(&PDK, &card, &DecimalizationTable::VISA, &selection, &offset).unwrap();
        assert_eq!(recovered.as_str(), "135790");
    }

    #[test]
    fn window_mechanics_with_a_degenerate_table() {
        // All-zero table: the sixteen natural digits are all zero, so
        // selection behavior is directly visible.
        let table: DecimalizationTable = "0000000000000000".parse().unwrap();
        let card = pan("4532111122223333");

        let padded = PinSelection::Window {
            start: 2,
            length: 3,
            pad: 5,
            pin_length: 6,
        };
        assert_eq!(
            natural_pin(&PDK, &card, &table, &padded).unwrap(),
            "000555"
        );

        let mask = PinSelection::Mask("12N4N0".to_string());
        assert_eq!(natural_pin(&PDK, &card, &table, &mask).unwrap(), "120400");

        // Zero validation digits make the offset equal the PIN.
        let offset = pin_offset(&PDK, &card, &table, &window4(), &pin("1234")).unwrap();
        assert_eq!(offset, "1234");
    }

    #[test]
    fn selection_validation() {
        let card = pan("4532111122223333");
        let table = DecimalizationTable::VISA;

        let too_short = PinSelection::Window {
            start: 0,
            length: 3,
            pad: 0,
            pin_length: 3,
        };
        assert_eq!(
            natural_pin(&PDK, &card, &table, &too_short).unwrap_err(),
            CardVerifyError::SelectionLength(3)
        );

        let out_of_range = PinSelection::Window {
            start: 14,
            length: 4,
            pad: 0,
            pin_length: 4,
        };
        assert_eq!(
            natural_pin(&PDK, &card, &table, &out_of_range).unwrap_err(),
            CardVerifyError::Window {
                start: 14,
                length: 4
            }
        );

        let bad_pad = PinSelection::Window {
            start: 0,
            length: 4,
            pad: 11,
            pin_length: 4,
        };
        assert_eq!(
            natural_pin(&PDK, &card, &table, &bad_pad).unwrap_err(),
            CardVerifyError::PadDigit(11)
        );

        let bad_mask = PinSelection::Mask("12X4".to_string());
        assert_eq!(
            natural_pin(&PDK, &card, &table, &bad_mask).unwrap_err(),
            CardVerifyError::MaskChar('X')
        );

        let short_mask = PinSelection::Mask("N12".to_string());
        assert_eq!(
            natural_pin(&PDK, &card, &table, &short_mask).unwrap_err(),
            CardVerifyError::SelectionLength(3)
        );
    }

    #[test]
    fn pin_length_must_match_the_selection() {
        let card = pan("4532111122223333");
        let err = pin_offset(
            &PDK,
            &card,
            &DecimalizationTable::VISA,
            &window4(),
            &pin("123456"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CardVerifyError::PinLength {
                expected: 4,
                found: 6
            }
        );

        let err = pin_from_offset(&PDK, &card, &DecimalizationTable::VISA, &window4(), "12")
            .unwrap_err();
        assert_eq!(
            err,
            CardVerifyError::PinLength {
                expected: 4,
                found: 2
            }
        );
    }
}
