/*!
    ISO 9564-1 PIN block codec.

    Blocks are assembled as nibble sequences and surfaced as uppercase hex
    strings. Formats 0-3 are 16 nibbles (control nibble, one-nibble PIN
    length, PIN digits, fill); format 4 is 32 nibbles with a two-digit PIN
    length field.

    The PAN field for the XORed formats is `0000` followed by the 12 PAN
    digits immediately left of the check digit, zero-extended on the left
    when the PAN is short. Format 4 widens the field to 32 nibbles with `F`
    fill.
*/

use rand::Rng;

use paycrypt_core::{HexError, Pan, Pin};

use crate::error::PinBlockError;
use crate::format::PinBlockFormat;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/**
    Fields recovered from a PIN block.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPinBlock {
    pub format: PinBlockFormat,
    pub pin: Pin,
}

/**
    Encode a PIN into the requested block format, as uppercase hex.

    `pan` is required for formats 0, 3 and 4, optional for format 2 (the
    block is XORed with the PAN field only when one is given) and ignored
    for format 1.
*/
pub fn encode(
    format: PinBlockFormat,
    pin: &Pin,
    pan: Option<&Pan>,
) -> Result<String, PinBlockError> {
    if format.requires_pan() && pan.is_none() {
        return Err(PinBlockError::PanRequired(format));
    }
    let mut nibbles = pin_field(format, pin);
    if format != PinBlockFormat::Iso1 {
        if let Some(pan) = pan {
            xor_in_place(&mut nibbles, &pan_field(format, pan));
        }
    }
    Ok(to_hex(&nibbles))
}

/**
    Decode a PIN block back into its PIN.

    The PAN rules match [`encode`]. The control nibble must equal the
    requested format's tag and the recovered PIN length and digits must be
    valid; random fill (formats 1 and 3) is not inspected.
*/
pub fn decode(
    format: PinBlockFormat,
    block: &str,
    pan: Option<&Pan>,
) -> Result<DecodedPinBlock, PinBlockError> {
    let block = block.trim();
    if block.len() != format.block_len() {
        return Err(PinBlockError::BlockLength {
            format,
            expected: format.block_len(),
            found: block.len(),
        });
    }
    if format.requires_pan() && pan.is_none() {
        return Err(PinBlockError::PanRequired(format));
    }

    let mut nibbles = parse_nibbles(block)?;
    if format != PinBlockFormat::Iso1 {
        if let Some(pan) = pan {
            xor_in_place(&mut nibbles, &pan_field(format, pan));
        }
    }

    if nibbles[0] != format.tag() {
        return Err(PinBlockError::FormatTag {
            expected: format,
            found: nibbles[0],
        });
    }

    let (len, pin_start) = if format == PinBlockFormat::Iso4 {
        (((nibbles[1] as usize) << 4) | nibbles[2] as usize, 3)
    } else {
        (nibbles[1] as usize, 2)
    };
    if !(4..=12).contains(&len) {
        return Err(PinBlockError::PinLength(len));
    }

    let mut pin = String::with_capacity(len);
    for &n in &nibbles[pin_start..pin_start + len] {
        if n > 9 {
            return Err(PinBlockError::PinDigit(n));
        }
        pin.push((b'0' + n) as char);
    }

    Ok(DecodedPinBlock {
        format,
        pin: Pin::new(&pin)?,
    })
}

/** Control nibble, PIN length field, PIN digits, then fill to block width. */
fn pin_field(format: PinBlockFormat, pin: &Pin) -> Vec<u8> {
    let mut out = Vec::with_capacity(format.block_len());
    out.push(format.tag());
    let len = pin.as_str().len() as u8;
    if format == PinBlockFormat::Iso4 {
        out.push(len >> 4);
        out.push(len & 0x0F);
    } else {
        out.push(len);
    }
    out.extend(pin.digits());

    let target = format.block_len();
    match format {
        PinBlockFormat::Iso1 | PinBlockFormat::Iso3 => {
            let mut rng = rand::rng();
            while out.len() < target {
                out.push(rng.random_range(0..16));
            }
        }
        _ => out.resize(target, 0xF),
    }
    out
}

fn pan_field(format: PinBlockFormat, pan: &Pan) -> Vec<u8> {
    let mut out = vec![0u8; 4];
    out.extend(pan.rightmost_excluding_check(12).bytes().map(|b| b - b'0'));
    if format == PinBlockFormat::Iso4 {
        out.resize(32, 0xF);
    }
    out
}

fn xor_in_place(nibbles: &mut [u8], field: &[u8]) {
    for (n, f) in nibbles.iter_mut().zip(field) {
        *n ^= f;
    }
}

fn to_hex(nibbles: &[u8]) -> String {
    nibbles
        .iter()
        .map(|&n| HEX_UPPER[(n & 0x0F) as usize] as char)
        .collect()
}

fn parse_nibbles(s: &str) -> Result<Vec<u8>, PinBlockError> {
    s.chars()
        .enumerate()
        .map(|(index, ch)| {
            ch.to_digit(16)
                .map(|v| v as u8)
                .ok_or(PinBlockError::Hex(HexError::InvalidChar { ch, index }))
        })
        .collect()
}
