//! Decoding of obfuscated VTOL VR save files
//!
//! Binary variants of mission and map files (`.vtsb`, `.vtmb`) are the plain
//! text format with every byte shifted by a fixed additive formula. The files
//! carry a trailing `b` as their only marker.

/// Trailing byte that marks an obfuscated file
pub const OBFUSCATION_MARKER: u8 = b'b';

/// Errors that can occur when configuring the decoder
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Formula modulus must be positive, got {0}")]
    InvalidModulus(i64),
}

/// The two constants of the additive decode formula
///
/// A byte `v` decodes to the code point `(v - a) % b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaConstants {
    a: i64,
    b: i64,
}

impl FormulaConstants {
    pub fn new(a: i64, b: i64) -> Result<Self, DecodeError> {
        if b <= 0 {
            return Err(DecodeError::InvalidModulus(b));
        }
        Ok(Self { a, b })
    }

    pub fn offset(&self) -> i64 {
        self.a
    }

    pub fn modulus(&self) -> i64 {
        self.b
    }

    /// Apply the formula to one byte
    ///
    /// Uses the truncated remainder, so bytes below the offset yield
    /// negative values. Computed in `i128` so no offset can overflow.
    fn apply(&self, byte: u8) -> i128 {
        (i128::from(byte) - i128::from(self.a)) % i128::from(self.b)
    }
}

/// How a buffer was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Obfuscated,
    Plain,
}

/// Text recovered from one input buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    text: String,
    encoding: SourceEncoding,
    anomalies: usize,
}

impl DecodedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Number of bytes that decoded to an invalid scalar value
    ///
    /// Each of them was replaced with U+FFFD.
    pub fn anomalies(&self) -> usize {
        self.anomalies
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for DecodedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Returns true if the buffer carries the obfuscation marker
pub fn is_obfuscated(data: &[u8]) -> bool {
    data.last() == Some(&OBFUSCATION_MARKER)
}

/// Byte decoder bound to one set of formula constants
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    constants: FormulaConstants,
}

impl Decoder {
    pub fn new(constants: FormulaConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> FormulaConstants {
        self.constants
    }

    /// Decode a mission or map file to text
    ///
    /// Buffers ending in `b` are deobfuscated byte by byte (the marker
    /// included). Anything else is read as UTF-8, lossily.
    pub fn decode(&self, data: &[u8]) -> DecodedText {
        if !is_obfuscated(data) {
            return DecodedText {
                text: String::from_utf8_lossy(data).into_owned(),
                encoding: SourceEncoding::Plain,
                anomalies: 0,
            };
        }

        let mut text = String::with_capacity(data.len());
        let mut anomalies = 0;
        for &byte in data {
            match self.decode_char(byte) {
                Some(c) => text.push(c),
                None => {
                    anomalies += 1;
                    text.push(char::REPLACEMENT_CHARACTER);
                }
            }
        }

        if anomalies > 0 {
            tracing::warn!(
                anomalies,
                len = data.len(),
                "obfuscated input produced invalid code points"
            );
        }

        DecodedText {
            text,
            encoding: SourceEncoding::Obfuscated,
            anomalies,
        }
    }

    /// Decode a single obfuscated byte
    ///
    /// Returns None when the result is negative or not a Unicode scalar value.
    pub fn decode_char(&self, byte: u8) -> Option<char> {
        let code = self.constants.apply(byte);
        u32::try_from(code).ok().and_then(char::from_u32)
    }

    /// Decode an obfuscated binary asset (e.g. `.pngb` images) to raw bytes
    ///
    /// Results are truncated to a byte, so negative values wrap modulo 256.
    pub fn decode_raw(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .map(|&byte| self.constants.apply(byte) as u8)
            .collect()
    }
}
