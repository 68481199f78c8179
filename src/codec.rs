//! External representations of a single [`Share`].
//!
//! Binary: `[index][payload...]`. Text: `"<decimal index>-<hex payload>"`,
//! lowercase on encode and case-insensitive on decode.

use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::CodecError;
use crate::shamir::Share;

const SEPARATOR: char = '-';

fn invalid(reason: impl Into<String>) -> CodecError {
    CodecError::InvalidRepresentation(reason.into())
}

fn check_index(index: u8) -> Result<u8, CodecError> {
    if index == 0 {
        return Err(invalid("share index 0 is reserved for the secret"));
    }
    Ok(index)
}

impl Share {
    /// Binary form: the index byte followed by the payload
    ///
    /// # Example
    /// ```
    /// use sss_gf256::Share;
    ///
    /// let share = Share::new(3, vec![0xde, 0xad]);
    /// assert_eq!(&share.to_bytes()[..], &[3, 0xde, 0xad]);
    /// ```
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(1 + self.payload.len());
        buf.put_u8(self.index);
        buf.put_slice(&self.payload);
        buf.freeze()
    }

    /// Parses the binary form
    ///
    /// # Errors
    /// [`CodecError::InvalidRepresentation`] when the input holds no payload
    /// byte or the index is 0.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        match bytes {
            [index, payload @ ..] if !payload.is_empty() => {
                Ok(Self::new(check_index(*index)?, payload.to_vec()))
            }
            _ => Err(invalid(format!(
                "binary share needs at least 2 bytes, got {}",
                bytes.len()
            ))),
        }
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.index, hex::encode(&self.payload))
    }
}

impl FromStr for Share {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, payload) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| invalid("missing '-' separator"))?;

        let index = index
            .parse::<u8>()
            .map_err(|err| invalid(format!("bad index {index:?}: {err}")))?;
        let payload =
            hex::decode(payload).map_err(|err| invalid(format!("bad hex payload: {err}")))?;

        Ok(Self::new(check_index(index)?, payload))
    }
}

impl From<Share> for String {
    fn from(share: Share) -> Self {
        share.to_string()
    }
}

impl TryFrom<String> for Share {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
