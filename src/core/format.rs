/*!
Display helpers for byte buffers.
*/

use std::fmt;

/// Shortened hex view of a byte buffer, built by [`hex_chop`]
#[derive(Debug, Clone, Copy)]
pub struct HexChop<'a> {
    bytes: &'a [u8],
    from_start: usize,
    from_end: usize,
}

/// Show the first `from_start` and last `from_end` bytes of `bytes` as
/// uppercase hex, with ` ... ` between them. Short buffers are shown whole.
pub fn hex_chop(bytes: &[u8], from_start: usize, from_end: usize) -> HexChop<'_> {
    HexChop {
        bytes,
        from_start,
        from_end,
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:02X}", byte)?;
    }
    Ok(())
}

impl fmt::Display for HexChop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_start.saturating_add(self.from_end) >= self.bytes.len() {
            return write_hex(f, self.bytes);
        }
        write_hex(f, &self.bytes[..self.from_start])?;
        f.write_str(" ... ")?;
        write_hex(f, &self.bytes[self.bytes.len() - self.from_end..])
    }
}
