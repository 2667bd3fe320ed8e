use log::{debug, trace, warn};
use std::io::{self, BufRead, ErrorKind, Write};

pub const PROMPT: &str = "Entrez un nombre entre 0 et 255 : ";

/// Value the reader falls back to when nothing could be scanned.
pub const DEFAULT_VALUE: i32 = 0;

pub fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()
}

/// Reads one integer, falling back to [`DEFAULT_VALUE`] on any failure.
///
/// Neither malformed input nor I/O errors reach the caller. Range is not
/// checked either, `1000` comes back as `1000`.
pub fn read_integer<R: BufRead>(reader: &mut R) -> i32 {
    match scan_integer(reader) {
        Ok(Some(value)) => {
            debug!("scanned integer {}", value);
            value
        }
        Ok(None) => {
            debug!("no integer on input, keeping {}", DEFAULT_VALUE);
            DEFAULT_VALUE
        }
        Err(e) => {
            warn!("failed to read input ({}), keeping {}", e, DEFAULT_VALUE);
            DEFAULT_VALUE
        }
    }
}

/// Scans a signed decimal integer the way `scanf("%d")` does.
///
/// Leading whitespace is skipped, an optional sign is accepted and the
/// longest run of digits is converted. The byte that ends the number stays
/// in the reader. Returns `None` if no digit could be read.
///
/// Magnitudes beyond the 64-bit range saturate, the result is then
/// truncated to its low 32 bits.
pub fn scan_integer<R: BufRead>(reader: &mut R) -> io::Result<Option<i32>> {
    while let Some(byte) = peek(reader)? {
        if !is_space(byte) {
            break;
        }
        reader.consume(1);
    }

    let negative = match peek(reader)? {
        Some(b'-') => {
            reader.consume(1);
            true
        }
        Some(b'+') => {
            reader.consume(1);
            false
        }
        _ => false,
    };

    let mut magnitude: u64 = 0;
    let mut digits = 0_usize;

    while let Some(byte) = peek(reader)? {
        if !byte.is_ascii_digit() {
            trace!("digit run ended at {:#04x}", byte);
            break;
        }
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
        digits += 1;
        reader.consume(1);
    }

    if digits == 0 {
        return Ok(None);
    }

    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    let wide = signed.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;

    trace!("scanned {} digits, wide value {}", digits, wide);

    Ok(Some(wide as i32))
}

fn peek<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

// space, \t, \n, \v, \f, \r
fn is_space(byte: u8) -> bool {
    byte == b' ' || (b'\t'..=b'\r').contains(&byte)
}
