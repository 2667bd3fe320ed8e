use std::ops::{Index, IndexMut};

pub const BUFFER_SIZE: usize = 5;

/// Slot that is meant to hold the string terminator.
pub const TERMINATOR_SLOT: usize = BUFFER_SIZE - 1;

const PAYLOAD: [u8; 3] = [b'A', b'B', b'C'];

/// Narrows an integer to a single byte by keeping its low 8 bits.
///
/// Negative values wrap in two's complement, so `-1` becomes `0xff` and
/// `-256` becomes `0`. Nothing is clamped.
pub fn narrow(value: i32) -> u8 {
    value as u8
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharBuffer {
    data: [u8; BUFFER_SIZE],
}

impl Index<usize> for CharBuffer {
    type Output = u8;
    fn index(&self, index: usize) -> &Self::Output {
        Index::index(&self.data, index)
    }
}

impl IndexMut<usize> for CharBuffer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        IndexMut::index_mut(&mut self.data, index)
    }
}

impl CharBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the buffer `[narrow(value), 'A', 'B', 'C', 0]`.
    pub fn fill(value: i32) -> Self {
        let mut buffer = Self::new();

        buffer[0] = narrow(value);
        for (slot, byte) in PAYLOAD.iter().enumerate() {
            buffer[slot + 1] = *byte;
        }
        buffer[TERMINATOR_SLOT] = 0;

        buffer
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.data
    }

    /// Position of the first zero byte, which is where any consumer of the
    /// buffer as a C string stops reading.
    pub fn terminator(&self) -> Option<usize> {
        self.data.iter().position(|&b| b == 0)
    }

    /// Returns the bytes a C string reader would see: everything before the
    /// first zero byte, or the whole buffer if it has none.
    pub fn as_c_str(&self) -> &[u8] {
        let end = self.terminator().unwrap_or(BUFFER_SIZE);
        &self.data[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_keeps_low_byte() {
        assert_eq!(narrow(0), 0);
        assert_eq!(narrow(65), b'A');
        assert_eq!(narrow(255), 0xff);
        assert_eq!(narrow(256), 0);
        assert_eq!(narrow(321), 65);
        assert_eq!(narrow(-1), 0xff);
        assert_eq!(narrow(-256), 0);
        assert_eq!(narrow(i32::MIN), 0);
    }

    #[test]
    fn fill_layout() {
        let b = CharBuffer::fill(0x7a);
        assert_eq!(b.as_bytes(), &[b'z', b'A', b'B', b'C', 0]);
        assert_eq!(b.terminator(), Some(TERMINATOR_SLOT));
        assert_eq!(b.as_c_str(), b"zABC");
    }

    #[test]
    fn zero_hides_payload() {
        let b = CharBuffer::fill(512);
        assert_eq!(b.as_bytes(), &[0, b'A', b'B', b'C', 0]);
        assert_eq!(b.terminator(), Some(0));
        assert!(b.as_c_str().is_empty());
    }

    #[test]
    fn high_byte_is_kept_verbatim() {
        let b = CharBuffer::fill(-2);
        assert_eq!(b.as_c_str(), &[0xfe, b'A', b'B', b'C']);
    }

    #[test]
    fn unterminated_buffer_reads_to_end() {
        let mut b = CharBuffer::fill(1);
        b[TERMINATOR_SLOT] = b'D';
        assert_eq!(b.terminator(), None);
        assert_eq!(b.as_c_str(), &[1, b'A', b'B', b'C', b'D']);
    }

    #[test]
    #[should_panic]
    fn store_out_of_bounds() {
        let mut b = CharBuffer::new();
        b[BUFFER_SIZE] = 7; // this will panic
    }
}
