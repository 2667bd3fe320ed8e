use crate::buffer::CharBuffer;
use std::io::{self, Write};

pub const LABEL: &str = "Contenu : ";

/// Prints the buffer the way `printf("Contenu : %s\n", data)` does: raw
/// bytes up to the first zero byte, never past it.
pub fn print_contents<W: Write>(output: &mut W, buffer: &CharBuffer) -> io::Result<()> {
    output.write_all(LABEL.as_bytes())?;
    output.write_all(buffer.as_c_str())?;
    output.write_all(b"\n")?;
    output.flush()
}
