use crate::SerialiserError;

/// A forward-only reader over an encoded byte slice.
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, SerialiserError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| SerialiserError::MalformedEncoding("unexpected end of input".into()))?;
        self.pos += 1;
        Ok(byte)
    }

    pub(crate) fn read_exact(&mut self, len: usize) -> Result<&'a [u8], SerialiserError> {
        if self.remaining() < len {
            return Err(SerialiserError::MalformedEncoding(format!(
                "expected {} bytes, got {}",
                len,
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64, SerialiserError> {
        let bytes = self.read_exact(8)?;
        let arr: [u8; 8] = bytes.try_into().expect("read_exact(8) returns 8 bytes");
        Ok(i64::from_be_bytes(arr))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, SerialiserError> {
        let bytes = self.read_exact(4)?;
        let arr: [u8; 4] = bytes.try_into().expect("read_exact(4) returns 4 bytes");
        Ok(u32::from_be_bytes(arr))
    }

    pub(crate) fn read_len_prefixed(&mut self) -> Result<&'a [u8], SerialiserError> {
        let len = self.read_u32()? as usize;
        self.read_exact(len)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }
}
