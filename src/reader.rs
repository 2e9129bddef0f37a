//! Typed little-endian primitives over a seekable in-memory byte stream.
//!
//! Modelled on `otspec::ReaderContext` (a `ptr` cursor over a borrowed
//! `input` slice) but little-endian throughout, since Draw files are written
//! by RISC OS on a little-endian ARM. The `push`/`pop` stack mirrors
//! `ReaderContext::push`/`pop`/`top_of_table`: the Object Parser uses it to
//! find out how many bytes a nested read (a group body, a tagged object)
//! actually consumed, without threading that arithmetic through every call
//! site by hand.

use crate::error::{DrawError, Result};

pub struct DrawReader<'a> {
    pub input: &'a [u8],
    pub ptr: usize,
    marks: Vec<usize>,
}

impl<'a> DrawReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        DrawReader {
            input,
            ptr: 0,
            marks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.ptr)
    }

    pub fn eof(&self) -> bool {
        self.ptr >= self.input.len()
    }

    /// Reads a little-endian u32 without advancing the cursor, for the
    /// one-word-of-lookahead the text-area column sentinel needs.
    pub fn peek_u32(&self) -> Result<u32> {
        if self.ptr + 4 > self.input.len() {
            return Err(DrawError::Truncated(self.ptr));
        }
        let b = &self.input[self.ptr..self.ptr + 4];
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn seek(&mut self, pos: usize) {
        self.ptr = pos;
    }

    /// Push a mark at the current position; a matching `pop` reports how
    /// many bytes were consumed since the push.
    pub fn push(&mut self) {
        self.marks.push(self.ptr);
    }

    pub fn pop(&mut self) -> usize {
        let start = self.marks.pop().unwrap_or(self.ptr);
        self.ptr - start
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.ptr.checked_add(n).ok_or(DrawError::Truncated(self.ptr))?;
        if end > self.input.len() {
            return Err(DrawError::Truncated(self.ptr));
        }
        let slice = &self.input[self.ptr..end];
        self.ptr = end;
        Ok(slice)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads an unsigned little-endian integer of the given byte width
    /// (1, 2 or 4), used where object/sprite field widths are parametric
    /// (e.g. one-byte vs. two-byte object types).
    pub fn read_uint(&mut self, num_bytes: usize) -> Result<u32> {
        match num_bytes {
            1 => Ok(self.read_u8()? as u32),
            2 => Ok(self.read_u16()? as u32),
            4 => self.read_u32(),
            _ => panic!("unsupported integer width {num_bytes}"),
        }
    }

    pub fn read_int(&mut self, num_bytes: usize) -> Result<i32> {
        match num_bytes {
            1 => Ok(self.read_i8()? as i32),
            2 => Ok(self.read_i16()? as i32),
            4 => self.read_i32(),
            _ => panic!("unsupported integer width {num_bytes}"),
        }
    }

    /// Reads exactly `length` bytes and trims a trailing NUL run, as Draw
    /// fixed-width name fields (creator string, sprite name) do.
    pub fn read_fixed_name(&mut self, length: usize) -> Result<Vec<u8>> {
        let bytes = self.take(length)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(bytes[..end].to_vec())
    }

    /// Reads bytes up to and including a terminating NUL, returning the
    /// bytes before it (font-table entry names).
    pub fn read_bytes_until_zero(&mut self) -> Result<Vec<u8>> {
        let start = self.ptr;
        loop {
            let b = self.read_u8()?;
            if b == 0 {
                break;
            }
        }
        Ok(self.input[start..self.ptr - 1].to_vec())
    }

    /// Advances the cursor to the next 4-byte boundary relative to the
    /// start of the stream.
    pub fn align4(&mut self) {
        let rem = self.ptr % 4;
        if rem != 0 {
            self.ptr += 4 - rem;
        }
    }
}
