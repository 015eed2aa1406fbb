use arch::word::Word;
use std::fmt::Write;

pub const IMAGE_SIZE: usize = 256;
const ROW: usize = 16;

/// The whole 8-bit address space. Unwritten words stay zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image([Word; IMAGE_SIZE]);

impl Image {
    pub fn new() -> Self {
        Image([Word::default(); IMAGE_SIZE])
    }

    pub fn clear(&mut self) {
        self.0 = [Word::default(); IMAGE_SIZE];
    }

    pub fn write(&mut self, addr: u8, word: Word) {
        self.0[addr as usize] = word;
    }

    pub fn get(&self, addr: u8) -> Word {
        self.0[addr as usize]
    }

    pub fn words(&self) -> &[Word] {
        &self.0
    }

    /// 16 rows of 16 words, ` XXX` each.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(IMAGE_SIZE * 4 + ROW);
        for row in self.0.chunks(ROW) {
            for word in row {
                let _ = write!(out, " {:03X}", word);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}
