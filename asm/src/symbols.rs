/// Highest label id accepted in source (`$9999`).
pub const LABEL_MAX: u16 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    addr: u8,
    // 1-based source line of the declaration that wrote `addr`
    line: usize,
}

/// Label id -> address, dense over `0..=LABEL_MAX`. Filled during the first
/// pass and only read afterwards.
#[derive(Debug, Clone)]
pub struct Symbols {
    table: Vec<Option<Entry>>,
}

impl Symbols {
    pub fn new() -> Self {
        Symbols {
            table: vec![None; LABEL_MAX as usize + 1],
        }
    }

    /// Record a declaration. A later declaration of the same id replaces the
    /// earlier one, so the lexically last one wins.
    pub fn define(&mut self, id: u16, addr: u8, line: usize) {
        if let Some(slot) = self.table.get_mut(id as usize) {
            *slot = Some(Entry { addr, line });
        }
    }

    pub fn get(&self, id: u16) -> Option<u8> {
        self.entry(id).map(|e| e.addr)
    }

    /// Whether the declaration of `id` on `line` is the one whose address was
    /// kept. Any other declaration was superseded further down the source.
    pub fn is_authoritative(&self, id: u16, line: usize) -> bool {
        self.entry(id).map_or(false, |e| e.line == line)
    }

    /// Number of distinct labels declared.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, id: u16) -> Option<Entry> {
        self.table.get(id as usize).copied().flatten()
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}
