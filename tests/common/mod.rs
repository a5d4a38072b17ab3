//! Shared test infrastructure for lcd-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use lcd_stopwatch::{AddressMode, CharDisplay, Period, PeriodicSource, Position};

// ============================================================================
// Mock Display
// ============================================================================

pub const MAX_COLUMNS: usize = 20;
pub const MAX_ROWS: usize = 4;
pub const CGRAM_SIZE: usize = 64;

/// One call made against the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    SetMode(AddressMode),
    GlyphRow(u8),
    Goto(Position),
    Char(u8),
}

/// Virtual HD44780: a character grid, glyph memory and a log of every call.
///
/// Unwritten cells read as b'.' so tests can tell "never written" apart from
/// an explicit blank.
pub struct MockDisplay {
    grid: [[u8; MAX_COLUMNS]; MAX_ROWS],
    columns: usize,
    rows: usize,
    cursor: Position,
    mode: AddressMode,
    cgram: [u8; CGRAM_SIZE],
    cgram_addr: usize,
    ops: heapless::Vec<Op, 256>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::with_grid(16, 2)
    }

    pub fn with_grid(columns: usize, rows: usize) -> Self {
        Self {
            grid: [[b'.'; MAX_COLUMNS]; MAX_ROWS],
            columns,
            rows,
            cursor: Position::new(0, 0),
            mode: AddressMode::Character,
            cgram: [0; CGRAM_SIZE],
            cgram_addr: 0,
            ops: heapless::Vec::new(),
        }
    }

    /// Row contents as a string; custom glyph codes 0..8 show as '0'..'7',
    /// the solid block as '#'.
    pub fn row(&self, row: usize) -> String {
        self.grid[row][..self.columns]
            .iter()
            .map(|&code| match code {
                0..=7 => char::from(b'0' + code),
                0xFF => '#',
                c => char::from(c),
            })
            .collect()
    }

    /// `len` cells of `row` starting at `col`.
    pub fn text_at(&self, col: usize, row: usize, len: usize) -> String {
        self.row(row).chars().skip(col).take(len).collect()
    }

    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    pub fn cgram(&self) -> &[u8] {
        &self.cgram
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl CharDisplay for MockDisplay {
    fn set_mode(&mut self, mode: AddressMode) {
        self.mode = mode;
        if mode == AddressMode::Glyph {
            self.cgram_addr = 0;
        }
        let _ = self.ops.push(Op::SetMode(mode));
    }

    fn write_glyph_row(&mut self, row: u8) {
        assert_eq!(self.mode, AddressMode::Glyph, "glyph row written in character mode");
        self.cgram[self.cgram_addr % CGRAM_SIZE] = row;
        self.cgram_addr += 1;
        let _ = self.ops.push(Op::GlyphRow(row));
    }

    fn goto(&mut self, position: Position) {
        assert!(usize::from(position.row) < self.rows, "goto below grid");
        self.cursor = position;
        let _ = self.ops.push(Op::Goto(position));
    }

    fn put_char(&mut self, code: u8) {
        assert_eq!(self.mode, AddressMode::Character, "character written in glyph mode");
        let col = usize::from(self.cursor.col);
        let row = usize::from(self.cursor.row);
        if col < self.columns {
            self.grid[row][col] = code;
        }
        self.cursor.col = self.cursor.col.saturating_add(1);
        let _ = self.ops.push(Op::Char(code));
    }
}

// ============================================================================
// Mock Periodic Source
// ============================================================================

/// What happened to a periodic source, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    Configured(Period),
    Enabled,
}

/// Records configure/enable calls together with a global sequence number so
/// tests can check the order across two sources.
pub struct MockSource<'a> {
    clock: &'a core::cell::Cell<u32>,
    pub events: heapless::Vec<(u32, SourceEvent), 8>,
}

impl<'a> MockSource<'a> {
    pub fn new(clock: &'a core::cell::Cell<u32>) -> Self {
        Self {
            clock,
            events: heapless::Vec::new(),
        }
    }

    fn record(&mut self, event: SourceEvent) {
        let seq = self.clock.get();
        self.clock.set(seq + 1);
        let _ = self.events.push((seq, event));
    }

    pub fn period(&self) -> Option<Period> {
        self.events.iter().find_map(|(_, e)| match e {
            SourceEvent::Configured(p) => Some(*p),
            SourceEvent::Enabled => None,
        })
    }

    pub fn enabled_at(&self) -> Option<u32> {
        self.events
            .iter()
            .find(|(_, e)| *e == SourceEvent::Enabled)
            .map(|(seq, _)| *seq)
    }
}

impl PeriodicSource for MockSource<'_> {
    fn configure(&mut self, period: Period) {
        self.record(SourceEvent::Configured(period));
    }

    fn enable(&mut self) {
        self.record(SourceEvent::Enabled);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Drives the tick handler `n` times.
pub fn overflow_ticks(
    tick: &mut lcd_stopwatch::TickAccumulator,
    display: &mut MockDisplay,
    n: usize,
) {
    for _ in 0..n {
        tick.on_overflow(display);
    }
}
