//! Integration tests for glyph loading and start-up sequencing

mod common;
use common::*;

use core::cell::Cell;
use lcd_stopwatch::{
    AddressMode, ConfigError, GlyphLoader, GlyphTable, Period, Position, StopwatchConfig,
    Stopwatch, PROGRESS_PERIOD, TICK_PERIOD,
};

#[test]
fn loader_writes_rows_between_mode_switches() {
    let mut display = MockDisplay::new();
    let table = GlyphTable::<4>::partial_blocks().unwrap();

    GlyphLoader::load(&mut display, &table, &StopwatchConfig::default()).unwrap();

    let ops = display.ops();
    assert_eq!(ops[0], Op::SetMode(AddressMode::Glyph));
    assert!(ops[1..33].iter().all(|op| matches!(op, Op::GlyphRow(_))));
    assert_eq!(ops[33], Op::SetMode(AddressMode::Character));
    assert_eq!(ops[34], Op::Goto(Position::new(7, 1)));
    assert_eq!(
        &ops[35..],
        &[Op::Char(0), Op::Char(1), Op::Char(2), Op::Char(3)]
    );
    assert_eq!(display.mode(), AddressMode::Character);
}

#[test]
fn loader_fills_glyph_memory() {
    let mut display = MockDisplay::new();
    let table = GlyphTable::<4>::partial_blocks().unwrap();

    GlyphLoader::load(&mut display, &table, &StopwatchConfig::default()).unwrap();

    let cgram = display.cgram();
    assert_eq!(&cgram[0..8], &[0b10000; 8]);
    assert_eq!(&cgram[8..16], &[0b11000; 8]);
    assert_eq!(&cgram[16..24], &[0b11100; 8]);
    assert_eq!(&cgram[24..32], &[0b11110; 8]);
    assert!(cgram[32..].iter().all(|&row| row == 0));
}

#[test]
fn preview_shows_glyph_codes() {
    let mut display = MockDisplay::new();
    let table = GlyphTable::<4>::partial_blocks().unwrap();

    GlyphLoader::load(&mut display, &table, &StopwatchConfig::default()).unwrap();

    assert_eq!(display.row(1), ".......0123.....");
}

#[test]
fn preview_past_right_edge_writes_nothing() {
    let mut display = MockDisplay::new();
    let table = GlyphTable::<4>::partial_blocks().unwrap();
    let config = StopwatchConfig::builder()
        .preview_position(Position::new(13, 1))
        .build()
        .unwrap();

    let result = GlyphLoader::load(&mut display, &table, &config);

    assert!(matches!(
        result,
        Err(ConfigError::PositionOutOfBounds { .. })
    ));
    assert!(display.ops().is_empty());
}

#[test]
fn start_loads_glyphs_then_arms_both_sources() {
    let mut display = MockDisplay::new();
    let seq = Cell::new(0);
    let mut tick_source = MockSource::new(&seq);
    let mut progress_source = MockSource::new(&seq);
    let table = GlyphTable::<4>::partial_blocks().unwrap();

    let handlers = Stopwatch::start(
        &StopwatchConfig::default(),
        &mut display,
        &table,
        &mut tick_source,
        &mut progress_source,
    )
    .unwrap();

    assert_eq!(tick_source.period(), Some(TICK_PERIOD));
    assert_eq!(progress_source.period(), Some(PROGRESS_PERIOD));
    assert!(progress_source.enabled_at() < tick_source.enabled_at());
    assert_eq!(display.mode(), AddressMode::Character);
    assert_eq!(display.row(1), ".......0123.....");
    assert_eq!(handlers.tick.overflows(), 0);
    assert_eq!(handlers.progress.phase(), 0);
}

#[test]
fn start_uses_configured_periods() {
    let mut display = MockDisplay::new();
    let seq = Cell::new(0);
    let mut tick_source = MockSource::new(&seq);
    let mut progress_source = MockSource::new(&seq);
    let table = GlyphTable::<4>::partial_blocks().unwrap();
    let config = StopwatchConfig::builder()
        .tick_period(Period::from_millis(10))
        .overflows_per_tick(10)
        .progress_period(Period::from_millis(500))
        .build()
        .unwrap();

    Stopwatch::start(&config, &mut display, &table, &mut tick_source, &mut progress_source)
        .unwrap();

    assert_eq!(tick_source.period(), Some(Period::from_millis(10)));
    assert_eq!(progress_source.period(), Some(Period::from_millis(500)));
}

#[test]
fn failed_start_arms_nothing() {
    let mut display = MockDisplay::new();
    let seq = Cell::new(0);
    let mut tick_source = MockSource::new(&seq);
    let mut progress_source = MockSource::new(&seq);
    let table = GlyphTable::<6>::new([[0; 8]; 6]).unwrap();
    let config = StopwatchConfig::builder()
        .preview_position(Position::new(12, 1))
        .build()
        .unwrap();

    let result = Stopwatch::start(
        &config,
        &mut display,
        &table,
        &mut tick_source,
        &mut progress_source,
    );

    assert!(result.is_err());
    assert!(tick_source.events.is_empty());
    assert!(progress_source.events.is_empty());
}
