use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use lcd_stopwatch::{AddressMode, CharDisplay, Position};

// HD44780 instruction set (subset)
const CLEAR_DISPLAY: u8 = 0x01;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_ON: u8 = 0x0C;
const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
const SET_CGRAM_ADDR: u8 = 0x40;
const SET_DDRAM_ADDR: u8 = 0x80;

/// DDRAM address of the first cell of each row (16x2 / 20x4 layout).
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// HD44780 character LCD on a 4-bit parallel bus, write-only (RW tied to GND).
///
/// Pin errors are ignored; the STM32 GPIO error type is `Infallible`.
pub struct Hd44780<RS, EN, D4, D5, D6, D7, DL> {
    rs: RS,
    en: EN,
    data: (D4, D5, D6, D7),
    delay: DL,
}

impl<RS, EN, D4, D5, D6, D7, DL> Hd44780<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DL: DelayUs<u16>,
{
    /// Runs the 4-bit initialisation sequence and turns the display on with
    /// the cursor hidden.
    pub fn new(rs: RS, en: EN, data: (D4, D5, D6, D7), delay: DL) -> Self {
        let mut lcd = Self {
            rs,
            en,
            data,
            delay,
        };
        lcd.init();
        lcd
    }

    fn init(&mut self) {
        self.delay.delay_us(50_000);

        // Three times 0x3 puts the controller into 8-bit mode from any state,
        // then 0x2 switches to 4-bit.
        self.write_nibble(0x03, false);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03, false);
        self.delay.delay_us(150);
        self.write_nibble(0x03, false);
        self.write_nibble(0x02, false);

        self.command(FUNCTION_SET_4BIT_2LINE);
        self.command(DISPLAY_ON);
        self.command(CLEAR_DISPLAY);
        self.delay.delay_us(2_000);
        self.command(ENTRY_MODE_INCREMENT);
    }

    fn write_nibble(&mut self, nibble: u8, rs: bool) {
        set(&mut self.rs, rs);
        set(&mut self.data.0, nibble & 0x01 != 0);
        set(&mut self.data.1, nibble & 0x02 != 0);
        set(&mut self.data.2, nibble & 0x04 != 0);
        set(&mut self.data.3, nibble & 0x08 != 0);

        // Data is latched on the falling edge of E
        self.en.set_high().ok();
        self.delay.delay_us(1);
        self.en.set_low().ok();
        self.delay.delay_us(50);
    }

    fn write_byte(&mut self, byte: u8, rs: bool) {
        self.write_nibble(byte >> 4, rs);
        self.write_nibble(byte & 0x0F, rs);
    }

    fn command(&mut self, command: u8) {
        self.write_byte(command, false);
    }

    fn data(&mut self, data: u8) {
        self.write_byte(data, true);
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) {
    if high {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}

impl<RS, EN, D4, D5, D6, D7, DL> CharDisplay for Hd44780<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DL: DelayUs<u16>,
{
    fn set_mode(&mut self, mode: AddressMode) {
        match mode {
            AddressMode::Glyph => self.command(SET_CGRAM_ADDR),
            AddressMode::Character => self.command(SET_DDRAM_ADDR),
        }
    }

    fn write_glyph_row(&mut self, row: u8) {
        self.data(row & 0x1F);
    }

    fn goto(&mut self, position: Position) {
        let offset = ROW_OFFSETS[usize::from(position.row & 0x03)];
        self.command(SET_DDRAM_ADDR | offset.wrapping_add(position.col));
    }

    fn put_char(&mut self, code: u8) {
        self.data(code);
    }
}
