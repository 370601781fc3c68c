/// Bytes of addressable RAM.
pub const RAM_SIZE: usize = 4096;

/// Mask that folds any address into RAM. Relies on `RAM_SIZE` being a
/// power of two.
pub const ADDR_MASK: u16 = (RAM_SIZE - 1) as u16;

/// Address at which loaded programs begin.
pub const PROGRAM_ENTRY: u16 = 0x200;

/// Everything between the program entry and the top of RAM is program
/// space; longer ROMs are rejected outright.
pub const MAX_ROM_SIZE: usize = RAM_SIZE - PROGRAM_ENTRY as usize;

/// Display geometry in pixels.
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Wall-clock length of one machine quantum in nanoseconds (60 Hz).
/// Both timers are decremented exactly once per quantum, no matter how
/// many instructions the driver runs within it.
pub const CYCLE_PERIOD_NANOS: u64 = 16_666_667;

/// Instructions executed per quantum by default. Tunable by the driver.
pub const DEFAULT_INSTRUCTIONS_PER_CYCLE: u32 = 8;

/// Bytes per font glyph.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// # Font sprites
/// Glyphs for the hexadecimal digits 0..F, five bytes each, installed at
/// address 0x000. `Fx29` resolves a glyph address as `Vx * 5`.
pub const FONT_SPRITES: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
