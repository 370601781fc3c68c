use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vip8_core::constants::CYCLE_PERIOD_NANOS;
use vip8_core::{Cpu, Memory, Quirks};
use vip8_display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;
use crate::Args;

/// Drives the machine: pumps input, runs every 60 Hz quantum the elapsed
/// wall-clock time owes, renders, and toggles the beeper, once per frame.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let mut cpu = Cpu::with_quirks(Quirks {
        jump_adds_vx: args.jump_vx,
    });
    let mut mem = Memory::new();

    let file =
        File::open(&args.rom).with_context(|| format!("opening {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    let size = mem
        .load_rom(&mut reader)
        .with_context(|| format!("loading {}", args.rom.display()))?;
    log::info!("loaded {} ({size} bytes)", args.rom.display());

    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, args.scale).map_err(|e| anyhow!(e))?;
    let mut beeper = Beeper::new(&sdl).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let quantum = Duration::from_nanos(CYCLE_PERIOD_NANOS);
    let mut last_tick = Instant::now();
    let mut accumulator = Duration::ZERO;

    'frame: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(k) = keymap(key) {
                        cpu.key_press(k);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(k) = keymap(key) {
                        cpu.key_release(k);
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        accumulator += now - last_tick;
        last_tick = now;

        // Timers tick once per quantum no matter how many instructions
        // run within it.
        while accumulator >= quantum {
            mem.tick_delay_timer();
            mem.tick_sound_timer();

            for _ in 0..args.ipc {
                if let Err(err) = cpu.step(&mut mem) {
                    log::error!("halting: {err}");
                    break 'frame;
                }
            }

            accumulator -= quantum;
        }

        display.render(mem.frame()).map_err(|e| anyhow!(e))?;
        beeper.set_active(mem.sound_active());
        cpu.end_frame();

        std::thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}
