use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// Tone frequency in Hz.
const TONE_HZ: f32 = 440.0;

struct SquareWave {
    phase: f32,
    phase_inc: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        // high for the first half of each period, low for the second
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a square-wave tone while the machine's sound timer is running.
/// The driving loop flips it once per frame from `Memory::sound_active`.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase: 0.0,
            phase_inc: TONE_HZ / spec.freq as f32,
            volume: 0.25,
        })?;

        Ok(Beeper {
            device,
            playing: false,
        })
    }

    /// Starts or stops the tone; no-op when already in the right state.
    pub fn set_active(&mut self, active: bool) {
        if active == self.playing {
            return;
        }
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.playing = active;
    }
}
