use rand::Rng;
use sticker_core::{pick_frequency, TONE_DURATION_SEC, TONE_FLOOR, TONE_GAIN};
use web_sys as web;

/// Lazily-initialized tone feedback. Construction failure (no Web Audio)
/// disables audio for the rest of the session; the toy stays silent rather
/// than erroring.
pub struct AudioFeedback {
    ctx: Option<web::AudioContext>,
    unavailable: bool,
}

impl AudioFeedback {
    pub fn new() -> Self {
        Self {
            ctx: None,
            unavailable: false,
        }
    }

    /// Called from inside a user gesture so autoplay policy lets the
    /// context run.
    pub fn warm_up(&mut self) {
        let _ = self.ensure();
    }

    fn ensure(&mut self) -> Option<&web::AudioContext> {
        if self.unavailable {
            return None;
        }
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::error!("[audio] context unavailable: {e:?}");
                    self.unavailable = true;
                    return None;
                }
            }
        }
        let ctx = self.ctx.as_ref()?;
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        Some(ctx)
    }

    /// One sine note from the scale, gain decaying exponentially from
    /// `TONE_GAIN` to `TONE_FLOOR` over `TONE_DURATION_SEC`.
    pub fn play_tone(&mut self, rng: &mut impl Rng) {
        let freq = pick_frequency(rng);
        let Some(ctx) = self.ensure() else {
            return;
        };
        if let (Ok(osc), Ok(gain)) = (web::OscillatorNode::new(ctx), web::GainNode::new(ctx)) {
            osc.set_type(web::OscillatorType::Sine);
            let now = ctx.current_time();
            _ = osc.frequency().set_value_at_time(freq, now);
            _ = gain.gain().set_value_at_time(TONE_GAIN, now);
            _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(TONE_FLOOR, now + TONE_DURATION_SEC);
            _ = osc.connect_with_audio_node(&gain);
            _ = gain.connect_with_audio_node(&ctx.destination());
            _ = osc.start_with_when(now);
            _ = osc.stop_with_when(now + TONE_DURATION_SEC);
        }
    }
}
