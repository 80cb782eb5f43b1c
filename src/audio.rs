use crate::constants::{ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING, DRONE_FADE_IN_SEC, DRONE_GAIN};
use crate::error::LinkError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Sine drone whose pitch follows the active mood.
pub struct Drone {
    osc: web::OscillatorNode,
    _gain: web::GainNode,
}

impl Drone {
    fn start(ctx: &web::AudioContext, hz: f32) -> Result<Self, LinkError> {
        let osc = web::OscillatorNode::new(ctx)?;
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(hz);
        let gain = web::GainNode::new(ctx)?;
        let now = ctx.current_time();
        gain.gain().set_value(0.0);
        _ = gain
            .gain()
            .linear_ramp_to_value_at_time(DRONE_GAIN, now + DRONE_FADE_IN_SEC);
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start()?;
        Ok(Self { osc, _gain: gain })
    }

    /// Glide to `hz` over `secs` using the audio clock.
    pub fn ramp_to(&self, ctx: &web::AudioContext, hz: f32, secs: f64) {
        let p = self.osc.frequency();
        let now = ctx.current_time();
        _ = p.cancel_scheduled_values(now);
        _ = p.set_value_at_time(p.value(), now);
        _ = p.linear_ramp_to_value_at_time(hz, now + secs);
    }
}

/// A granted microphone stream feeding a small analyser, plus the drone.
pub struct MicLink {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
    drone: Drone,
    _source: web::MediaStreamAudioSourceNode,
}

impl MicLink {
    /// Ask for the microphone and build the analysis graph. The mic is never
    /// routed to the speakers.
    pub async fn open(drone_hz: f32) -> Result<Self, LinkError> {
        let window = web::window().ok_or(LinkError::Unsupported("window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| LinkError::Unsupported("microphone"))?;
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let request = devices.get_user_media_with_constraints(&constraints)?;
        let stream = JsFuture::from(request)
            .await
            .map_err(|e| LinkError::Denied(format!("{:?}", e)))?
            .dyn_into::<web::MediaStream>()
            .map_err(|_| LinkError::Js("getUserMedia did not return a stream".into()))?;

        let ctx = web::AudioContext::new()?;
        _ = ctx.resume();
        let source = ctx.create_media_stream_source(&stream)?;
        let analyser = web::AnalyserNode::new(&ctx)?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
        source.connect_with_audio_node(&analyser)?;
        let bins = vec![0u8; analyser.frequency_bin_count() as usize];
        let drone = Drone::start(&ctx, drone_hz)?;
        log::info!("[audio] microphone linked, {} bins", bins.len());

        Ok(Self {
            ctx,
            analyser,
            bins,
            drone,
            _source: source,
        })
    }

    /// Latest byte spectrum.
    pub fn sample(&mut self) -> &[u8] {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        &self.bins
    }

    pub fn ramp_drone(&self, hz: f32, secs: f64) {
        self.drone.ramp_to(&self.ctx, hz, secs);
    }
}
