//! Audio system using Web Audio API
//!
//! Two sampled sounds, fetched and decoded after the first user gesture.
//! Until a sound has finished loading, playing it does nothing.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioBuffer, AudioContext, Response};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Ball caught
    Catch,
    /// Life lost
    Miss,
}

impl Sound {
    pub const ALL: [Sound; 2] = [Sound::Catch, Sound::Miss];

    pub fn name(&self) -> &'static str {
        match self {
            Sound::Catch => "catch",
            Sound::Miss => "miss",
        }
    }

    pub fn asset_path(&self) -> &'static str {
        match self {
            Sound::Catch => "sounds/pop.mp3",
            Sound::Miss => "sounds/miss.mp3",
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: RefCell<Option<AudioContext>>,
    buffers: RefCell<HashMap<Sound, AudioBuffer>>,
    volume: f32,
    unlocked: Cell<bool>,
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        Self {
            ctx: RefCell::new(None),
            buffers: RefCell::new(HashMap::new()),
            volume: volume.clamp(0.0, 1.0),
            unlocked: Cell::new(false),
        }
    }

    /// Create the audio context and start loading every sound.
    ///
    /// Must run inside a user gesture handler. Only the first call does
    /// anything; loading continues in the background.
    pub fn unlock(self: &Rc<Self>) {
        if self.unlocked.replace(true) || self.volume <= 0.0 {
            return;
        }

        let ctx = match AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("Failed to create AudioContext - audio disabled: {:?}", e);
                return;
            }
        };
        *self.ctx.borrow_mut() = Some(ctx.clone());

        let this = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(promise) = ctx.resume() {
                let _ = JsFuture::from(promise).await;
            }
            for sound in Sound::ALL {
                match load_buffer(&ctx, sound.asset_path()).await {
                    Ok(buffer) => {
                        this.buffers.borrow_mut().insert(sound, buffer);
                        log::info!("Sound '{}' ready", sound.name());
                    }
                    Err(e) => log::warn!("Sound '{}' unavailable: {:?}", sound.name(), e),
                }
            }
        });
    }

    /// Play a sound effect (no-op until loaded)
    pub fn play(&self, sound: Sound) {
        if self.volume <= 0.0 {
            return;
        }
        let ctx = self.ctx.borrow();
        let Some(ctx) = ctx.as_ref() else { return };
        let buffers = self.buffers.borrow();
        let Some(buffer) = buffers.get(&sound) else { return };

        if let Err(e) = self.start_source(ctx, buffer) {
            log::warn!("Failed to play '{}': {:?}", sound.name(), e);
        }
    }

    fn start_source(&self, ctx: &AudioContext, buffer: &AudioBuffer) -> Result<(), JsValue> {
        let source = ctx.create_buffer_source()?;
        source.set_buffer(Some(buffer));
        let gain = ctx.create_gain()?;
        gain.gain().set_value(self.volume);
        source.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        source.start()?;
        Ok(())
    }
}

/// Fetch and decode one audio file
async fn load_buffer(ctx: &AudioContext, url: &str) -> Result<AudioBuffer, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {} for {}", response.status(), url)));
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(response.array_buffer()?).await?.dyn_into()?;
    let decoded = JsFuture::from(ctx.decode_audio_data(&bytes)?).await?;
    decoded.dyn_into()
}
