//! Browser presentation: HUD text, CSS flashes, and entity/basket elements

use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::audio::{AudioManager, Sound};
use crate::sim::{EntityKind, PresentationSink, World};

/// Class added to a HUD value while it pops
const SCORE_CHANGE_CLASS: &str = "scoreChange";
/// Class added to the basket on a catch
const CATCH_CLASS: &str = "catch";
/// Class added to the play area on a lost life
const MISS_CLASS: &str = "miss";

fn sprite_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Normal => "url('images/bola.png')",
        EntityKind::Hazard => "url('images/bomb.png')",
        EntityKind::Heal => "url('images/heart.png')",
    }
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Add `class` to `el` and remove it again after `duration_ms`
fn flash_class(el: &Element, class: &str, duration_ms: u32) {
    let _ = el.class_list().add_1(class);
    let Some(window) = web_sys::window() else { return };
    let el = el.clone();
    let class = class.to_string();
    let clear = Closure::once_into_js(move || {
        let _ = el.class_list().remove_1(&class);
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        clear.unchecked_ref(),
        duration_ms as i32,
    );
}

/// DOM-backed presentation sink and renderer
pub struct DomSink {
    document: Document,
    game_area: HtmlElement,
    basket: Option<HtmlElement>,
    score_value: Option<HtmlElement>,
    lives_value: Option<HtmlElement>,
    game_over: Option<HtmlElement>,
    /// One element per live entity, keyed by entity id
    sprites: HashMap<u32, HtmlElement>,
    audio: Rc<AudioManager>,
    flashes: bool,
}

impl DomSink {
    /// Look up the page elements. Only the play area is required.
    pub fn new(document: Document, audio: Rc<AudioManager>, flashes: bool) -> Option<Self> {
        let game_area = html_element(&document, "gameArea")?;
        Some(Self {
            basket: html_element(&document, "basket"),
            score_value: html_element(&document, "scoreValue"),
            lives_value: html_element(&document, "livesValue"),
            game_over: html_element(&document, "gameOver"),
            document,
            game_area,
            sprites: HashMap::new(),
            audio,
            flashes,
        })
    }

    /// Current play area size in CSS pixels
    pub fn field_size(&self) -> (f32, f32) {
        (
            self.game_area.client_width() as f32,
            self.game_area.client_height() as f32,
        )
    }

    /// Basket element size, if the page styles it
    pub fn basket_size(&self) -> Option<(f32, f32)> {
        let basket = self.basket.as_ref()?;
        let (w, h) = (basket.offset_width(), basket.offset_height());
        (w > 0 && h > 0).then_some((w as f32, h as f32))
    }

    /// Left edge of the play area in client coordinates
    pub fn field_left(&self) -> f32 {
        self.game_area.get_bounding_client_rect().left() as f32
    }

    pub fn game_area(&self) -> &HtmlElement {
        &self.game_area
    }

    /// Mirror basket and entity positions into the DOM
    pub fn sync(&mut self, world: &World) {
        if let Some(basket) = &self.basket {
            let _ = basket
                .style()
                .set_property("left", &format!("{}px", world.playfield.basket.x));
        }

        self.sprites.retain(|id, el| {
            let alive = world.entities.iter().any(|e| e.id == *id);
            if !alive {
                el.remove();
            }
            alive
        });

        for entity in &world.entities {
            if !self.sprites.contains_key(&entity.id) {
                match self.create_sprite(entity.kind, entity.pos.x) {
                    Ok(el) => {
                        self.sprites.insert(entity.id, el);
                    }
                    Err(e) => {
                        log::warn!("Failed to create sprite: {:?}", e);
                        continue;
                    }
                }
            }
            if let Some(el) = self.sprites.get(&entity.id) {
                let _ = el.style().set_property("top", &format!("{}px", entity.pos.y));
            }
        }
    }

    fn create_sprite(&self, kind: EntityKind, x: f32) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        el.class_list().add_1("ball")?;
        let style = el.style();
        style.set_property("background-image", sprite_for(kind))?;
        style.set_property("left", &format!("{}px", x))?;
        style.set_property("top", "0px")?;
        self.game_area.append_child(&el)?;
        Ok(el)
    }

    fn pop(&self, el: Option<&HtmlElement>, duration_ms: u32) {
        if let Some(el) = el {
            flash_class(el, SCORE_CHANGE_CLASS, duration_ms);
        }
    }

    fn set_game_over_visible(&self, visible: bool) {
        if let Some(el) = &self.game_over {
            let display = if visible { "flex" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }
}

impl PresentationSink for DomSink {
    fn on_score_changed(&mut self, score: u64) {
        if let Some(el) = &self.score_value {
            el.set_text_content(Some(&score.to_string()));
        }
        if self.flashes {
            self.pop(self.score_value.as_ref(), crate::consts::FLASH_MS);
        }
    }

    fn on_lives_changed(&mut self, lives: u8) {
        if let Some(el) = &self.lives_value {
            el.set_text_content(Some(&lives.to_string()));
        }
        if self.flashes {
            self.pop(self.lives_value.as_ref(), crate::consts::FLASH_MS);
        }
    }

    fn on_catch_flash(&mut self, duration_ms: u32) {
        self.audio.play(Sound::Catch);
        if self.flashes {
            if let Some(basket) = &self.basket {
                flash_class(basket, CATCH_CLASS, duration_ms);
            }
        }
    }

    fn on_miss_flash(&mut self, duration_ms: u32) {
        self.audio.play(Sound::Miss);
        if self.flashes {
            flash_class(&self.game_area, MISS_CLASS, duration_ms);
        }
    }

    fn on_game_over(&mut self) {
        self.set_game_over_visible(true);
    }

    fn on_restart(&mut self) {
        self.set_game_over_visible(false);
    }
}
