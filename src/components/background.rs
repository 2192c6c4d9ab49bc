//! Animated particle backdrop.
//!
//! The VANTA "birds" effect is an opaque JS collaborator loaded from
//! `index.html`: initialize once on mount with a mount element and a config
//! object, call `destroy()` on unmount. Nothing else crosses the boundary.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    type VantaEffect;

    #[wasm_bindgen(js_namespace = VANTA, js_name = BIRDS, catch)]
    fn vanta_birds(options: &JsValue) -> Result<VantaEffect, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &VantaEffect);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BirdsConfig {
    mouse_controls: bool,
    touch_controls: bool,
    gyro_controls: bool,
    min_height: f64,
    min_width: f64,
    scale: f64,
    scale_mobile: f64,
    background_color: u32,
    color1: u32,
    color2: u32,
    color_mode: &'static str,
    bird_size: f64,
    wing_span: f64,
    separation: f64,
    alignment: f64,
    cohesion: f64,
    quantity: f64,
}

impl Default for BirdsConfig {
    fn default() -> Self {
        Self {
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            background_color: 0x0a192f,
            color1: 0x5eead4,
            color2: 0x7e22ce,
            color_mode: "variance",
            bird_size: 1.5,
            wing_span: 20.0,
            separation: 50.0,
            alignment: 100.0,
            cohesion: 100.0,
            quantity: 3.0,
        }
    }
}

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let mount = use_node_ref();

    {
        let mount = mount.clone();
        use_effect_with_deps(
            move |_| {
                let mut effect = None;
                if let Some(element) = mount.cast::<web_sys::Element>() {
                    match serde_wasm_bindgen::to_value(&BirdsConfig::default()) {
                        Ok(options) => {
                            let _ = js_sys::Reflect::set(
                                &options,
                                &JsValue::from_str("el"),
                                element.as_ref(),
                            );
                            match vanta_birds(&options) {
                                Ok(handle) => effect = Some(handle),
                                Err(err) => {
                                    log::warn!("particle background unavailable: {:?}", err)
                                }
                            }
                        }
                        Err(err) => log::warn!("particle config serialization failed: {}", err),
                    }
                }
                move || {
                    if let Some(handle) = effect {
                        handle.destroy();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={mount} class="particle-backdrop"></div>
    }
}
