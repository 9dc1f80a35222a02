use wasm_bindgen::prelude::*;

pub mod levels;

quest_web::export_quest!(levels::all, "treasure-quest");
