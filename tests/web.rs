// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
<nav id="navbar">
  <button id="navToggle"></button>
  <ul id="navLinks">
    <li><a class="nav-link" href="#home">Home</a></li>
    <li><a class="nav-link" href="#about">About</a></li>
  </ul>
</nav>
<header id="home">
  <img id="profileImg" src="#">
  <span id="typingText"></span>
</header>
<section id="about">
  <div class="animate-on-scroll">first</div>
  <div class="animate-on-scroll">second</div>
  <button class="btn">Hire</button>
</section>
<button id="backToTop"></button>
"##;

fn mount() -> web_sys::Document {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.body().unwrap().set_inner_html(PAGE);
    doc
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn el(doc: &web_sys::Document, id: &str) -> HtmlElement {
    doc.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn toggle_click_opens_and_closes_menu() {
    let doc = mount();
    let mut handle = resume_motion::start_site().unwrap();
    let toggle = el(&doc, "navToggle");
    let menu = el(&doc, "navLinks");

    toggle.click();
    assert!(menu.class_list().contains("active"));
    toggle.click();
    assert!(!menu.class_list().contains("active"));

    handle.stop();
    assert!(!handle.is_running());
}

#[wasm_bindgen_test]
fn stop_removes_listeners() {
    let doc = mount();
    let mut handle = resume_motion::start_site().unwrap();
    handle.stop();
    el(&doc, "navToggle").click();
    assert!(!el(&doc, "navLinks").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn missing_markup_does_not_abort_start() {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.body().unwrap().set_inner_html("<p>empty</p>");
    let mut handle = resume_motion::start_site().unwrap();
    assert!(handle.is_running());
    handle.stop();
}

#[wasm_bindgen_test]
async fn stopped_site_never_types() {
    let doc = mount();
    let mut handle = resume_motion::start_site().unwrap();
    handle.stop();
    sleep(1200).await;
    assert_eq!(el(&doc, "typingText").text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
fn placeholder_avatar_is_drawn() {
    let doc = mount();
    let mut handle = resume_motion::start_site().unwrap();
    let img: HtmlImageElement = el(&doc, "profileImg").dyn_into().unwrap();
    assert!(img.src().starts_with("data:image/png"), "src = {}", img.src());
    handle.stop();
}

#[wasm_bindgen_test]
async fn stopped_site_drops_pending_reveal() {
    let doc = mount();
    let mut handle = resume_motion::start_site().unwrap();
    // Let the observer report; the second element is still inside its stagger.
    sleep(40).await;
    handle.stop();
    sleep(300).await;
    let revealed = doc.query_selector_all(".animate-on-scroll").unwrap();
    let second: HtmlElement = revealed.item(1).unwrap().dyn_into().unwrap();
    assert!(!second.class_list().contains("animated"));
}

#[wasm_bindgen_test]
async fn ripple_is_removed_after_stop() {
    let doc = mount();
    let mut handle = resume_motion::start_site().unwrap();
    let button: HtmlElement = doc.query_selector(".btn").unwrap().unwrap().dyn_into().unwrap();
    button.click();
    assert_eq!(button.child_element_count(), 1);
    handle.stop();
    sleep(700).await;
    assert_eq!(button.child_element_count(), 0);
}
