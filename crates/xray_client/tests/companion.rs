#![cfg(target_arch = "wasm32")]

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos_use::core::ConnectionReadyState;
use leptos_use::UseWebSocketError;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use xray_client::{use_companion, CompanionContext, CompanionProvider};
use xray_common::{
    ApiError, Bone, CodecError, CompanionConfig, OculusMessage, Part, PartData, PartsApi,
    RevealTiming, SelectOutcome, StatusMessage, ViewState,
};

wasm_bindgen_test_configure!(run_in_browser);

/// In-memory anatomy API. `fail` makes every request error out.
#[derive(Default)]
struct TableApi {
    parts: Vec<Part>,
    fail: bool,
    requests: Mutex<usize>,
}

#[async_trait(?Send)]
impl PartsApi for TableApi {
    async fn parts(&self) -> Result<Vec<Part>, ApiError> {
        if let Ok(mut requests) = self.requests.lock() {
            *requests += 1;
        }
        if self.fail {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(self.parts.clone())
    }

    async fn bones(&self, part_id: u64) -> Result<Vec<Bone>, ApiError> {
        Ok(vec![Bone {
            id: 100 + part_id,
            name: "Frontal".into(),
            description: String::new(),
            part_id,
        }])
    }
}

fn table_api(fail: bool) -> Arc<TableApi> {
    Arc::new(TableApi {
        parts: vec![
            Part {
                id: 1,
                name: "Cráneo".into(),
                description: "Protege el encéfalo".into(),
            },
            Part {
                id: 2,
                name: "Caja torácica".into(),
                description: "Protege el corazón".into(),
            },
        ],
        fail,
        ..Default::default()
    })
}

fn part(name: &str, description: &str) -> PartData {
    PartData {
        name: name.into(),
        description: description.into(),
        bones: Vec::new(),
    }
}

fn config(name_interval_ms: u64, description_interval_ms: u64) -> CompanionConfig {
    CompanionConfig {
        websocket_url: "ws://127.0.0.1:9".into(),
        timing: RevealTiming {
            name_interval_ms,
            description_interval_ms,
        },
        ..CompanionConfig::default()
    }
}

async fn sleep(ms: u64) {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        Duration::from_millis(ms),
    );
    let _ = rx.await;
}

#[component]
fn Capture(slot: Rc<RefCell<Option<CompanionContext>>>) -> impl IntoView {
    *slot.borrow_mut() = Some(use_companion());
}

fn host() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host.unchecked_into()
}

/// Mount a provider and hand back its context with the mount handle.
fn mount_provider(config: CompanionConfig, api: Arc<TableApi>) -> (CompanionContext, Box<dyn Any>) {
    let slot = Rc::new(RefCell::new(None));
    let captured = slot.clone();
    let handle = leptos::mount::mount_to(host(), move || {
        let api: Arc<dyn PartsApi + Send + Sync> = api;
        view! {
            <CompanionProvider config=config api=api>
                <Capture slot=captured />
            </CompanionProvider>
        }
    });
    let ctx = slot.borrow_mut().take().unwrap();
    (ctx, Box::new(handle))
}

#[component]
fn Offline(slot: Rc<RefCell<Option<CompanionContext>>>, api: Arc<TableApi>) -> impl IntoView {
    let ctx = CompanionContext::new(
        RwSignal::new(ViewState::new()),
        Signal::stored(ConnectionReadyState::Open),
        Arc::new(config(1, 1)),
        Arc::new(|| {}),
    )
    .with_api(api);
    *slot.borrow_mut() = Some(ctx);
}

/// A context with no socket behind it, for routing frames by hand.
fn mount_offline(api: Arc<TableApi>) -> (CompanionContext, Box<dyn Any>) {
    let slot = Rc::new(RefCell::new(None));
    let captured = slot.clone();
    let handle = leptos::mount::mount_to(host(), move || {
        view! { <Offline slot=captured api=api /> }
    });
    let ctx = slot.borrow_mut().take().unwrap();
    (ctx, Box::new(handle))
}

fn shown(state: &ViewState) -> (usize, usize) {
    let reveal = state.reveal().unwrap();
    (reveal.name().shown_chars(), reveal.description().shown_chars())
}

#[wasm_bindgen_test]
async fn reveal_runs_to_completion() {
    let (ctx, _handle) = mount_provider(config(10, 2), table_api(false));
    ctx.state.update(|s| {
        s.apply_part(part("Mano", "Dedos"));
    });

    sleep(400).await;
    let state = ctx.state.get_untracked();
    let reveal = state.reveal().unwrap();
    assert_eq!(reveal.name().visible(), "Mano");
    assert_eq!(reveal.description().visible(), "Dedos");
    assert!(!state.is_revealing());
}

#[wasm_bindgen_test]
async fn one_timer_drives_the_reveal() {
    let (ctx, _handle) = mount_provider(config(60, 60), table_api(false));
    ctx.state.update(|s| {
        s.apply_part(part("Cráneo", "Protege el encéfalo"));
    });

    // Frames that leave the reveal alone must not schedule extra steps.
    for _ in 0..5 {
        ctx.handle_message(&OculusMessage::Connected);
        ctx.handle_message(&OculusMessage::parse("Oculus client: Wave"));
    }

    sleep(150).await;
    let (name, description) = shown(&ctx.state.get_untracked());
    assert!(name <= 3, "name advanced {} steps", name);
    assert_eq!(description, 0);
}

#[wasm_bindgen_test]
async fn new_part_mid_reveal_restarts_and_same_part_does_not() {
    let (ctx, _handle) = mount_provider(config(30, 1), table_api(false));
    ctx.state.update(|s| {
        s.apply_part(part("Cráneo", "Protege el encéfalo"));
    });
    sleep(100).await;
    let (before, _) = shown(&ctx.state.get_untracked());
    assert!(before >= 1);

    let outcome = ctx
        .state
        .try_update(|s| s.apply_part(part("Cráneo", "Protege el encéfalo")));
    assert_eq!(outcome, Some(SelectOutcome::Refreshed));
    assert!(shown(&ctx.state.get_untracked()).0 >= before);

    let outcome = ctx
        .state
        .try_update(|s| s.apply_part(part("Pie izquierdo", "Soporta el peso")));
    assert_eq!(outcome, Some(SelectOutcome::Retargeted));
    assert_eq!(shown(&ctx.state.get_untracked()), (0, 0));

    sleep(900).await;
    let state = ctx.state.get_untracked();
    let reveal = state.reveal().unwrap();
    assert_eq!(reveal.name().visible(), "Pie izquierdo");
    assert_eq!(reveal.description().visible(), "Soporta el peso");
}

#[wasm_bindgen_test]
async fn set_frame_resolves_through_the_api() {
    let api = table_api(false);
    let (ctx, _handle) = mount_offline(api.clone());

    ctx.handle_message(&OculusMessage::parse("Oculus client: Set cranium"));
    sleep(50).await;

    let state = ctx.state.get_untracked();
    let active = state.active_part().unwrap();
    assert_eq!(active.name, "Cráneo");
    assert_eq!(active.description, "Protege el encéfalo");
    assert_eq!(active.bones.len(), 1);
    assert_eq!(*api.requests.lock().unwrap(), 1);
}

#[wasm_bindgen_test]
async fn failed_resolution_leaves_state_stale() {
    let api = table_api(true);
    let (ctx, _handle) = mount_offline(api.clone());
    ctx.state.update(|s| {
        s.apply_part(part("Cráneo", "Protege el encéfalo"));
    });
    let before = ctx.state.get_untracked();

    ctx.handle_message(&OculusMessage::parse("Oculus client: Set rib-cage"));
    sleep(50).await;

    assert_eq!(*api.requests.lock().unwrap(), 1);
    assert_eq!(ctx.state.get_untracked(), before);
}

#[wasm_bindgen_test]
async fn ignored_frames_do_not_notify() {
    let (ctx, _handle) = mount_offline(table_api(false));
    let state = ctx.state;
    let runs = Arc::new(Mutex::new(0usize));
    let counter = runs.clone();
    let owner = Owner::new();
    owner.with(|| {
        Effect::new(move |_| {
            state.track();
            if let Ok(mut runs) = counter.lock() {
                *runs += 1;
            }
        });
    });
    sleep(10).await;
    let baseline = *runs.lock().unwrap();

    ctx.handle_message(&OculusMessage::parse("Oculus client: Wave"));
    ctx.handle_message(&OculusMessage::parse("Oculus client: Set elbow-pad"));
    sleep(10).await;
    assert_eq!(*runs.lock().unwrap(), baseline);

    ctx.handle_message(&OculusMessage::Connected);
    sleep(10).await;
    assert_eq!(*runs.lock().unwrap(), baseline + 1);
}

#[wasm_bindgen_test]
async fn only_socket_error_events_reach_the_status_line() {
    let (ctx, _handle) = mount_offline(table_api(false));
    ctx.handle_message(&OculusMessage::Remove);

    let blank: UseWebSocketError<CodecError, CodecError> =
        UseWebSocketError::Codec(codee::CodecError::Decode(CodecError::EmptyFrame));
    ctx.on_socket_error(&blank);
    assert_eq!(ctx.state.get_untracked().status, None);

    let event = web_sys::Event::new("error").unwrap();
    ctx.on_socket_error(&UseWebSocketError::<CodecError, CodecError>::Event(event));
    assert_eq!(
        ctx.state.get_untracked().status,
        Some(StatusMessage::ConnectionError)
    );
}

#[wasm_bindgen_test]
async fn frames_after_teardown_are_dropped() {
    let (ctx, handle) = mount_provider(config(5, 5), table_api(false));
    ctx.state.update(|s| {
        s.apply_part(part("Mano", "Dedos"));
    });
    drop(handle);

    ctx.handle_message(&OculusMessage::Connected);
    ctx.handle_message(&OculusMessage::parse("Oculus client: Set left-hand"));
    sleep(100).await;
    assert!(ctx.state.try_get_untracked().is_none());
}
