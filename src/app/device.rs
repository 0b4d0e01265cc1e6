use leptos::prelude::*;
use leptos_use::{use_media_query, use_window_size, UseWindowSizeReturn};

use crate::state::{device::HOVER_QUERY, DeviceClass};

/// The current device classification, shared by everything below [`App`](super::App).
#[derive(Debug, Clone, Copy)]
pub struct DeviceContext(pub Signal<DeviceClass>);

/// Reads the device class provided by [`provide_device_class`], falling back
/// to the desktop default outside of it.
pub fn use_device_class() -> Signal<DeviceClass> {
    use_context::<DeviceContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::derive(DeviceClass::default))
}

pub fn provide_device_class() -> Signal<DeviceClass> {
    let (device, set_device) = signal(DeviceClass::default());
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let fine_hover = use_media_query(HOVER_QUERY);

    // effects only run in the browser, so the server keeps the default
    Effect::new(move |_| {
        let next = DeviceClass::classify(width.get(), fine_hover.get(), touch_capable());
        if device.get_untracked() != next {
            log::debug!("device class {next:?}");
            set_device.set(next);
        }
    });

    let device: Signal<DeviceClass> = device.into();
    provide_context(DeviceContext(device));
    device
}

#[cfg(feature = "hydrate")]
fn touch_capable() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false)
        || window.navigator().max_touch_points() > 0
}

#[cfg(not(feature = "hydrate"))]
fn touch_capable() -> bool {
    false
}
