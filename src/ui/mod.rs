pub mod app;
pub mod input;
pub mod results;
pub mod toast;

use common::EncodedResult;
use leptos::prelude::*;

use crate::{
    presenter::{Notice, Presenter},
    timing::TOAST_DURATION,
    toast::ToastSlot,
};

/// Presenter backed by the signals the popup components render from.
#[derive(Debug, Clone, Copy)]
pub struct SignalPresenter {
    pub results: RwSignal<Vec<EncodedResult>>,
    pub toast: RwSignal<ToastSlot>,
}

impl SignalPresenter {
    /// Install a fresh presenter as leptos context
    pub fn install_as_context() {
        provide_context(Self {
            results: RwSignal::new(Vec::new()),
            toast: RwSignal::new(ToastSlot::default()),
        });
    }
}

impl Presenter for SignalPresenter {
    fn render(&self, results: Vec<EncodedResult>) {
        self.results.set(results);
    }

    fn notify(&self, notice: Notice) {
        let toast = self.toast;
        if let Some(id) = toast.try_update(|slot| slot.show(notice.to_string())) {
            set_timeout(
                move || {
                    toast.update(|slot| {
                        slot.dismiss(id);
                    });
                },
                TOAST_DURATION,
            );
        }
    }
}
