//! Copying text to the system clipboard.
//!
//! The Async Clipboard API is tried first. When it is missing or rejects the
//! write (permissions, insecure context, extension restrictions), the text is
//! copied from a temporary off-screen textarea with the legacy copy command.

use log::{debug, error, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlDocument, HtmlTextAreaElement,
    js_sys::{Function, Promise, Reflect},
};

use crate::error_handling::JsException;

#[derive(Debug, Error)]
pub enum Error {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("copy command was rejected")]
    Rejected,
    #[error(transparent)]
    Js(#[from] JsException),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value.into())
    }
}

/// A way of placing text on the clipboard.
#[allow(async_fn_in_trait)]
pub trait CopyMechanism {
    async fn write(&self, text: &str) -> Result<(), Error>;
}

impl<M: CopyMechanism> CopyMechanism for &M {
    async fn write(&self, text: &str) -> Result<(), Error> {
        (*self).write(text).await
    }
}

/// `navigator.clipboard.writeText`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsyncClipboard;

impl AsyncClipboard {
    fn write_text() -> Result<(JsValue, Function), Error> {
        let window = web_sys::window().ok_or(Error::Unavailable)?;
        let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(Error::Unavailable);
        }

        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
            .dyn_into::<Function>()
            .map_err(|_| Error::Unavailable)?;
        Ok((clipboard, write_text))
    }
}

impl CopyMechanism for AsyncClipboard {
    async fn write(&self, text: &str) -> Result<(), Error> {
        let (clipboard, write_text) = Self::write_text()?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))?
            .dyn_into::<Promise>()
            .map_err(|_| Error::Unavailable)?;
        JsFuture::from(promise).await?;
        Ok(())
    }
}

/// A document able to hold a temporary selectable text surface.
pub trait SelectionHost {
    type Surface;

    /// Create a surface containing `text` and attach it to the document.
    fn attach(&self, text: &str) -> Result<Self::Surface, Error>;

    /// Select the whole surface and run the copy command on it.
    fn copy_selection(&self, surface: &Self::Surface) -> Result<bool, Error>;

    /// Remove the surface from the document.
    fn detach(&self, surface: &Self::Surface);
}

/// Detaches its surface when dropped.
struct AttachedSurface<'a, H: SelectionHost> {
    host: &'a H,
    surface: H::Surface,
}

impl<'a, H: SelectionHost> AttachedSurface<'a, H> {
    fn new(host: &'a H, text: &str) -> Result<Self, Error> {
        let surface = host.attach(text)?;
        Ok(Self { host, surface })
    }

    fn copy(&self) -> Result<bool, Error> {
        self.host.copy_selection(&self.surface)
    }
}

impl<H: SelectionHost> Drop for AttachedSurface<'_, H> {
    fn drop(&mut self) {
        self.host.detach(&self.surface);
    }
}

/// Copy through a temporary selection and the legacy copy command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionCopy<H>(pub H);

impl<H: SelectionHost> CopyMechanism for SelectionCopy<H> {
    async fn write(&self, text: &str) -> Result<(), Error> {
        let surface = AttachedSurface::new(&self.0, text)?;
        if surface.copy()? {
            Ok(())
        } else {
            Err(Error::Rejected)
        }
    }
}

/// The popup document, using an off-screen `<textarea>` as surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomSelectionHost;

impl DomSelectionHost {
    fn document() -> Result<Document, Error> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::Unavailable)
    }
}

impl SelectionHost for DomSelectionHost {
    type Surface = HtmlTextAreaElement;

    fn attach(&self, text: &str) -> Result<Self::Surface, Error> {
        let document = Self::document()?;
        let body = document.body().ok_or(Error::Unavailable)?;

        let area = document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| Error::Unavailable)?;
        area.set_value(text);

        let style = area.style();
        style.set_property("position", "fixed")?;
        style.set_property("left", "-999999px")?;
        style.set_property("top", "-999999px")?;

        body.append_child(&area)?;
        Ok(area)
    }

    fn copy_selection(&self, surface: &Self::Surface) -> Result<bool, Error> {
        surface.focus()?;
        surface.select();

        let document = Self::document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| Error::Unavailable)?;
        Ok(document.exec_command("copy")?)
    }

    fn detach(&self, surface: &Self::Surface) {
        surface.remove();
    }
}

/// Primary mechanism with a fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct Clipboard<P, F> {
    primary: P,
    fallback: F,
}

/// The browser clipboard.
pub type DomClipboard = Clipboard<AsyncClipboard, SelectionCopy<DomSelectionHost>>;

impl<P: CopyMechanism, F: CopyMechanism> Clipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Copy `text`, returning whether any mechanism succeeded.
    pub async fn copy(&self, text: &str) -> bool {
        match self.primary.write(text).await {
            Ok(()) => {
                debug!("Copied {} bytes", text.len());
                return true;
            }
            Err(err) => warn!("Clipboard write failed, using copy command: {err}"),
        }

        match self.fallback.write(text).await {
            Ok(()) => true,
            Err(err) => {
                error!("Fallback copy failed: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;

    /// A mechanism with a fixed outcome, counting its uses.
    #[derive(Debug, Default)]
    pub struct Scripted {
        pub fails: bool,
        pub calls: Cell<usize>,
        pub written: RefCell<Vec<String>>,
    }

    impl Scripted {
        pub fn failing() -> Self {
            Self {
                fails: true,
                ..Self::default()
            }
        }
    }

    impl CopyMechanism for Scripted {
        async fn write(&self, text: &str) -> Result<(), Error> {
            self.calls.set(self.calls.get() + 1);
            if self.fails {
                return Err(Error::Unavailable);
            }
            self.written.borrow_mut().push(text.to_owned());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    enum CommandOutcome {
        #[default]
        Copied,
        Refused,
        Throws,
    }

    /// Tracks the surfaces currently attached.
    #[derive(Debug, Default)]
    struct FakeDocument {
        outcome: CommandOutcome,
        attach_fails: bool,
        attached: RefCell<Vec<usize>>,
        next: Cell<usize>,
        clipboard: RefCell<Option<String>>,
        texts: RefCell<Vec<String>>,
    }

    impl SelectionHost for FakeDocument {
        type Surface = usize;

        fn attach(&self, text: &str) -> Result<usize, Error> {
            if self.attach_fails {
                return Err(Error::Unavailable);
            }
            let id = self.next.get();
            self.next.set(id + 1);
            self.attached.borrow_mut().push(id);
            self.texts.borrow_mut().push(text.to_owned());
            Ok(id)
        }

        fn copy_selection(&self, surface: &usize) -> Result<bool, Error> {
            assert!(self.attached.borrow().contains(surface));
            match self.outcome {
                CommandOutcome::Copied => {
                    *self.clipboard.borrow_mut() = Some(self.texts.borrow()[*surface].clone());
                    Ok(true)
                }
                CommandOutcome::Refused => Ok(false),
                CommandOutcome::Throws => Err(Error::Unavailable),
            }
        }

        fn detach(&self, surface: &usize) {
            self.attached.borrow_mut().retain(|id| id != surface);
        }
    }

    fn with_fallback(document: FakeDocument) -> Clipboard<Scripted, SelectionCopy<FakeDocument>> {
        Clipboard::new(Scripted::failing(), SelectionCopy(document))
    }

    #[test]
    fn primary_success_skips_fallback() {
        let clipboard = Clipboard::new(Scripted::default(), SelectionCopy(FakeDocument::default()));
        assert!(block_on(clipboard.copy("<s")));
        assert_eq!(clipboard.primary.written.borrow().as_slice(), ["<s"]);
        assert_eq!(clipboard.fallback.0.next.get(), 0);
    }

    #[test]
    fn fallback_after_primary_failure() {
        let clipboard = with_fallback(FakeDocument::default());
        assert!(block_on(clipboard.copy("&#60;")));
        assert_eq!(clipboard.primary.calls.get(), 1);
        assert_eq!(
            clipboard.fallback.0.clipboard.borrow().as_deref(),
            Some("&#60;")
        );
        assert!(clipboard.fallback.0.attached.borrow().is_empty());
    }

    #[test]
    fn refused_command_fails_without_residue() {
        let clipboard = with_fallback(FakeDocument {
            outcome: CommandOutcome::Refused,
            ..FakeDocument::default()
        });
        assert!(!block_on(clipboard.copy("text")));
        assert_eq!(clipboard.fallback.0.next.get(), 1);
        assert!(clipboard.fallback.0.attached.borrow().is_empty());
    }

    #[test]
    fn throwing_command_fails_without_residue() {
        let clipboard = with_fallback(FakeDocument {
            outcome: CommandOutcome::Throws,
            ..FakeDocument::default()
        });
        assert!(!block_on(clipboard.copy("text")));
        assert!(clipboard.fallback.0.attached.borrow().is_empty());
    }

    #[test]
    fn failed_attach_fails() {
        let clipboard = with_fallback(FakeDocument {
            attach_fails: true,
            ..FakeDocument::default()
        });
        assert!(!block_on(clipboard.copy("text")));
        assert!(clipboard.fallback.0.clipboard.borrow().is_none());
    }

    #[test]
    fn both_failing() {
        let clipboard = Clipboard::new(Scripted::failing(), Scripted::failing());
        assert!(!block_on(clipboard.copy("text")));
        assert_eq!(clipboard.fallback.calls.get(), 1);
    }
}
