/// Identifies one shown message, so a late dismissal can not remove a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Slot holding the single transient message of the popup.
#[derive(Debug, Default, Clone)]
pub struct ToastSlot {
    current: Option<Toast>,
    issued: u64,
}

impl ToastSlot {
    /// Show `message`, replacing any message currently shown.
    pub fn show(&mut self, message: impl Into<String>) -> ToastId {
        self.issued += 1;
        let id = ToastId(self.issued);
        self.current = Some(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Remove the message `id` if it is still the one shown.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
