//! Modal dialogs.

/// Show/hide state of a modal dialog.
///
/// A modal may be created lazily on first open; `created` records whether
/// its markup exists yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    created: bool,
    open: bool,
}

impl Modal {
    /// A modal whose markup does not exist yet.
    #[must_use]
    pub const fn uncreated() -> Self {
        Self {
            created: false,
            open: false,
        }
    }

    /// A modal already present in the page markup, hidden.
    #[must_use]
    pub const fn present() -> Self {
        Self {
            created: true,
            open: false,
        }
    }

    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.created
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Show the modal, creating it if needed. Returns `true` if it was
    /// created by this call.
    pub const fn open(&mut self) -> bool {
        let created_now = !self.created;
        self.created = true;
        self.open = true;
        created_now
    }

    /// Hide the modal. No effect if it was never created.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// A click on the modal; closes it when the click hit the backdrop
    /// itself rather than the dialog content.
    pub const fn click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }
}

/// Which form the auth modal shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    SignIn,
    SignUp,
}

/// The sign-in / sign-up modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthModal {
    pub modal: Modal,
    pub form: AuthForm,
}

impl AuthModal {
    /// Auth modal present in the page markup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modal: Modal::present(),
            form: AuthForm::SignIn,
        }
    }

    /// Open on the sign-in form.
    pub const fn open_sign_in(&mut self) {
        self.modal.open();
        self.form = AuthForm::SignIn;
    }

    pub const fn show_sign_in(&mut self) {
        self.form = AuthForm::SignIn;
    }

    pub const fn show_sign_up(&mut self) {
        self.form = AuthForm::SignUp;
    }
}
