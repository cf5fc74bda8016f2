//! The ordering page as an explicit application context.
//!
//! [`Page`] owns everything a loaded page has: the storage backend, the
//! cart, the signed-in user, the colour scheme, the toast notifier and the
//! widgets. Each public method corresponds to one user interaction and runs
//! the whole cycle synchronously: mutate, persist, refresh derived view
//! state, notify.
//!
//! Nothing here returns an error to the caller. Input problems become
//! alerts (see [`Page::take_alerts`]), storage failures are logged, and
//! features whose markup is missing from the [`PageLayout`] are skipped.

use std::time::Instant;

use askama::Template;
use foodie_core::{Cart, ColorScheme, User};

use crate::config::StorefrontConfig;
use crate::db::{CartRepository, PreferencesRepository, Storage};
use crate::error::Result;
use crate::models::{ProductCard, SignInForm, SignUpForm};
use crate::services::{AuthError, AuthService, CartEvent, CartService, Notifier, Toast};
use crate::views::{
    CartAction, CartCountTemplate, CartModalTemplate, CartView, NavUserTemplate, ToastTemplate,
};
use crate::widgets::{
    AddButton, AuthForm, AuthModal, Flash, MenuLink, MobileMenu, Modal, Rect, ReviewSlider,
};

/// Which optional parts of the page markup are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Menu cards, each with an add-to-cart button.
    pub products: Vec<ProductCard>,
    /// Hamburger button and drawer.
    pub has_mobile_menu: bool,
    /// Dark-mode switch in the drawer.
    pub has_dark_mode_toggle: bool,
    /// Number of review slides.
    pub review_slides: usize,
    /// Previous/next review buttons.
    pub has_review_controls: bool,
    /// Sign-in / sign-up modal.
    pub has_auth_modal: bool,
}

impl PageLayout {
    /// A page with every feature present and the given menu.
    #[must_use]
    pub const fn full(products: Vec<ProductCard>, review_slides: usize) -> Self {
        Self {
            products,
            has_mobile_menu: true,
            has_dark_mode_toggle: true,
            review_slides,
            has_review_controls: true,
            has_auth_modal: true,
        }
    }

    /// A page with no optional features and no menu cards.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            products: Vec::new(),
            has_mobile_menu: false,
            has_dark_mode_toggle: false,
            review_slides: 0,
            has_review_controls: false,
            has_auth_modal: false,
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::full(Vec::new(), 0)
    }
}

/// A loaded ordering page.
pub struct Page<S: Storage> {
    config: StorefrontConfig,
    storage: S,
    products: Vec<ProductCard>,
    add_buttons: Vec<AddButton>,
    cart: Cart,
    current_user: Option<User>,
    color_scheme: ColorScheme,
    dark_mode_toggle: bool,
    notifier: Notifier,
    alerts: Vec<String>,
    badge_bounce: Flash,
    cart_modal: Modal,
    auth_modal: Option<AuthModal>,
    menu: Option<MobileMenu>,
    reviews: Option<ReviewSlider>,
}

impl<S: Storage> Page<S> {
    /// Load the page: hydrate the cart, restore preferences and session,
    /// and set up whichever widgets the layout has.
    pub fn load(config: StorefrontConfig, storage: S, layout: PageLayout) -> Self {
        let cart = CartRepository::new(&storage).load();
        let timings = config.timings;

        let dark_mode_toggle = layout.has_dark_mode_toggle;
        let color_scheme = if dark_mode_toggle {
            PreferencesRepository::new(&storage).color_scheme()
        } else {
            ColorScheme::Light
        };

        let current_user =
            AuthService::new(&storage, config.min_password_length).restore_session();

        let reviews = if layout.has_review_controls {
            ReviewSlider::new(layout.review_slides)
        } else {
            None
        };

        let mut page = Self {
            add_buttons: vec![AddButton::new(timings.button_flash); layout.products.len()],
            products: layout.products,
            cart,
            current_user,
            color_scheme,
            dark_mode_toggle,
            notifier: Notifier::new(timings.toast, timings.toast_fade),
            alerts: Vec::new(),
            badge_bounce: Flash::new(timings.badge_bounce),
            cart_modal: Modal::uncreated(),
            auth_modal: layout.has_auth_modal.then(AuthModal::new),
            menu: layout.has_mobile_menu.then(MobileMenu::new),
            reviews,
            config,
            storage,
        };
        page.badge_bounce.trigger(Instant::now());

        tracing::info!(
            lines = page.cart.len(),
            units = page.cart.total_unit_count(),
            buttons = page.products.len(),
            signed_in = page.current_user.is_some(),
            color_scheme = %page.color_scheme,
            "Page loaded"
        );

        page
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Click on the add-to-cart button of menu card `product`.
    ///
    /// Unknown card indices are ignored.
    pub fn click_add_to_cart(&mut self, product: usize) {
        let Some(card) = self.products.get(product) else {
            tracing::warn!(product, "Add-to-cart click on unknown product card");
            return;
        };
        let (name, price, image) = (
            card.name_or_default().to_owned(),
            card.price_or_default().to_owned(),
            card.image_or_default().to_owned(),
        );

        self.add_to_cart(&name, &price, &image);

        if let Some(button) = self.add_buttons.get_mut(product) {
            button.clicked(Instant::now());
        }
    }

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&mut self, name: &str, price: &str, image: &str) {
        let event = self.cart_service().add(name, price, image);
        self.apply(event);
    }

    /// Change the quantity of the cart line at `index` by `delta`.
    pub fn update_quantity(&mut self, index: usize, delta: i32) {
        let event = self.cart_service().update_quantity(index, delta);
        self.apply(event);
    }

    /// Change the quantity of the cart line named `name` by `delta`.
    pub fn update_quantity_by_name(&mut self, name: &str, delta: i32) {
        let event = self.cart_service().update_quantity_by_name(name, delta);
        self.apply(event);
    }

    /// Remove the cart line at `index`.
    pub fn remove_from_cart(&mut self, index: usize) {
        let event = self.cart_service().remove(index);
        self.apply(event);
    }

    /// Remove the cart line named `name`.
    pub fn remove_by_name(&mut self, name: &str) {
        let event = self.cart_service().remove_by_name(name);
        self.apply(event);
    }

    /// Place the order and clear the cart.
    pub fn checkout(&mut self) {
        let event = self.cart_service().checkout();
        self.apply(event);
    }

    /// Formatted cart total.
    #[must_use]
    pub fn total(&self) -> String {
        self.cart.total(self.config.currency).display()
    }

    /// Run a control from the cart modal.
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::Increment(index) => self.update_quantity(index, 1),
            CartAction::Decrement(index) => self.update_quantity(index, -1),
            CartAction::Remove(index) => self.remove_from_cart(index),
            CartAction::Checkout => self.checkout(),
            CartAction::Close => self.close_cart(),
        }
    }

    /// Open the cart modal (the cart icon), creating it on first use.
    pub fn open_cart(&mut self) {
        if self.cart_modal.open() {
            tracing::debug!("Created cart modal");
        }
    }

    /// Close the cart modal.
    pub fn close_cart(&mut self) {
        self.cart_modal.close();
    }

    /// A click on the cart modal; `on_backdrop` when outside the dialog.
    pub fn cart_modal_click(&mut self, on_backdrop: bool) {
        self.cart_modal.click(on_backdrop);
    }

    fn cart_service(&mut self) -> CartService<'_, S> {
        CartService::new(&mut self.cart, &self.storage, self.config.currency)
    }

    fn apply(&mut self, event: CartEvent) {
        let now = Instant::now();

        if let Some(alert) = event.alert() {
            self.alert(alert);
        }
        if event.changed_cart() {
            self.badge_bounce.trigger(now);
        }
        if matches!(event, CartEvent::CheckedOut { .. }) {
            self.close_cart();
        }
        if let Some(message) = event.toast() {
            self.notifier.show(message, now);
        }
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Click on a sign-in button. Inert once a user is signed in.
    pub fn open_auth(&mut self) {
        if self.current_user.is_some() {
            return;
        }
        if let Some(modal) = &mut self.auth_modal {
            modal.open_sign_in();
        }
    }

    /// Close the auth modal.
    pub fn close_auth(&mut self) {
        if let Some(modal) = &mut self.auth_modal {
            modal.modal.close();
        }
    }

    /// A click on the auth modal; `on_backdrop` when outside the dialog.
    pub fn auth_modal_click(&mut self, on_backdrop: bool) {
        if let Some(modal) = &mut self.auth_modal {
            modal.modal.click(on_backdrop);
        }
    }

    /// Switch the auth modal to the sign-up form.
    pub fn show_sign_up_form(&mut self) {
        if let Some(modal) = &mut self.auth_modal {
            modal.show_sign_up();
        }
    }

    /// Switch the auth modal to the sign-in form.
    pub fn show_sign_in_form(&mut self) {
        if let Some(modal) = &mut self.auth_modal {
            modal.show_sign_in();
        }
    }

    /// Submit the sign-in form.
    pub fn sign_in(&mut self, form: &SignInForm) {
        let result = self.auth_service().sign_in(form);
        match result {
            Ok(user) => {
                self.notifier
                    .show(format!("Welcome back, {}! 🎉", user.name), Instant::now());
                self.signed_in(user);
            }
            Err(e) => self.auth_failed(&e),
        }
    }

    /// Submit the sign-up form.
    pub fn sign_up(&mut self, form: &SignUpForm) {
        let result = self.auth_service().sign_up(form);
        match result {
            Ok(user) => {
                self.notifier.show(
                    format!("Account created successfully! Welcome {}! 🎉", user.name),
                    Instant::now(),
                );
                self.signed_in(user);
            }
            Err(e) => self.auth_failed(&e),
        }
    }

    /// Click on a "continue with Google" button.
    pub fn google_sign_in(&mut self) {
        self.alert("Google Sign In coming soon! 🚀".to_string());
    }

    fn auth_service(&self) -> AuthService<'_, S> {
        AuthService::new(&self.storage, self.config.min_password_length)
    }

    fn signed_in(&mut self, user: User) {
        tracing::debug!(display_name = user.display_name(), "Updating navbar user");
        self.current_user = Some(user);
        self.close_auth();
    }

    fn auth_failed(&mut self, error: &AuthError) {
        if matches!(error, AuthError::Storage(_)) {
            tracing::error!(error = %error, "Auth storage failure");
        } else {
            tracing::debug!(error = %error, "Auth rejected");
        }
        self.alert(error.alert_message());
    }

    // =========================================================================
    // Preferences & widgets
    // =========================================================================

    /// Flip the dark-mode switch. Ignored when the page has no switch.
    pub fn set_dark_mode(&mut self, enabled: bool) {
        if !self.dark_mode_toggle {
            return;
        }
        let scheme = if enabled {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        self.color_scheme = scheme;

        if let Err(e) = PreferencesRepository::new(&self.storage).set_color_scheme(scheme) {
            tracing::error!(error = %e, "Failed to persist dark-mode flag");
        }

        let message = if enabled {
            "Dark Mode Enabled 🌙"
        } else {
            "Light Mode Enabled ☀️"
        };
        self.notifier.show(message, Instant::now());
    }

    /// The hamburger button.
    pub fn toggle_menu(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.toggle();
        }
    }

    /// A click on the overlay behind the drawer.
    pub fn menu_overlay_click(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.overlay_click();
        }
    }

    /// A click on the drawer at `(x, y)`.
    pub fn menu_drawer_click(&mut self, x: f64, y: f64, drawer: Rect) {
        if let Some(menu) = &mut self.menu {
            menu.drawer_click(x, y, drawer);
        }
    }

    /// A click on a link inside the drawer.
    pub fn menu_link_click(&mut self, link: MenuLink) {
        if let Some(menu) = &mut self.menu {
            menu.link_click(link);
        }
        if link == MenuLink::SignIn {
            self.open_auth();
        }
    }

    /// Next review slide.
    pub fn next_review(&mut self) {
        if let Some(reviews) = &mut self.reviews {
            reviews.next();
        }
    }

    /// Previous review slide.
    pub fn prev_review(&mut self) {
        if let Some(reviews) = &mut self.reviews {
            reviews.prev();
        }
    }

    /// Advance timed effects to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.notifier.tick(now);
        self.badge_bounce.tick(now);
        for button in &mut self.add_buttons {
            button.tick(now);
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Name shown in the navigation bar, when signed in.
    #[must_use]
    pub fn nav_display_name(&self) -> Option<&str> {
        self.current_user.as_ref().map(User::display_name)
    }

    #[must_use]
    pub const fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    #[must_use]
    pub const fn toast(&self) -> Option<&Toast> {
        self.notifier.current()
    }

    /// Drain alerts raised since the last call, oldest first.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    #[must_use]
    pub const fn cart_modal(&self) -> &Modal {
        &self.cart_modal
    }

    /// Which auth form is showing, when the auth modal is open.
    #[must_use]
    pub fn auth_form(&self) -> Option<AuthForm> {
        self.auth_modal
            .filter(|m| m.modal.is_open())
            .map(|m| m.form)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_some_and(|m| m.is_open())
    }

    /// Active review slide, when the page has a working carousel.
    #[must_use]
    pub fn active_review(&self) -> Option<usize> {
        self.reviews.map(|r| r.current())
    }

    /// Label of the add-to-cart button on card `product` at `now`.
    #[must_use]
    pub fn add_button_label(&self, product: usize, now: Instant) -> Option<&'static str> {
        self.add_buttons.get(product).map(|b| b.label(now))
    }

    /// Whether page scrolling is locked behind an overlay.
    #[must_use]
    pub fn body_scroll_locked(&self) -> bool {
        self.cart_modal.is_open()
            || self.auth_modal.is_some_and(|m| m.modal.is_open())
            || self.menu_open()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    fn alert(&mut self, message: String) {
        tracing::debug!(%message, "Alert");
        self.alerts.push(message);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// View of the cart for templates.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::new(&self.cart, self.config.currency, &self.config.placeholder_image)
    }

    /// Render the cart modal, or `None` if it has not been created yet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if the template fails.
    pub fn render_cart_modal(&self) -> Result<Option<String>> {
        if !self.cart_modal.is_created() {
            return Ok(None);
        }
        let view = self.cart_view();
        let html = CartModalTemplate {
            cart: &view,
            open: self.cart_modal.is_open(),
        }
        .render()?;
        Ok(Some(html))
    }

    /// Render the cart badge as of `now`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if the template fails.
    pub fn render_badge(&self, now: Instant) -> Result<String> {
        Ok(CartCountTemplate {
            count: self.cart.total_unit_count(),
            bouncing: self.badge_bounce.is_active(now),
        }
        .render()?)
    }

    /// Render the navigation sign-in button.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if the template fails.
    pub fn render_nav_user(&self) -> Result<String> {
        Ok(NavUserTemplate {
            display_name: self.nav_display_name().map(str::to_owned),
        }
        .render()?)
    }

    /// Render the live toast, if any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if the template fails.
    pub fn render_toast(&self) -> Result<Option<String>> {
        self.notifier
            .current()
            .map(|toast| ToastTemplate::from(toast).render())
            .transpose()
            .map_err(Into::into)
    }
}
