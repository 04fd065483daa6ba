//! Checkout flow.
//!
//! A three-step state machine over the cart: Cart review, Payment, and the
//! order Confirmation. Moving into Payment is gated on authentication; placing
//! the order empties the cart. There is no server-side order processing - the
//! confirmation step is the end of the flow.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bazarek_core::Price;

use crate::routes::Route;
use crate::services::{AuthStore, CartStore};
use crate::storage::StorageError;

/// Current step of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Reviewing cart contents.
    #[default]
    Cart,
    /// Choosing a payment method and confirming the order.
    Payment,
    /// Order placed.
    Confirmation,
}

/// Offered payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Card,
    /// BLIK code.
    Blik,
    /// Bank transfer.
    Transfer,
}

/// Outcome of an attempt to advance the flow.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckoutAdvance {
    /// The flow moved to the next step.
    Advanced,
    /// The cart is empty; there is nothing to order.
    EmptyCart,
    /// The session is not authenticated; the caller should navigate to the
    /// returned route and come back.
    RedirectedTo(Route),
}

/// Flat delivery cost applied to every non-empty order.
fn delivery_fee() -> Decimal {
    Decimal::from(15)
}

/// Checkout state machine.
pub struct CheckoutFlow {
    auth: Arc<AuthStore>,
    cart: Arc<CartStore>,
    step: RwLock<CheckoutStep>,
    payment_method: RwLock<PaymentMethod>,
}

impl CheckoutFlow {
    /// Start a new flow at the cart-review step.
    #[must_use]
    pub fn new(auth: Arc<AuthStore>, cart: Arc<CartStore>) -> Self {
        Self {
            auth,
            cart,
            step: RwLock::new(CheckoutStep::Cart),
            payment_method: RwLock::new(PaymentMethod::Card),
        }
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> CheckoutStep {
        *self
            .step
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Selected payment method.
    #[must_use]
    pub fn payment_method(&self) -> PaymentMethod {
        *self
            .payment_method
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Select a payment method.
    pub fn set_payment_method(&self, method: PaymentMethod) {
        *self
            .payment_method
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = method;
    }

    /// Delivery cost for the current cart: a flat fee, waived when the cart
    /// is empty.
    #[must_use]
    pub fn delivery_cost(&self) -> Decimal {
        if self.cart.total_items() == 0 {
            Decimal::ZERO
        } else {
            delivery_fee()
        }
    }

    /// Order total: cart total plus the delivery cost.
    #[must_use]
    pub fn order_total(&self) -> Price {
        let subtotal = self.cart.total_price();
        Price::new(subtotal.amount + self.delivery_cost(), subtotal.currency_code)
    }

    /// Move from cart review to payment. Requires a non-empty cart and an
    /// authenticated session; an unauthenticated caller is redirected to the
    /// account route to sign in first.
    pub fn proceed_to_payment(&self) -> CheckoutAdvance {
        if self.cart.total_items() == 0 {
            return CheckoutAdvance::EmptyCart;
        }
        if !self.auth.is_authenticated() {
            debug!("checkout blocked on authentication");
            return CheckoutAdvance::RedirectedTo(Route::Account);
        }

        *self
            .step
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = CheckoutStep::Payment;
        CheckoutAdvance::Advanced
    }

    /// Return from payment to cart review.
    pub fn back_to_cart(&self) {
        let mut step = self
            .step
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *step == CheckoutStep::Payment {
            *step = CheckoutStep::Cart;
        }
    }

    /// Place the order: empties the cart and moves to confirmation. Only
    /// valid from the payment step; a no-op otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the emptied cart cannot be persisted; the flow
    /// stays at the payment step in that case.
    pub fn place_order(&self) -> Result<(), StorageError> {
        let mut step = self
            .step
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *step != CheckoutStep::Payment {
            debug!(?step, "place_order outside payment step ignored");
            return Ok(());
        }

        self.cart.clear()?;
        *step = CheckoutStep::Confirmation;
        debug!(method = ?self.payment_method(), "order placed");
        Ok(())
    }
}
