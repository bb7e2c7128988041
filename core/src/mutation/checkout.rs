// oasis/src/mutation/checkout.rs

//! Turning the current cart into a placed order.

use super::cart_service::CartService;
use super::order_service::OrderService;
use crate::error::{OasisError, OasisResult};
use crate::model::{CollectionDetails, Customer, Order, OrderDraft, PaymentMethod};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
  pub customer: Customer,
  pub payment_method: PaymentMethod,
  pub collection: CollectionDetails,
  pub ecocash_number: Option<String>,
}

/// Places an order for everything in the cart, then empties the cart.
///
/// The cart is only cleared once the order exists; a rejected checkout leaves
/// it as it was.
#[instrument(name = "checkout", skip_all, fields(payment = ?request.payment_method), err(Display))]
pub async fn checkout(cart: &CartService, orders: &OrderService, request: CheckoutRequest) -> OasisResult<Order> {
  let items = cart.items().to_vec();
  if items.is_empty() {
    return Err(OasisError::Validation("Your cart is empty".to_string()));
  }

  let order = orders
    .place(OrderDraft {
      customer: request.customer,
      items,
      payment_method: request.payment_method,
      collection: request.collection,
      ecocash_number: request.ecocash_number,
    })
    .await?;

  cart.clear();
  info!(order_number = %order.order_number, "Checkout complete; cart cleared.");
  Ok(order)
}
