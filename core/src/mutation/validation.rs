// oasis/src/mutation/validation.rs

//! Input checks run before anything reaches a store.

use crate::error::{OasisError, OasisResult};
use crate::model::{OrderDraft, PaymentMethod, Product, ProductDraft, TimeSlot};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 10;

fn require(condition: bool, message: &str) -> OasisResult<()> {
  if condition {
    Ok(())
  } else {
    Err(OasisError::Validation(message.to_string()))
  }
}

fn not_blank(value: &str) -> bool {
  !value.trim().is_empty()
}

fn check_product_fields(name: &str, size: &str, price: Decimal, image: &str) -> OasisResult<()> {
  require(not_blank(name), "Product name is required")?;
  require(not_blank(size), "Size/Variant is required")?;
  require(price > Decimal::ZERO, "Price must be greater than 0")?;
  require(not_blank(image), "Image URL is required")
}

pub fn validate_product_draft(draft: &ProductDraft) -> OasisResult<()> {
  check_product_fields(&draft.name, &draft.size, draft.price, &draft.image)
}

pub fn validate_product(product: &Product) -> OasisResult<()> {
  require(not_blank(&product.id), "Product id is required")?;
  check_product_fields(&product.name, &product.size, product.price, &product.image)
}

/// Loose shape check: something before the `@`, and a dot somewhere after it.
pub fn looks_like_email(email: &str) -> bool {
  match email.trim().split_once('@') {
    Some((local, domain)) => {
      !local.is_empty()
        && !domain.contains('@')
        && domain
          .split_once('.')
          .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
    }
    None => false,
  }
}

/// `today` is the local calendar day; collection cannot be booked before it.
pub fn validate_order_draft(draft: &OrderDraft, today: NaiveDate) -> OasisResult<()> {
  let customer = &draft.customer;
  require(
    customer.full_name().trim().chars().count() >= MIN_NAME_LEN,
    "Customer name must be at least 2 characters",
  )?;
  require(
    customer.phone.trim().chars().count() >= MIN_PHONE_LEN,
    "Phone number must be at least 10 characters",
  )?;
  require(looks_like_email(&customer.email), "A valid email address is required")?;
  require(!draft.items.is_empty(), "An order needs at least one item")?;
  require(
    draft.items.iter().all(|item| item.quantity >= 1),
    "Every item needs a quantity of at least 1",
  )?;
  require(
    TimeSlot::from_label(&draft.collection.time_slot).is_some(),
    "Collection time must be one of the available slots",
  )?;
  require(draft.collection.date >= today, "Collection date cannot be in the past")?;
  if draft.payment_method == PaymentMethod::Ecocash {
    require(
      draft.ecocash_number.as_deref().map_or(false, not_blank),
      "An EcoCash number is required for EcoCash payments",
    )?;
  }
  Ok(())
}
