//! Credential forms submitted to the identity service.

use derive_builder::Builder;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct LoginForm {
  pub(crate) email: String,
  pub(crate) password: String,
}

impl LoginForm {
  pub(crate) fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    LoginForm {
      email: email.into(),
      password: password.into(),
    }
  }
}

#[derive(Builder, Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
#[builder(setter(into))]
pub(crate) struct RegisterForm {
  #[builder(default)]
  pub(crate) username: String,
  #[builder(default)]
  pub(crate) email: String,
  #[builder(default)]
  pub(crate) password: String,
}
