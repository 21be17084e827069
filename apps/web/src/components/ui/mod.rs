mod alert;
mod button;
mod spinner;
mod toast;

pub(crate) use button::{Button, ButtonKind};
pub(crate) use spinner::Spinner;
pub(crate) use toast::{use_toasts, ToastProvider};
