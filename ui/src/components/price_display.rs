use dioxus::prelude::*;

use keystall_common::currency::{format_price, Currency};

/// Size variants for price text.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PriceSize {
    Small,
    #[default]
    Large,
    XLarge,
}

impl PriceSize {
    fn class(self) -> &'static str {
        match self {
            PriceSize::Small => "price price-small",
            PriceSize::Large => "price price-large",
            PriceSize::XLarge => "price price-xlarge",
        }
    }
}

/// The store-wide display currency, provided as context at the top of the
/// app and switchable from the header.
pub fn use_display_currency() -> Signal<Currency> {
    use_context::<Signal<Currency>>()
}

/// Formatted price span. An explicit `currency` prop overrides the
/// store-wide display currency.
#[component]
pub fn PriceDisplay(
    amount: f64,
    currency: Option<Currency>,
    #[props(default)] size: PriceSize,
) -> Element {
    let display_currency = use_display_currency();
    let currency = currency.unwrap_or(*display_currency.read());
    let formatted = format_price(amount, &currency);
    let class = size.class();

    rsx! {
        span { class: "{class}", aria_label: "Price: {formatted}", "{formatted}" }
    }
}
