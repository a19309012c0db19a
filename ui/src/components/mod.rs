pub mod app;
pub mod catalog_state;
pub mod category_filter;
pub mod error_message;
pub mod hero_banner;
pub mod home_view;
pub mod price_display;
pub mod product_card;
pub mod product_detail_view;
pub mod product_grid;
pub mod product_image;
