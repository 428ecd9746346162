pub mod listing_page;
