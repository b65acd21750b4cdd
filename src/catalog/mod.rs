pub mod api;
pub mod dto;
pub mod facets;
pub mod filter;
pub mod model;
pub mod store;
pub mod view;
