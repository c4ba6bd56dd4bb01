pub mod footer;
pub mod header;
pub mod loading;
pub mod profile_card;
pub mod province_select;
pub mod species_grid;
pub mod species_modal;
pub mod status_badge;
