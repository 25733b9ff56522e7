mod pointer;
mod scroll;
mod ui;

pub use pointer::wire_orbit_handlers;
pub use scroll::wire_scroll;
pub use ui::{wire_cards, wire_page_controls, wire_reset_button};
