// DOM hooks and page timing used by the web frontend.
// Element ids and class names match the page markup.

// Canvas and scroll container
pub const CANVAS_ID: &str = "blackhole-canvas";
pub const SCROLL_CONTAINER_ID: &str = "scroll-labels";
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Component cards
pub const CARD_SELECTOR: &str = ".component-card";
pub const CARD_COMPONENT_ATTR: &str = "data-component";
pub const CARD_ACTIVE_CLASS: &str = "active";

// Anchored connector labels
pub const CONNECTOR_SELECTOR: &str = ".label-connector";
pub const CONNECTOR_TARGET_ATTR: &str = "data-target";
pub const CONNECTOR_VISIBLE_CLASS: &str = "visible";

// Reset button appended to the body
pub const RESET_BUTTON_HTML: &str = "<i class=\"fas fa-undo\"></i> Reset View";
pub const RESET_BUTTON_CLASS: &str = "fixed bottom-6 right-6 px-4 py-2 bg-white/10 backdrop-blur-md rounded-full text-sm hover:bg-white/20 transition-all duration-300";

// Info panel and fullscreen
pub const INFO_TOGGLE_ID: &str = "info-toggle";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_PANEL_HIDDEN_CLASS: &str = "translate-x-full";
pub const FULLSCREEN_TOGGLE_ID: &str = "fullscreen-toggle";

// Loading screen
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_FADE_DELAY_MS: i32 = 1500;
pub const LOADING_HIDE_DELAY_MS: i32 = 500; // after the fade starts

// Renderer
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
