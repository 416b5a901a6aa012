pub const CONTAINER: &str = "min-h-screen bg-gray-950 text-white w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-black/60 backdrop-blur-md border-b border-gray-800/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-white hover:text-yellow-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-300 hover:text-yellow-400 transition-all duration-200";
pub const CARD: &str = "bg-gray-900 rounded-xl shadow-lg p-6 border border-gray-700";
pub const CARD_HOVER: &str = "bg-gray-900 rounded-xl shadow-lg p-6 flex flex-col items-center hover:scale-105 transition-transform border border-gray-700";
pub const CARD_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-4 text-red-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-blue-600 hover:bg-blue-700 transition-colors duration-200";
pub const BUTTON_BUY: &str = "flex-1 px-4 py-2 bg-green-600 rounded hover:bg-green-700 transition-colors flex items-center justify-center gap-1 disabled:bg-gray-600";
pub const BUTTON_VIEW: &str = "flex-1 px-4 py-2 bg-blue-600 rounded hover:bg-blue-700 transition-colors flex items-center justify-center gap-1";
pub const BUTTON_SPIN: &str = "bg-yellow-600 hover:bg-yellow-700 disabled:bg-gray-600 text-black font-bold py-4 px-16 rounded-lg text-xl transition-colors";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-gray-800 py-2 px-3 text-white shadow-sm ring-1 ring-inset ring-gray-700 placeholder:text-gray-500 focus:ring-2 focus:ring-yellow-500";
pub const TEXT_H1: &str = "text-4xl font-bold text-white tracking-wider uppercase";
pub const TEXT_H2: &str = "text-2xl font-bold text-white";
pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-400";
pub const LOADING_SPINNER: &str = "animate-spin rounded-full h-8 w-8 border-b-2 border-yellow-400";
pub const CURRENCY_BADGE: &str = "flex items-center gap-2 bg-black/80 rounded-lg px-3 py-2 border border-yellow-600/50";

// Reel strip.
pub const REEL_FRAME: &str = "relative w-full h-64 overflow-hidden bg-gradient-to-b from-gray-900 to-black rounded-xl shadow-2xl";
pub const REEL_STRIP: &str = "flex h-full items-center";
pub const REEL_FADE_LEFT: &str = "absolute left-0 top-0 w-32 h-full bg-gradient-to-r from-gray-900 via-gray-900/80 to-transparent pointer-events-none z-10";
pub const REEL_FADE_RIGHT: &str = "absolute right-0 top-0 w-32 h-full bg-gradient-to-l from-gray-900 via-gray-900/80 to-transparent pointer-events-none z-10";
pub const REEL_MARKER: &str = "absolute left-1/2 top-0 -translate-x-1/2 w-0.5 h-full bg-yellow-400/70 pointer-events-none z-20";

/// Border and tint classes for a wire rarity tier.
pub fn rarity_classes(rarity: u8) -> &'static str {
    match rarity {
        1 => "border-yellow-400 bg-yellow-900/20",
        2 => "border-purple-400 bg-purple-900/20",
        3 => "border-blue-400 bg-blue-900/20",
        4 => "border-green-400 bg-green-900/20",
        _ => "border-gray-400 bg-gray-900/20",
    }
}

pub fn rarity_text_class(rarity: u8) -> &'static str {
    match rarity {
        1 => "text-yellow-400",
        2 => "text-purple-400",
        3 => "text-blue-400",
        4 => "text-green-400",
        _ => "text-gray-400",
    }
}
