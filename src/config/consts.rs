// src/config/consts.rs

// Source page
pub const SOURCE_URL: &str = "https://www.bot.or.th/th/financial-institutions-holiday.html";

// Renderer
pub const COOKIE_BUTTON_SELECTOR: &str = ".recommended-cookies-button";
pub const COOKIE_WAIT_SECS: u64 = 10;
pub const NAVIGATE_TIMEOUT_SECS: u64 = 30;

// Year resolution
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

// Records
pub const LOCATION: &str = "Thailand";

// Export
pub const PROJECT_NAME: &str = "thai_bank_holidays";
pub const DEFAULT_OUT_DIR: &str = "output";
pub const ICS_EXT: &str = "ics";

// Calendar metadata
pub const TIMEZONE: &str = "Asia/Bangkok";
pub const CAL_NAME_PREFIX: &str = "Thailand Holidays";
pub const CAL_DESC: &str = "Official holidays in Thailand.";
pub const PRODID: &str = "-//thai_bank_holidays//Bank Holiday Calendar//EN";
