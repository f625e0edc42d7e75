/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month in a non-leap year
/// (index 0 is unused, months are 1-indexed)
pub const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Digits in each `YYYY-MM-DD` field
pub(crate) const ISO_FIELD_WIDTHS: [usize; 3] = [4, 2, 2];

/// Years between the Gregorian epoch and the Year of Our Lady of Discord
pub const YOLD_OFFSET: u16 = 1166;

/// Days in every Discordian season
pub const SEASON_LENGTH: u16 = 73;
/// Days in a Discordian year, not counting St. Tib's Day
pub const DAYS_IN_DISCORDIAN_YEAR: u16 = 365;

/// Gregorian ordinal of 29 February, the day St. Tib's Day replaces
pub const ST_TIBS_ORDINAL: u16 = 60;

/// Season day of the apostle holyday (Mungday, Mojoday, ...)
pub const APOSTLE_HOLYDAY_DAY: u16 = 5;
/// Season day of the flux holyday (Chaoflux, Discoflux, ...)
pub const FLUX_HOLYDAY_DAY: u16 = 50;
