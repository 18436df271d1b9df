pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const PROGRAM_UNKNOWN: &str = "<unknown>";
