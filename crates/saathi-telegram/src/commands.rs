// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command surface parsing.
//!
//! Matches inbound text against the slash commands the bot understands.
//! Unknown slash commands are deliberately treated as free text so the
//! AI path still answers them.

/// A recognized, well-formed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Raj,
    Ping,
    SetAlarm { hour: u32, minute: u32 },
    RemoveAlarm,
}

/// Result of matching inbound text against the command surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A recognized, well-formed command.
    Command(Command),
    /// A recognized command with bad arguments; reply with this text.
    Usage(&'static str),
    /// Not a command the bot knows; route as free text.
    Text,
}

pub const SETALARM_USAGE: &str = "Usage: /setalarm HH:MM (24-hour)";
pub const INVALID_TIME_REPLY: &str = "Invalid time format. Use HH:MM (24-hour).";

/// Parses inbound text into the command surface.
///
/// Range validation of the alarm time is left to the registry; this only
/// rejects text that does not look like `HH:MM` at all.
pub fn parse(text: &str) -> Parsed {
    let mut parts = text.split_whitespace();
    let head = match parts.next() {
        Some(h) if h.starts_with('/') => h,
        _ => return Parsed::Text,
    };

    // Strip an @BotName suffix so "/ping@SaathiBot" still matches.
    let name = head
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or_default();

    match name {
        "start" => Parsed::Command(Command::Start),
        "help" => Parsed::Command(Command::Help),
        "raj" => Parsed::Command(Command::Raj),
        "ping" => Parsed::Command(Command::Ping),
        "removealarm" => Parsed::Command(Command::RemoveAlarm),
        "setalarm" => match parts.next() {
            None => Parsed::Usage(SETALARM_USAGE),
            Some(arg) => match parse_time(arg) {
                Some((hour, minute)) => Parsed::Command(Command::SetAlarm { hour, minute }),
                None => Parsed::Usage(INVALID_TIME_REPLY),
            },
        },
        _ => Parsed::Text,
    }
}

/// Splits `HH:MM` into numeric fields. Returns `None` for anything that is
/// not two colon-separated numbers; out-of-range values pass through so the
/// registry rejects them with a proper error.
fn parse_time(arg: &str) -> Option<(u32, u32)> {
    let (hh, mm) = arg.split_once(':')?;
    let hour = hh.parse::<u32>().ok()?;
    let minute = mm.parse::<u32>().ok()?;
    Some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_commands() {
        assert_eq!(parse("/start"), Parsed::Command(Command::Start));
        assert_eq!(parse("/help"), Parsed::Command(Command::Help));
        assert_eq!(parse("/raj"), Parsed::Command(Command::Raj));
        assert_eq!(parse("/ping"), Parsed::Command(Command::Ping));
        assert_eq!(parse("/removealarm"), Parsed::Command(Command::RemoveAlarm));
    }

    #[test]
    fn parses_setalarm_with_time() {
        assert_eq!(
            parse("/setalarm 07:30"),
            Parsed::Command(Command::SetAlarm {
                hour: 7,
                minute: 30
            })
        );
        assert_eq!(
            parse("/setalarm 9:5"),
            Parsed::Command(Command::SetAlarm { hour: 9, minute: 5 })
        );
    }

    #[test]
    fn setalarm_without_argument_is_usage() {
        assert_eq!(parse("/setalarm"), Parsed::Usage(SETALARM_USAGE));
    }

    #[test]
    fn setalarm_with_malformed_time_is_usage() {
        assert_eq!(parse("/setalarm nine"), Parsed::Usage(INVALID_TIME_REPLY));
        assert_eq!(parse("/setalarm 0930"), Parsed::Usage(INVALID_TIME_REPLY));
        assert_eq!(parse("/setalarm 9:xx"), Parsed::Usage(INVALID_TIME_REPLY));
        assert_eq!(parse("/setalarm -1:30"), Parsed::Usage(INVALID_TIME_REPLY));
    }

    #[test]
    fn out_of_range_time_still_parses_for_registry_rejection() {
        assert_eq!(
            parse("/setalarm 24:00"),
            Parsed::Command(Command::SetAlarm {
                hour: 24,
                minute: 0
            })
        );
        assert_eq!(
            parse("/setalarm 9:60"),
            Parsed::Command(Command::SetAlarm {
                hour: 9,
                minute: 60
            })
        );
    }

    #[test]
    fn bot_name_suffix_is_stripped() {
        assert_eq!(parse("/ping@SaathiBot"), Parsed::Command(Command::Ping));
    }

    #[test]
    fn unknown_command_and_free_text_route_to_text() {
        assert_eq!(parse("/weather"), Parsed::Text);
        assert_eq!(parse("hello there"), Parsed::Text);
        assert_eq!(parse(""), Parsed::Text);
    }
}
