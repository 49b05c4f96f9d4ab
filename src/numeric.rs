//! Known numeric reply codes.
//!
//! Servers report most state through three-digit numerics. The engine
//! keeps two separate known-code tables — informational replies and error
//! replies — because they are classified by different dispatcher families.
//! Membership in a table is what makes a line "handled"; a known code with
//! no enriched handler still counts, it just logs and publishes nothing.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol

#![allow(non_camel_case_types)]

/// An informational (`RPL_`) reply code the engine recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum InfoReply {
    /// 001 - Welcome to the network
    RPL_WELCOME = 1,
    /// 002 - Your host
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info
    RPL_MYINFO = 4,
    /// 005 - Supported features
    RPL_ISUPPORT = 5,
    /// 251 - Luser client count
    RPL_LUSERCLIENT = 251,
    /// 252 - Luser operator count
    RPL_LUSEROP = 252,
    /// 253 - Luser unknown connections
    RPL_LUSERUNKNOWN = 253,
    /// 254 - Luser channel count
    RPL_LUSERCHANNELS = 254,
    /// 255 - Luser local info
    RPL_LUSERME = 255,
    /// 265 - Local users
    RPL_LOCALUSERS = 265,
    /// 266 - Global users
    RPL_GLOBALUSERS = 266,
    /// 301 - User is away
    RPL_AWAY = 301,
    /// 305 - No longer marked away
    RPL_UNAWAY = 305,
    /// 306 - Marked away
    RPL_NOWAWAY = 306,
    /// 311 - WHOIS user info
    RPL_WHOISUSER = 311,
    /// 312 - WHOIS server
    RPL_WHOISSERVER = 312,
    /// 315 - End of WHO
    RPL_ENDOFWHO = 315,
    /// 317 - WHOIS idle
    RPL_WHOISIDLE = 317,
    /// 318 - End of WHOIS
    RPL_ENDOFWHOIS = 318,
    /// 319 - WHOIS channels
    RPL_WHOISCHANNELS = 319,
    /// 321 - LIST start
    RPL_LISTSTART = 321,
    /// 322 - LIST entry
    RPL_LIST = 322,
    /// 323 - End of LIST
    RPL_LISTEND = 323,
    /// 324 - Channel mode is
    RPL_CHANNELMODEIS = 324,
    /// 329 - Channel creation time
    RPL_CREATIONTIME = 329,
    /// 331 - No topic set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic (enriched: publishes a topic event)
    RPL_TOPIC = 332,
    /// 333 - Topic set by/at
    RPL_TOPICWHOTIME = 333,
    /// 341 - Invite confirmed
    RPL_INVITING = 341,
    /// 352 - WHO entry
    RPL_WHOREPLY = 352,
    /// 353 - Name list (enriched: publishes a names event)
    RPL_NAMREPLY = 353,
    /// 366 - End of names
    RPL_ENDOFNAMES = 366,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 375 - MOTD start
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
}

impl InfoReply {
    /// The numeric code as u16.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a code in the known-info table.
    pub fn from_code(code: u16) -> Option<InfoReply> {
        Some(match code {
            1 => InfoReply::RPL_WELCOME,
            2 => InfoReply::RPL_YOURHOST,
            3 => InfoReply::RPL_CREATED,
            4 => InfoReply::RPL_MYINFO,
            5 => InfoReply::RPL_ISUPPORT,
            251 => InfoReply::RPL_LUSERCLIENT,
            252 => InfoReply::RPL_LUSEROP,
            253 => InfoReply::RPL_LUSERUNKNOWN,
            254 => InfoReply::RPL_LUSERCHANNELS,
            255 => InfoReply::RPL_LUSERME,
            265 => InfoReply::RPL_LOCALUSERS,
            266 => InfoReply::RPL_GLOBALUSERS,
            301 => InfoReply::RPL_AWAY,
            305 => InfoReply::RPL_UNAWAY,
            306 => InfoReply::RPL_NOWAWAY,
            311 => InfoReply::RPL_WHOISUSER,
            312 => InfoReply::RPL_WHOISSERVER,
            315 => InfoReply::RPL_ENDOFWHO,
            317 => InfoReply::RPL_WHOISIDLE,
            318 => InfoReply::RPL_ENDOFWHOIS,
            319 => InfoReply::RPL_WHOISCHANNELS,
            321 => InfoReply::RPL_LISTSTART,
            322 => InfoReply::RPL_LIST,
            323 => InfoReply::RPL_LISTEND,
            324 => InfoReply::RPL_CHANNELMODEIS,
            329 => InfoReply::RPL_CREATIONTIME,
            331 => InfoReply::RPL_NOTOPIC,
            332 => InfoReply::RPL_TOPIC,
            333 => InfoReply::RPL_TOPICWHOTIME,
            341 => InfoReply::RPL_INVITING,
            352 => InfoReply::RPL_WHOREPLY,
            353 => InfoReply::RPL_NAMREPLY,
            366 => InfoReply::RPL_ENDOFNAMES,
            372 => InfoReply::RPL_MOTD,
            375 => InfoReply::RPL_MOTDSTART,
            376 => InfoReply::RPL_ENDOFMOTD,
            _ => return None,
        })
    }
}

impl std::fmt::Display for InfoReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// An error (`ERR_`) reply code the engine recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum ErrorReply {
    /// 401 - No such nick
    ERR_NOSUCHNICK = 401,
    /// 402 - No such server
    ERR_NOSUCHSERVER = 402,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 405 - Too many channels
    ERR_TOOMANYCHANNELS = 405,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - No MOTD
    ERR_NOMOTD = 422,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEOUSNICKNAME = 432,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE = 433,
    /// 441 - User not in channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - Not on channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - User already on channel
    ERR_USERONCHANNEL = 443,
    /// 451 - Not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Need more parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTERED = 462,
    /// 464 - Password mismatch
    ERR_PASSWDMISMATCH = 464,
    /// 465 - Banned from server
    ERR_YOUREBANNEDCREEP = 465,
    /// 471 - Channel is full (enriched: publishes invite-required)
    ERR_CHANNELISFULL = 471,
    /// 472 - Unknown mode
    ERR_UNKNOWNMODE = 472,
    /// 473 - Invite-only channel (enriched: publishes invite-required)
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Banned from channel
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Bad channel key (enriched: publishes invite-required)
    ERR_BADCHANNELKEY = 475,
    /// 476 - Bad channel mask
    ERR_BADCHANMASK = 476,
    /// 481 - No privileges
    ERR_NOPRIVILEGES = 481,
    /// 482 - Channel operator privileges needed
    ERR_CHANOPRIVSNEEDED = 482,
    /// 501 - Unknown user mode flag
    ERR_UMODEUNKNOWNFLAG = 501,
    /// 502 - User modes don't match
    ERR_USERSDONTMATCH = 502,
}

impl ErrorReply {
    /// The numeric code as u16.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a code in the known-error table.
    pub fn from_code(code: u16) -> Option<ErrorReply> {
        Some(match code {
            401 => ErrorReply::ERR_NOSUCHNICK,
            402 => ErrorReply::ERR_NOSUCHSERVER,
            403 => ErrorReply::ERR_NOSUCHCHANNEL,
            404 => ErrorReply::ERR_CANNOTSENDTOCHAN,
            405 => ErrorReply::ERR_TOOMANYCHANNELS,
            421 => ErrorReply::ERR_UNKNOWNCOMMAND,
            422 => ErrorReply::ERR_NOMOTD,
            431 => ErrorReply::ERR_NONICKNAMEGIVEN,
            432 => ErrorReply::ERR_ERRONEOUSNICKNAME,
            433 => ErrorReply::ERR_NICKNAMEINUSE,
            441 => ErrorReply::ERR_USERNOTINCHANNEL,
            442 => ErrorReply::ERR_NOTONCHANNEL,
            443 => ErrorReply::ERR_USERONCHANNEL,
            451 => ErrorReply::ERR_NOTREGISTERED,
            461 => ErrorReply::ERR_NEEDMOREPARAMS,
            462 => ErrorReply::ERR_ALREADYREGISTERED,
            464 => ErrorReply::ERR_PASSWDMISMATCH,
            465 => ErrorReply::ERR_YOUREBANNEDCREEP,
            471 => ErrorReply::ERR_CHANNELISFULL,
            472 => ErrorReply::ERR_UNKNOWNMODE,
            473 => ErrorReply::ERR_INVITEONLYCHAN,
            474 => ErrorReply::ERR_BANNEDFROMCHAN,
            475 => ErrorReply::ERR_BADCHANNELKEY,
            476 => ErrorReply::ERR_BADCHANMASK,
            481 => ErrorReply::ERR_NOPRIVILEGES,
            482 => ErrorReply::ERR_CHANOPRIVSNEEDED,
            501 => ErrorReply::ERR_UMODEUNKNOWNFLAG,
            502 => ErrorReply::ERR_USERSDONTMATCH,
            _ => return None,
        })
    }

    /// Whether this error signals a join the bot cannot complete without
    /// assistance (an invitation or key).
    #[inline]
    pub fn needs_invite(self) -> bool {
        matches!(
            self,
            ErrorReply::ERR_CHANNELISFULL
                | ErrorReply::ERR_INVITEONLYCHAN
                | ErrorReply::ERR_BADCHANNELKEY
        )
    }
}

impl std::fmt::Display for ErrorReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_from_code() {
        assert_eq!(InfoReply::from_code(332), Some(InfoReply::RPL_TOPIC));
        assert_eq!(InfoReply::from_code(353), Some(InfoReply::RPL_NAMREPLY));
        assert_eq!(InfoReply::from_code(999), None);
        // Error codes are not in the info table.
        assert_eq!(InfoReply::from_code(473), None);
    }

    #[test]
    fn test_error_from_code() {
        assert_eq!(
            ErrorReply::from_code(473),
            Some(ErrorReply::ERR_INVITEONLYCHAN)
        );
        assert_eq!(ErrorReply::from_code(332), None);
        assert_eq!(ErrorReply::from_code(999), None);
    }

    #[test]
    fn test_needs_invite() {
        assert!(ErrorReply::ERR_CHANNELISFULL.needs_invite());
        assert!(ErrorReply::ERR_INVITEONLYCHAN.needs_invite());
        assert!(ErrorReply::ERR_BADCHANNELKEY.needs_invite());
        assert!(!ErrorReply::ERR_NICKNAMEINUSE.needs_invite());
    }

    #[test]
    fn test_display_pads_to_three_digits() {
        assert_eq!(InfoReply::RPL_WELCOME.to_string(), "001");
        assert_eq!(ErrorReply::ERR_NOSUCHNICK.to_string(), "401");
    }
}
