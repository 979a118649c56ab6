//! Parsing of per-round robot console output.
//!
//! Each printed statement starts with a header line
//! `[<team>:<TYPE>#<id>@<round>] <text>`; any following non-header lines
//! belong to the same statement.

use scrim_core::{BodyId, BodyType};
use tracing::warn;

/// One parsed console statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotLog {
    /// Team letter, `'A'` or `'B'`.
    pub team: char,
    /// Type of the printing body.
    pub robot_type: BodyType,
    /// Id of the printing body.
    pub id: BodyId,
    /// Round named in the header.
    pub round: i32,
    /// Header text plus continuation lines, joined with `\n`.
    pub text: String,
}

struct Header<'a> {
    team: char,
    robot_type: BodyType,
    id: i32,
    round: i32,
    rest: &'a str,
}

fn parse_header(line: &str) -> Option<Header<'_>> {
    let body = line.strip_prefix('[')?;
    let (tag, rest) = body.split_once(']')?;
    let (team, tag) = tag.split_once(':')?;
    let team = match team {
        "A" => 'A',
        "B" => 'B',
        _ => return None,
    };
    let (type_name, tag) = tag.split_once('#')?;
    let (id, round) = tag.split_once('@')?;
    Some(Header {
        team,
        robot_type: BodyType::from_name(type_name)?,
        id: id.parse().ok()?,
        round: round.parse().ok()?,
        rest: rest.strip_prefix(' ').unwrap_or(rest),
    })
}

/// Parse the console output printed during `round`.
///
/// Returns `None` when a non-empty line appears where a header is
/// expected; the whole round is then considered malformed.
pub fn parse_round_logs(round: i32, text: &str) -> Option<Vec<RobotLog>> {
    let mut out = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }
        let Some(header) = parse_header(line) else {
            warn!(target: "scrim::logs", round, line, "malformed robot log line, omitting round");
            return None;
        };

        let mut body = String::from(header.rest);
        while let Some(next) = lines.next_if(|l| parse_header(l).is_none()) {
            if next.is_empty() {
                continue;
            }
            body.push('\n');
            body.push_str(next);
        }

        if header.round != round {
            warn!(
                target: "scrim::logs",
                round,
                logged_round = header.round,
                id = header.id,
                "robot computation was cut off while printing"
            );
        }

        out.push(RobotLog {
            team: header.team,
            robot_type: header.robot_type,
            id: BodyId(header.id),
            round: header.round,
            text: body,
        });
    }
    Some(out)
}
