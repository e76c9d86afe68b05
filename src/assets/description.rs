//! Parser for `actions.txt` animation descriptions

use anyhow::{Context, bail};

use crate::sim::animation::PlayMode;

/// One parsed description line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDecl {
    pub name: String,
    pub mode: PlayMode,
    /// Ticks each sequential frame is held
    pub holds: Vec<u32>,
}

impl ActionDecl {
    /// Length of the expanded per-tick sequence
    pub fn total_ticks(&self) -> usize {
        self.holds.iter().map(|&h| h as usize).sum()
    }
}

/// Parse a whole description. Blank lines are skipped; anything else must
/// be `<name> <loop|once> <hold>...` with at least one hold count.
pub fn parse_description(text: &str) -> anyhow::Result<Vec<ActionDecl>> {
    let mut decls = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line_no = n + 1;
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else { continue };

        let Some(mode) = fields.next() else {
            bail!("line {line_no}: action `{name}` has no play mode");
        };
        let Some(mode) = PlayMode::parse(mode) else {
            bail!("line {line_no}: unknown play mode `{mode}` (expected loop or once)");
        };

        let holds = fields
            .map(|f| {
                f.parse::<u32>()
                    .with_context(|| format!("line {line_no}: bad frame hold count `{f}`"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if holds.is_empty() {
            bail!("line {line_no}: action `{name}` lists no frames");
        }

        decls.push(ActionDecl {
            name: name.to_string(),
            mode,
            holds,
        });
    }
    Ok(decls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_actions() {
        let decls = parse_description("idle loop 1\n\nhit once 3 2 4\n").unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].name, "idle");
        assert_eq!(decls[0].mode, PlayMode::Loop);
        assert_eq!(decls[1].holds, vec![3, 2, 4]);
        assert_eq!(decls[1].total_ticks(), 9);
    }

    #[test]
    fn test_parse_tolerates_crlf_and_extra_spaces() {
        let decls = parse_description("normal  loop 1\r\nclick once 2\r\n").unwrap();
        assert_eq!(decls[0].name, "normal");
        assert_eq!(decls[1].holds, vec![2]);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_description("idle").is_err());
        assert!(parse_description("idle forever 1").is_err());
        assert!(parse_description("idle loop").is_err());
        assert!(parse_description("idle loop two").is_err());
        assert!(parse_description("idle loop -1").is_err());
    }

    #[test]
    fn test_error_mentions_line_number() {
        let err = parse_description("idle loop 1\nhit once x").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
