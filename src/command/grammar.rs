//! The command grammar: an ordered table of nom rules
//!
//! A line must be consumed entirely by a rule to match, and the first
//! matching rule wins, so table order is command precedence. An argument
//! (`ARG`) is any run of spaces followed by a run of non-whitespace; an
//! empty run means the argument is absent.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_while};
use nom::combinator::{eof, opt, value};
use nom::sequence::{pair, preceded};
use nom::{IResult, Parser};

use crate::core::types::Direction;

/// A recognized command before its arguments are resolved against the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Again,
    Debug(Option<&'a str>),
    Pass,
    Look,
    Doors,
    Examine(Option<&'a str>),
    Inventory,
    Take(Option<&'a str>),
    Drop(Option<&'a str>),
    Consume(Option<&'a str>),
    Give {
        target: Option<&'a str>,
        item: Option<&'a str>,
    },
    Go(Direction),
    Attack(Option<&'a str>),
    Set {
        key: Option<&'a str>,
        value: Option<&'a str>,
    },
    Curse(Option<&'a str>),
}

type Rule = for<'a> fn(&'a str) -> IResult<&'a str, Command<'a>>;

/// Rules in priority order
const RULES: &[(&str, Rule)] = &[
    ("again", again),
    ("debug", debug),
    ("pass", pass),
    ("look", look),
    ("doors", doors),
    ("exits", exits),
    ("examine", examine),
    ("inventory", inventory),
    ("take", take),
    ("drop", drop),
    ("consume", consume),
    ("give", give),
    ("north", north),
    ("south", south),
    ("east", east),
    ("west", west),
    ("up", up),
    ("down", down),
    ("attack", attack),
    ("set", set),
    ("curse", curse),
];

/// Match an already lower-cased line against the rule table
pub fn parse(line: &str) -> Option<Command<'_>> {
    RULES.iter().find_map(|(name, rule)| match rule(line) {
        Ok(("", command)) => {
            tracing::trace!(rule = name, ?command, "Command matched");
            Some(command)
        }
        _ => None,
    })
}

/// Spaces, then a run of non-whitespace
fn arg(input: &str) -> IResult<&str, Option<&str>> {
    preceded(take_while(|c: char| c == ' '), take_till(char::is_whitespace))
        .map(|word: &str| (!word.is_empty()).then_some(word))
        .parse(input)
}

fn again(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Again, alt((tag("."), tag("again"), eof))).parse(input)
}

fn debug(input: &str) -> IResult<&str, Command<'_>> {
    preceded(tag("debug"), arg).map(Command::Debug).parse(input)
}

fn pass(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Pass, alt((tag("wait"), tag("pass")))).parse(input)
}

fn look(input: &str) -> IResult<&str, Command<'_>> {
    value(
        Command::Look,
        pair(tag("l"), opt(alt((tag("s"), tag("l"), tag("ook"))))),
    )
    .parse(input)
}

fn doors(input: &str) -> IResult<&str, Command<'_>> {
    value(
        Command::Doors,
        pair(tag("do"), opt(pair(tag("or"), opt(tag("s"))))),
    )
    .parse(input)
}

fn exits(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Doors, pair(tag("exit"), opt(tag("s")))).parse(input)
}

fn examine(input: &str) -> IResult<&str, Command<'_>> {
    preceded(pair(tag("ex"), opt(tag("amine"))), arg)
        .map(Command::Examine)
        .parse(input)
}

fn inventory(input: &str) -> IResult<&str, Command<'_>> {
    value(Command::Inventory, pair(tag("i"), opt(tag("nventory")))).parse(input)
}

fn take(input: &str) -> IResult<&str, Command<'_>> {
    preceded(tag("take"), arg).map(Command::Take).parse(input)
}

fn drop(input: &str) -> IResult<&str, Command<'_>> {
    preceded(tag("drop"), arg).map(Command::Drop).parse(input)
}

fn consume(input: &str) -> IResult<&str, Command<'_>> {
    preceded(alt((tag("eat"), tag("consume"), tag("quaff"))), arg)
        .map(Command::Consume)
        .parse(input)
}

fn give(input: &str) -> IResult<&str, Command<'_>> {
    preceded(tag("give"), pair(arg, arg))
        .map(|(target, item)| Command::Give { target, item })
        .parse(input)
}

/// `short` alone or spelled out as `short` + `rest`
fn compass<'a>(
    input: &'a str,
    short: &'static str,
    rest: &'static str,
    direction: Direction,
) -> IResult<&'a str, Command<'a>> {
    value(Command::Go(direction), pair(tag(short), opt(tag(rest)))).parse(input)
}

fn north(input: &str) -> IResult<&str, Command<'_>> {
    compass(input, "n", "orth", Direction::North)
}

fn south(input: &str) -> IResult<&str, Command<'_>> {
    compass(input, "s", "outh", Direction::South)
}

fn east(input: &str) -> IResult<&str, Command<'_>> {
    compass(input, "e", "ast", Direction::East)
}

fn west(input: &str) -> IResult<&str, Command<'_>> {
    compass(input, "w", "est", Direction::West)
}

fn up(input: &str) -> IResult<&str, Command<'_>> {
    compass(input, "u", "p", Direction::Up)
}

fn down(input: &str) -> IResult<&str, Command<'_>> {
    compass(input, "d", "own", Direction::Down)
}

fn attack(input: &str) -> IResult<&str, Command<'_>> {
    preceded(alt((tag("atk"), tag("attack"))), arg)
        .map(Command::Attack)
        .parse(input)
}

fn set(input: &str) -> IResult<&str, Command<'_>> {
    preceded(tag("set"), pair(arg, arg))
        .map(|(key, value)| Command::Set { key, value })
        .parse(input)
}

fn curse(input: &str) -> IResult<&str, Command<'_>> {
    preceded(tag("curse"), arg).map(Command::Curse).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_forms() {
        assert_eq!(parse("."), Some(Command::Again));
        assert_eq!(parse(""), Some(Command::Again));
        assert_eq!(parse("again"), Some(Command::Again));
    }

    #[test]
    fn test_info_shorthands() {
        for line in ["l", "ls", "ll", "look"] {
            assert_eq!(parse(line), Some(Command::Look), "{line}");
        }
        for line in ["do", "door", "doors", "exit", "exits"] {
            assert_eq!(parse(line), Some(Command::Doors), "{line}");
        }
        assert_eq!(parse("i"), Some(Command::Inventory));
        assert_eq!(parse("inventory"), Some(Command::Inventory));
    }

    #[test]
    fn test_examine_precedes_east() {
        assert_eq!(parse("ex sword"), Some(Command::Examine(Some("sword"))));
        assert_eq!(parse("examine sword"), Some(Command::Examine(Some("sword"))));
        assert_eq!(parse("ex"), Some(Command::Examine(None)));
        assert_eq!(parse("e"), Some(Command::Go(Direction::East)));
        assert_eq!(parse("east"), Some(Command::Go(Direction::East)));
    }

    #[test]
    fn test_prefix_collisions_resolve_by_order() {
        assert_eq!(parse("d"), Some(Command::Go(Direction::Down)));
        assert_eq!(parse("down"), Some(Command::Go(Direction::Down)));
        assert_eq!(parse("drop"), Some(Command::Drop(None)));
        assert_eq!(parse("s"), Some(Command::Go(Direction::South)));
        assert_eq!(parse("wait"), Some(Command::Pass));
        assert_eq!(parse("w"), Some(Command::Go(Direction::West)));
    }

    #[test]
    fn test_arguments_are_single_words() {
        assert_eq!(parse("take apple"), Some(Command::Take(Some("apple"))));
        assert_eq!(parse("take   apple"), Some(Command::Take(Some("apple"))));
        assert_eq!(parse("take"), Some(Command::Take(None)));
        assert_eq!(parse("take rusty sword"), None);
    }

    #[test]
    fn test_two_argument_rules() {
        assert_eq!(
            parse("give bob apple"),
            Some(Command::Give {
                target: Some("bob"),
                item: Some("apple")
            })
        );
        assert_eq!(
            parse("set attack thrown"),
            Some(Command::Set {
                key: Some("attack"),
                value: Some("thrown")
            })
        );
        assert_eq!(
            parse("give"),
            Some(Command::Give {
                target: None,
                item: None
            })
        );
    }

    #[test]
    fn test_attack_aliases() {
        assert_eq!(parse("atk goblin"), Some(Command::Attack(Some("goblin"))));
        assert_eq!(parse("attack goblin"), Some(Command::Attack(Some("goblin"))));
        assert_eq!(parse("attack"), Some(Command::Attack(None)));
    }

    #[test]
    fn test_consume_verbs() {
        for verb in ["eat", "consume", "quaff"] {
            let line = format!("{verb} potion");
            assert_eq!(parse(&line), Some(Command::Consume(Some("potion"))));
        }
    }

    #[test]
    fn test_unknown_text_matches_nothing() {
        assert_eq!(parse("xyzzy123"), None);
        assert_eq!(parse("no"), None);
        assert_eq!(parse("look "), None);
    }

    #[test]
    fn test_curse_is_lowest_priority() {
        assert_eq!(parse("curse goblin"), Some(Command::Curse(Some("goblin"))));
    }
}
