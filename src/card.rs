//! Playing cards and calls.
//!
//! A call is a bid on a card: the caller's partner is whoever plays the
//! `number`-th copy of that card. `found` counts the copies seen so far.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CALL_NUMBER;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Single ASCII letter, for fonts without the suit glyphs.
    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "spade" | "spades" | "♠" => Ok(Suit::Spades),
            "h" | "heart" | "hearts" | "♥" => Ok(Suit::Hearts),
            "d" | "diamond" | "diamonds" | "♦" => Ok(Suit::Diamonds),
            "c" | "club" | "clubs" | "♣" => Ok(Suit::Clubs),
            _ => Err(Error::InvalidSuit(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_uppercase();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str() == wanted)
            .ok_or_else(|| Error::InvalidRank(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayingCard {
    pub rank: Rank,
    pub suit: Suit,
}

impl PlayingCard {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank followed by the suit letter, e.g. `10H`.
    pub fn ascii_label(&self) -> String {
        format!("{}{}", self.rank.as_str(), self.suit.letter())
    }
}

impl fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_str(), self.suit.symbol())
    }
}

// Accepts `A:spades`, `a:s`, `10h`, `Qd`
impl FromStr for PlayingCard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (rank, suit) = match trimmed.split_once(':') {
            Some(parts) => parts,
            None => {
                let split_at = trimmed
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .filter(|i| *i > 0)
                    .ok_or_else(|| Error::InvalidCard(s.to_string()))?;
                trimmed.split_at(split_at)
            }
        };
        Ok(PlayingCard::new(rank.parse()?, suit.parse()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub card: PlayingCard,
    pub number: u32,
    pub found: u32,
}

impl Call {
    pub fn new(card: PlayingCard, number: u32) -> Result<Self> {
        if number == 0 {
            return Err(Error::ZeroCallNumber);
        }
        if number > MAX_CALL_NUMBER {
            return Err(Error::CallNumberTooLarge(number));
        }
        Ok(Self { card, number, found: 0 })
    }

    pub fn is_complete(&self) -> bool {
        self.found >= self.number
    }

    /// One more copy found, wrapping back to zero after `number`.
    pub fn advance_found(&mut self) {
        self.step_found(1);
    }

    /// Undo one copy, wrapping from zero to `number`.
    pub fn retreat_found(&mut self) {
        self.step_found(u64::from(self.number));
    }

    // Widened so calls read from a state file cannot overflow
    fn step_found(&mut self, step: u64) {
        let number = u64::from(self.number);
        let found = u64::from(self.found.min(self.number));
        self.found = ((found + step) % (number + 1)) as u32;
    }
}

// Accepts `K:hearts:2` or `Kh:2`; the target number defaults to 1
impl FromStr for Call {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (card, number) = match trimmed.rsplit_once(':') {
            Some((card, number)) if number.chars().all(|c| c.is_ascii_digit()) => {
                let number = number
                    .parse::<u32>()
                    .map_err(|_| Error::InvalidCall(s.to_string()))?;
                (card, number)
            }
            _ => (trimmed, 1),
        };
        let card = card
            .parse::<PlayingCard>()
            .map_err(|_| Error::InvalidCall(s.to_string()))?;
        Call::new(card, number)
    }
}
