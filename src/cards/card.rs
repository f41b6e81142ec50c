//! Card faces.
//!
//! A card is an immutable (animal, background) pair. Cards are identified
//! on the board by `CardId`, a stable index into the match's [`CardPool`].
//!
//! [`CardPool`]: super::CardPool

use std::fmt;

use serde::{Deserialize, Serialize};

/// The animal printed on a card. Decides the expert-mode ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animal {
    Crab,
    Penguin,
    Octopus,
    Turtle,
    Walrus,
}

impl Animal {
    pub const ALL: [Animal; 5] = [
        Animal::Crab,
        Animal::Penguin,
        Animal::Octopus,
        Animal::Turtle,
        Animal::Walrus,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Animal::Crab => "Crab",
            Animal::Penguin => "Penguin",
            Animal::Octopus => "Octopus",
            Animal::Turtle => "Turtle",
            Animal::Walrus => "Walrus",
        }
    }

    /// Capital letter drawn in the middle of the card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Animal::Crab => 'C',
            Animal::Penguin => 'P',
            Animal::Octopus => 'O',
            Animal::Turtle => 'T',
            Animal::Walrus => 'W',
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background colour of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    Red,
    Green,
    Purple,
    Blue,
    Yellow,
}

impl Background {
    pub const ALL: [Background; 5] = [
        Background::Red,
        Background::Green,
        Background::Purple,
        Background::Blue,
        Background::Yellow,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Background::Red => "Red",
            Background::Green => "Green",
            Background::Purple => "Purple",
            Background::Blue => "Blue",
            Background::Yellow => "Yellow",
        }
    }

    /// Lowercase letter used to paint the card border.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Background::Red => 'r',
            Background::Green => 'g',
            Background::Purple => 'p',
            Background::Blue => 'b',
            Background::Yellow => 'y',
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a card in the [`CardPool`](super::CardPool).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    animal: Animal,
    background: Background,
}

impl Card {
    /// Rows a card occupies when drawn.
    pub const ROWS: usize = 3;

    #[must_use]
    pub const fn new(animal: Animal, background: Background) -> Self {
        Self { animal, background }
    }

    #[must_use]
    pub const fn animal(&self) -> Animal {
        self.animal
    }

    #[must_use]
    pub const fn background(&self) -> Background {
        self.background
    }

    /// One of the three 3-character rows of the card picture.
    ///
    /// ```
    /// use memoarrr::cards::{Animal, Background, Card};
    ///
    /// let card = Card::new(Animal::Crab, Background::Red);
    /// assert_eq!(card.row(0), "rrr");
    /// assert_eq!(card.row(1), "rCr");
    /// assert_eq!(card.row(2), "rrr");
    /// ```
    #[must_use]
    pub fn row(&self, row: usize) -> String {
        let bg = self.background.symbol();
        if row == 1 {
            [bg, self.animal.symbol(), bg].iter().collect()
        } else {
            [bg; 3].iter().collect()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.background, self.animal)
    }
}
