use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::VacuumError;

/// Whether a square needs cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dirt {
    Clean,
    Dirty,
}

impl Dirt {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "clean" => Some(Dirt::Clean),
            "dirty" => Some(Dirt::Dirty),
            _ => None,
        }
    }
}

impl fmt::Display for Dirt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dirt::Clean => write!(f, "clean"),
            Dirt::Dirty => write!(f, "dirty"),
        }
    }
}

/// One of the two squares in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    A,
    B,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::A => write!(f, "A"),
            Location::B => write!(f, "B"),
        }
    }
}

/// The dirt on both squares, and where the robot is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VacuumState {
    world: [Dirt; 2],
    location: Location,
}

impl VacuumState {
    pub fn new(a: Dirt, b: Dirt, location: Location) -> Self {
        Self {
            world: [a, b],
            location,
        }
    }

    /// All eight states of the world.
    pub fn all() -> Vec<Self> {
        let mut states = Vec::with_capacity(8);
        for &location in &[Location::A, Location::B] {
            for &a in &[Dirt::Dirty, Dirt::Clean] {
                for &b in &[Dirt::Dirty, Dirt::Clean] {
                    states.push(Self::new(a, b, location));
                }
            }
        }
        states
    }

    pub fn dirt(&self, location: Location) -> Dirt {
        self.world[location as usize]
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is_clean(&self) -> bool {
        self.world.iter().all(|&d| d == Dirt::Clean)
    }

    /// This state with the robot's square cleaned.
    pub fn cleaned(&self) -> Self {
        let mut next = *self;
        next.world[self.location as usize] = Dirt::Clean;
        next
    }

    /// This state with the robot moved to `location`.
    pub fn moved(&self, location: Location) -> Self {
        Self { location, ..*self }
    }
}

impl fmt::Display for VacuumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.world[0], self.world[1], self.location)
    }
}

impl FromStr for VacuumState {
    type Err = VacuumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"(?i)^\s*(clean|dirty)\s*,\s*(clean|dirty)\s*,\s*([ab])\s*$").unwrap();
        }

        let invalid = || VacuumError::InvalidState(s.to_string());
        let cap = RE.captures(s).ok_or_else(invalid)?;

        let a = Dirt::parse(&cap[1]).ok_or_else(invalid)?;
        let b = Dirt::parse(&cap[2]).ok_or_else(invalid)?;
        let location = match &cap[3] {
            "a" | "A" => Location::A,
            _ => Location::B,
        };

        Ok(Self::new(a, b, location))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parse() {
        let state: VacuumState = "dirty,clean,B".parse().unwrap();
        assert_eq!(state, VacuumState::new(Dirt::Dirty, Dirt::Clean, Location::B));

        let state: VacuumState = " Clean , DIRTY , a ".parse().unwrap();
        assert_eq!(state, VacuumState::new(Dirt::Clean, Dirt::Dirty, Location::A));
    }

    #[test]
    fn parse_errors() {
        for bad in &["", "dirty,dirty", "dirty,dirty,C", "muddy,dirty,A", "dirty,dirty,A,B"] {
            match bad.parse::<VacuumState>() {
                Err(VacuumError::InvalidState(s)) => assert_eq!(&s, bad),
                other => panic!("Expected an error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn display_round_trips() {
        for state in VacuumState::all() {
            assert_eq!(state.to_string().parse::<VacuumState>().unwrap(), state);
        }
    }

    #[test]
    fn eight_distinct_states() {
        let states: HashSet<_> = VacuumState::all().into_iter().collect();
        assert_eq!(states.len(), 8);
        assert_eq!(states.iter().filter(|s| s.is_clean()).count(), 2);
    }

    #[test]
    fn clean_and_move() {
        let state = VacuumState::new(Dirt::Dirty, Dirt::Dirty, Location::B);
        let cleaned = state.cleaned();
        assert_eq!(cleaned.dirt(Location::A), Dirt::Dirty);
        assert_eq!(cleaned.dirt(Location::B), Dirt::Clean);
        assert_eq!(cleaned.moved(Location::A).location(), Location::A);
        assert!(!cleaned.is_clean());
        assert!(cleaned.moved(Location::A).cleaned().is_clean());
    }
}
